//! Staykit seasonal calendar engine.
//!
//! Pure functions over [`types::SeasonCollection`] snapshots: painting date
//! ranges onto seasons, toggling days off, copying a year forward and
//! reporting coverage. Nothing here performs I/O or logs; the host owns all
//! state and persistence.

pub mod calendar;
pub mod codec;
pub mod coverage;
pub mod error;
pub mod integrity;
pub mod month_view;
pub mod partition;
pub mod season;
pub mod selection;
pub mod types;
pub mod year_copy;
