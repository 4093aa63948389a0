//! Staykit API server library.
//!
//! The imperative shell around `staykit_core`: configuration, shared state,
//! persistence, editor sessions, error mapping and routes. Exposed as a
//! library so integration tests and the binary entrypoint share them.

pub mod background;
pub mod config;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod locks;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
