//! Two-click range selection state machine for the season calendar.
//!
//! The first click on a day places an anchor; the second click paints the
//! span between anchor and click onto the selected season. A single click
//! on a day the selected season already owns toggles that day off instead.
//!
//! ```text
//! Idle --click(owned by selected)--> Idle          [RemoveDay]
//! Idle --click(other)--------------> AnchorSet(D)  [AnchorPlaced]
//! AnchorSet(A) --click(D)----------> Idle          [Paint min(A,D)..=max(A,D)]
//! AnchorSet(A) --escape------------> Idle          [Cancelled]
//! any --select_season / set_year---> Idle
//! ```
//!
//! Transitions only describe what should happen; [`Selection::apply`] runs
//! the resulting [`Effect`] through the partition engine.

use serde::{Deserialize, Serialize};

use crate::codec::expand;
use crate::error::CoreError;
use crate::partition::{paint_range, remove_day_in, season_for_day};
use crate::types::{DateRange, Day, DaySet, SeasonCollection, SeasonId};

/// Whether a range is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "anchor", rename_all = "snake_case")]
pub enum SelectionState {
    Idle,
    AnchorSet(Day),
}

/// The outcome of one interaction event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Nothing happens (no season selected, or the event was irrelevant).
    None,
    /// The first click of a range was registered.
    AnchorPlaced { day: Day },
    /// A pending anchor was discarded.
    Cancelled,
    /// Paint `from..=to` onto `season_id`.
    Paint {
        season_id: SeasonId,
        from: Day,
        to: Day,
    },
    /// Toggle `day` off `season_id`.
    RemoveDay { season_id: SeasonId, day: Day },
}

impl Effect {
    /// `true` for effects that change the season collection.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Effect::Paint { .. } | Effect::RemoveDay { .. })
    }
}

/// Selection state for one operator editing one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    year: i32,
    selected_season_id: Option<SeasonId>,
    state: SelectionState,
}

impl Selection {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            selected_season_id: None,
            state: SelectionState::Idle,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn selected_season_id(&self) -> Option<&str> {
        self.selected_season_id.as_deref()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Choose the season that clicks paint onto. Switching abandons any
    /// pending anchor.
    pub fn select_season(&mut self, season_id: Option<SeasonId>) -> Effect {
        if self.selected_season_id == season_id {
            return Effect::None;
        }
        self.selected_season_id = season_id;
        self.reset()
    }

    /// Switch the active year. Switching abandons any pending anchor.
    pub fn set_year(&mut self, year: i32) -> Effect {
        if self.year == year {
            return Effect::None;
        }
        self.year = year;
        self.reset()
    }

    /// Register a click on `day`.
    ///
    /// Ignored when no season is selected or the day lies outside the active
    /// year.
    pub fn click(&mut self, seasons: &SeasonCollection, day: Day) -> Effect {
        let Some(season_id) = self.selected_season_id.clone() else {
            return Effect::None;
        };
        if day.year() != self.year {
            return Effect::None;
        }

        match self.state {
            SelectionState::Idle => {
                if season_for_day(seasons, day) == Some(&season_id) {
                    Effect::RemoveDay { season_id, day }
                } else {
                    self.state = SelectionState::AnchorSet(day);
                    Effect::AnchorPlaced { day }
                }
            }
            SelectionState::AnchorSet(anchor) => {
                self.state = SelectionState::Idle;
                Effect::Paint {
                    season_id,
                    from: anchor.min(day),
                    to: anchor.max(day),
                }
            }
        }
    }

    /// Discard a pending anchor.
    pub fn escape(&mut self) -> Effect {
        self.reset()
    }

    /// Days that would be painted if `day` were clicked next.
    ///
    /// Empty while idle. Never touches the season collection.
    pub fn preview(&self, day: Day) -> Result<DaySet, CoreError> {
        match self.state {
            SelectionState::Idle => Ok(DaySet::new()),
            SelectionState::AnchorSet(anchor) => {
                expand(&[DateRange::new(anchor.min(day), anchor.max(day))?])
            }
        }
    }

    /// Run a mutating effect against `seasons`.
    ///
    /// Returns `None` for effects that leave the collection alone.
    pub fn apply(
        effect: &Effect,
        seasons: &SeasonCollection,
    ) -> Result<Option<SeasonCollection>, CoreError> {
        match effect {
            Effect::Paint {
                season_id,
                from,
                to,
            } => paint_range(seasons, season_id, *from, *to).map(Some),
            Effect::RemoveDay { season_id, day } => {
                remove_day_in(seasons, season_id, *day).map(Some)
            }
            Effect::None | Effect::AnchorPlaced { .. } | Effect::Cancelled => Ok(None),
        }
    }

    fn reset(&mut self) -> Effect {
        match std::mem::replace(&mut self.state, SelectionState::Idle) {
            SelectionState::AnchorSet(_) => Effect::Cancelled,
            SelectionState::Idle => Effect::None,
        }
    }
}
