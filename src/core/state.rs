//! The closed set of views the auction page can show.
//!
//! Each variant's identifier doubles as the id of the DOM element that holds
//! that view, so `ViewState::id` is also the lookup key used by the binder.

use crate::core::BindError;
use std::fmt;
use std::str::FromStr;

/// A page view. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Bids are open; shown on first load.
    #[default]
    Bidding,
    /// Bidding closed; outcome on display.
    Results,
}

impl ViewState {
    /// Every variant, in page order.
    pub const ALL: [ViewState; 2] = [ViewState::Bidding, ViewState::Results];

    /// Identifier used both as the DOM element id and as the status text.
    #[inline]
    pub fn id(self) -> &'static str {
        match self {
            ViewState::Bidding => "bidding",
            ViewState::Results => "results",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewState {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewState::ALL
            .into_iter()
            .find(|state| state.id() == s)
            .ok_or_else(|| BindError::UnknownState(s.to_string()))
    }
}
