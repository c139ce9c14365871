//! Keeps one view visible and the status label in sync with the current state.
//!
//! The binder owns the current [`ViewState`] and is its only mutator. It talks
//! to the page through a [`Surface`], which the web frontend implements over
//! the DOM and tests implement in memory.

use crate::constants::{HIDDEN_DISPLAY, STATUS_ELEMENT_ID, VISIBLE_DISPLAY};
use crate::core::ViewState;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("unknown view state {0:?}")]
    UnknownState(String),
    #[error("missing #{0} element")]
    MissingElement(String),
    #[error("dom write failed: {0}")]
    Dom(String),
}

/// The page operations the binder needs.
pub trait Surface {
    /// Whether an element with this id exists.
    fn contains(&self, element_id: &str) -> bool;
    /// Set the element's CSS `display` value.
    fn set_display(&mut self, element_id: &str, display: &str) -> Result<(), BindError>;
    /// Replace the element's text content.
    fn set_text(&mut self, element_id: &str, text: &str) -> Result<(), BindError>;
}

pub struct StateBinder<S: Surface> {
    surface: S,
    current: ViewState,
}

impl<S: Surface> StateBinder<S> {
    pub fn new(surface: S) -> Self {
        Self::with_state(surface, ViewState::default())
    }

    pub fn with_state(surface: S, current: ViewState) -> Self {
        Self { surface, current }
    }

    #[inline]
    pub fn current(&self) -> ViewState {
        self.current
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Show the current view and write its name into the status element.
    ///
    /// Every view element and the status element must exist; the first
    /// missing one is reported before anything on the page is touched.
    /// Views other than the current one are hidden so the page starts with
    /// exactly one visible view whatever its markup says.
    pub fn initialize(&mut self) -> Result<(), BindError> {
        let ids = ViewState::ALL.map(|s| s.id());
        self.require(ids.into_iter().chain(std::iter::once(STATUS_ELEMENT_ID)))?;
        for state in ViewState::ALL {
            if state != self.current {
                self.surface.set_display(state.id(), HIDDEN_DISPLAY)?;
            }
        }
        self.show_current()?;
        log::info!("[state] initialized at {}", self.current);
        Ok(())
    }

    /// Hide the current view, make `next` current and show it.
    ///
    /// Both views and the status element are checked first, so a failed
    /// transition leaves the state and the page as they were.
    pub fn transition_to(&mut self, next: ViewState) -> Result<(), BindError> {
        let prev = self.current;
        self.require([prev.id(), next.id(), STATUS_ELEMENT_ID])?;
        self.surface.set_display(prev.id(), HIDDEN_DISPLAY)?;
        self.current = next;
        self.show_current()?;
        if prev == next {
            log::debug!("[state] {} re-shown", next);
        } else {
            log::info!("[state] {} -> {}", prev, next);
        }
        Ok(())
    }

    /// String-keyed [`transition_to`](Self::transition_to) for page handlers.
    /// Unknown ids leave the page untouched.
    pub fn transition_to_id(&mut self, next: &str) -> Result<(), BindError> {
        let next: ViewState = next.parse()?;
        self.transition_to(next)
    }

    fn show_current(&mut self) -> Result<(), BindError> {
        self.surface.set_display(self.current.id(), VISIBLE_DISPLAY)?;
        self.surface.set_text(STATUS_ELEMENT_ID, self.current.id())
    }

    /// First id in `ids` with no matching element, as an error.
    fn require<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<(), BindError> {
        for id in ids {
            if !self.surface.contains(id) {
                return Err(BindError::MissingElement(id.to_string()));
            }
        }
        Ok(())
    }
}
