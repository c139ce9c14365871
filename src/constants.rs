// Page wiring constants.
//
// Element ids and display values live here so the binder and the DOM layer
// agree on them without repeating string literals.

// Element whose text shows the current state's name
pub const STATUS_ELEMENT_ID: &str = "current-state";

// CSS `display` values
pub const VISIBLE_DISPLAY: &str = "grid";
pub const HIDDEN_DISPLAY: &str = "none";

// Window event that triggers initialization
pub const LOAD_EVENT: &str = "load";
