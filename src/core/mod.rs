pub mod binder;
pub mod state;

pub use binder::*;
pub use state::*;
