//! Application module: the terminal-side model drawn by the TUI.
//!
//! `Widgets` is the retained widget tree the session renders into, and
//! `App` adds the cosmetic motion and transient status shown on top of it.

mod model;
mod motion;

pub use model::*;
pub use motion::*;
