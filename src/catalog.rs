//! Track catalog: the fixed, ordered list of tracks shown by the deck.
//!
//! The catalog is built once at startup (from config or the built-in demo
//! set) and never resized afterwards. Only the per-track favorite flag is
//! mutable.

mod model;

pub use model::*;
