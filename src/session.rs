//! Playback session simulator.
//!
//! `Session` owns the catalog, the playback state and the handle of its
//! pending tick timer. There is no audio: "playing" means a self-rescheduling
//! tick advances the elapsed time by a fixed quantum until the track runs out.

mod controller;
mod model;

pub use controller::*;
pub use model::*;

#[cfg(test)]
mod tests;
