//! Cancellable one-shot timers used to drive the tick loop.
//!
//! The session only talks to the `Scheduler` trait (post after a delay,
//! cancel). The terminal runtime owns a `TimerQueue` and polls it for due
//! timers between input events, so every callback runs on the main thread.

mod clock;
mod queue;

pub use clock::*;
pub use queue::*;

#[cfg(test)]
mod tests;
