use std::time::Duration;

/// Mutable playback state. Owned by a single `Session`, mutated only on the
/// main thread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub track_index: usize,
    pub is_playing: bool,
    pub is_repeat: bool,
    /// Always within `[0, current track duration]` between operations.
    pub elapsed: Duration,
}

/// Coarse view of the state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Playing,
}

impl PlaybackState {
    pub fn phase(&self) -> Phase {
        if self.is_playing {
            Phase::Playing
        } else {
            Phase::Stopped
        }
    }
}

/// Construction-time knobs for a `Session`.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Time added to `elapsed` per tick, and the spacing between ticks.
    pub quantum: Duration,
    pub start_index: usize,
    pub repeat: bool,
    /// Seed for the repeat-mode random pick. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            quantum: Duration::from_millis(1000),
            start_index: 0,
            repeat: false,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("already at the first track")]
    NoPreviousTrack,
    #[error("already at the last track")]
    NoNextTrack,
    #[error("track {index} is out of range (catalog has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },
    #[error("tick quantum must be greater than zero")]
    ZeroQuantum,
}
