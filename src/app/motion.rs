//! Short cosmetic animations. None of them feed back into playback state.

use std::time::{Duration, Instant};

use crate::render::PlayIcon;

pub const LIKE_PULSE: Duration = Duration::from_millis(200);
pub const LIKE_PULSE_PEAK: f32 = 1.3;
pub const FADE_OUT: Duration = Duration::from_millis(100);
pub const FADE_IN: Duration = Duration::from_millis(150);

/// One-shot scale pulse: 1.0 -> peak -> 1.0 over `duration`.
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    started_at: Instant,
    duration: Duration,
    peak: f32,
}

impl Pulse {
    pub fn like(now: Instant) -> Self {
        Self {
            started_at: now,
            duration: LIKE_PULSE,
            peak: LIKE_PULSE_PEAK,
        }
    }

    /// Scale factor at `now`; 1.0 once the pulse is over.
    pub fn scale(&self, now: Instant) -> f32 {
        let t = progress(self.started_at, self.duration, now);
        let ramp = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
        1.0 + (self.peak - 1.0) * ramp
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Play/pause icon swap: fade the old icon out, then the new one in.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    started_at: Instant,
    from: PlayIcon,
}

impl Fade {
    pub fn new(now: Instant, from: PlayIcon) -> Self {
        Self {
            started_at: now,
            from,
        }
    }

    /// The icon to show at `now` (the old one until the fade-out ends) and
    /// its opacity in `[0, 1]`.
    pub fn frame(&self, now: Instant, to: PlayIcon) -> (PlayIcon, f32) {
        let since = now.saturating_duration_since(self.started_at);
        if since < FADE_OUT {
            (self.from, 1.0 - progress(self.started_at, FADE_OUT, now))
        } else {
            let fade_in_start = self.started_at + FADE_OUT;
            (to, progress(fade_in_start, FADE_IN, now))
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= FADE_OUT + FADE_IN
    }
}

fn progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}
