use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::catalog::{Catalog, Track};
use crate::render::{Invalidate, NowPlayingView};
use crate::scheduler::{Scheduler, TimerId};

use super::model::{PlaybackState, SessionError, SessionOptions};

/// Controller for one now-playing screen.
pub struct Session<S: Scheduler> {
    catalog: Catalog,
    state: PlaybackState,
    scheduler: S,
    tick: Option<TimerId>,
    quantum: Duration,
    rng: StdRng,
}

impl<S: Scheduler> Session<S> {
    pub fn new(catalog: Catalog, scheduler: S, options: SessionOptions) -> Result<Self, SessionError> {
        if options.start_index >= catalog.len() {
            return Err(SessionError::TrackOutOfRange {
                index: options.start_index,
                len: catalog.len(),
            });
        }
        if options.quantum.is_zero() {
            return Err(SessionError::ZeroQuantum);
        }

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            catalog,
            state: PlaybackState {
                track_index: options.start_index,
                is_repeat: options.repeat,
                ..PlaybackState::default()
            },
            scheduler,
            tick: None,
            quantum: options.quantum,
            rng,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> &Track {
        self.catalog.clamped(self.state.track_index)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle of the armed tick, if playback is running.
    pub fn pending_tick(&self) -> Option<TimerId> {
        self.tick
    }

    /// Project the current state for rendering.
    pub fn view(&self) -> NowPlayingView {
        NowPlayingView::project(&self.catalog, &self.state)
    }

    /// Flip between playing and stopped. Entering playback (re)arms the tick
    /// loop for the next loop turn; stopping cancels the pending tick.
    pub fn toggle_playback(&mut self) -> Invalidate {
        self.state.is_playing = !self.state.is_playing;
        if self.state.is_playing {
            self.arm(Duration::ZERO);
        } else {
            self.disarm();
        }
        info!(
            playing = self.state.is_playing,
            track = self.state.track_index,
            elapsed_ms = self.state.elapsed.as_millis() as u64,
            "playback toggled"
        );
        Invalidate::PLAY_PAUSE
    }

    /// Move to the next track, or to a random one when repeat is on.
    pub fn play_next(&mut self) -> Result<Invalidate, SessionError> {
        if !self.state.is_repeat && !self.catalog.has_next(self.state.track_index) {
            return Err(SessionError::NoNextTrack);
        }
        Ok(self.advance())
    }

    /// Move to the previous track.
    pub fn play_previous(&mut self) -> Result<Invalidate, SessionError> {
        if !self.catalog.has_previous(self.state.track_index) {
            return Err(SessionError::NoPreviousTrack);
        }
        self.jump_to(self.state.track_index - 1);
        Ok(Invalidate::Full)
    }

    pub fn toggle_repeat(&mut self) -> Invalidate {
        self.state.is_repeat = !self.state.is_repeat;
        info!(repeat = self.state.is_repeat, "repeat toggled");
        Invalidate::REPEAT
    }

    /// Flip the favorite flag of the current track only.
    pub fn toggle_like(&mut self) -> Invalidate {
        let index = self.state.track_index;
        if let Some(track) = self.catalog.get_mut(index) {
            track.favorited = !track.favorited;
            info!(track = index, favorited = track.favorited, "like toggled");
        }
        Invalidate::Full
    }

    /// Slider drag: set the elapsed time directly, clamped to the track.
    /// Does not touch the tick loop or the playing flag.
    pub fn seek_to(&mut self, position: Duration) -> Invalidate {
        let duration = self.current_track().duration;
        self.state.elapsed = position.min(duration);
        debug!(elapsed_ms = self.state.elapsed.as_millis() as u64, "seek");
        Invalidate::PROGRESS
    }

    /// Tick loop body, run when timer `id` comes due.
    ///
    /// Returns `None` when the firing is stale (cancelled or superseded) or
    /// playback is stopped.
    pub fn fire(&mut self, id: TimerId) -> Option<Invalidate> {
        if self.tick != Some(id) {
            trace!(?id, "ignoring stale tick");
            return None;
        }
        self.tick = None;
        if !self.state.is_playing {
            return None;
        }

        let duration = self.current_track().duration;
        let next = self.state.elapsed + self.quantum;
        if next <= duration {
            self.state.elapsed = next;
            self.arm(self.quantum);
            trace!(elapsed_ms = next.as_millis() as u64, "tick");
            return Some(Invalidate::PROGRESS);
        }

        // Track exhausted. Auto-advance only walks forward; the last track stops.
        if self.catalog.has_next(self.state.track_index) {
            let invalidate = self.advance();
            self.arm(self.quantum);
            Some(invalidate)
        } else {
            info!("end of catalog");
            Some(self.toggle_playback())
        }
    }

    /// Cancel any pending tick so nothing fires after the screen goes away.
    pub fn teardown(&mut self) {
        self.disarm();
        debug!("session torn down");
    }

    fn advance(&mut self) -> Invalidate {
        let index = if self.state.is_repeat {
            self.rng.random_range(0..self.catalog.len())
        } else {
            self.state.track_index + 1
        };
        self.jump_to(index);
        Invalidate::Full
    }

    fn jump_to(&mut self, index: usize) {
        self.state.track_index = index;
        self.state.elapsed = Duration::ZERO;
        info!(
            track = index,
            title = %self.current_track().title,
            "track changed"
        );
    }

    /// Cancel-then-post, so repeated arming never stacks two loops.
    pub(super) fn arm(&mut self, delay: Duration) {
        self.disarm();
        self.tick = Some(self.scheduler.schedule(delay));
    }

    fn disarm(&mut self) {
        if let Some(id) = self.tick.take() {
            self.scheduler.cancel(id);
        }
    }
}
