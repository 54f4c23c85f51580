use std::time::Duration;

use tracing::info;

use crate::catalog::Catalog;
use crate::config;
use crate::scheduler::{SystemClock, TimerQueue};
use crate::session::{Session, SessionError, SessionOptions};

pub type DeckSession = Session<TimerQueue<SystemClock>>;

/// Build the session from settings: catalog, tick quantum and playback defaults.
pub fn build_session(settings: &config::Settings) -> Result<DeckSession, SessionError> {
    let catalog = Catalog::from_settings(&settings.catalog.tracks);
    info!(tracks = catalog.len(), "catalog loaded");

    let options = SessionOptions {
        quantum: Duration::from_millis(settings.playback.tick_ms),
        start_index: settings.playback.start_index,
        repeat: settings.playback.repeat,
        seed: settings.playback.seed,
    };

    Session::new(catalog, TimerQueue::new(SystemClock), options)
}
