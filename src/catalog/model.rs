use std::time::Duration;

use crate::config::TrackSettings;

/// Opaque reference to a track's cover art (a short resource key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverRef(pub String);

impl CoverRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// A single catalog entry.
#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub duration: Duration,
    pub cover: CoverRef,
    /// The only field that changes at runtime.
    pub favorited: bool,
}

impl Track {
    pub fn new(title: &str, artist: &str, duration_ms: u64, cover: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            duration: Duration::from_millis(duration_ms),
            cover: CoverRef::new(cover),
            favorited: false,
        }
    }

    /// Duration in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one track")]
    Empty,
}

/// Ordered, fixed-size sequence of tracks.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Create a catalog from `tracks`. An empty list is rejected so that index 0
    /// is always addressable.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { tracks })
    }

    /// Build a catalog from configured entries, falling back to the built-in
    /// demo catalog when none are configured.
    pub fn from_settings(entries: &[TrackSettings]) -> Self {
        let tracks: Vec<Track> = entries
            .iter()
            .map(|e| Track::new(&e.title, &e.artist, e.duration_ms, &e.cover))
            .collect();

        Self::new(tracks).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// The track at `index`, or the last track when `index` is past the end.
    pub fn clamped(&self, index: usize) -> &Track {
        &self.tracks[index.min(self.last_index())]
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    pub fn last_index(&self) -> usize {
        self.tracks.len() - 1
    }

    /// Return true if a track exists after `index`.
    pub fn has_next(&self, index: usize) -> bool {
        index < self.last_index()
    }

    /// Return true if a track exists before `index`.
    pub fn has_previous(&self, index: usize) -> bool {
        index > 0 && index <= self.last_index()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

impl Default for Catalog {
    /// The built-in three-track demo catalog.
    fn default() -> Self {
        Self {
            tracks: vec![
                Track::new("Irreplaceable", "Beyonce", 311_000, "bday"),
                Track::new("JUST FOR FUN (really long)", "Beyonce", 500_000, "cowboy-carter"),
                Track::new(
                    "Halo",
                    "Queen Beeeeeeeeeeeeeeee aka Sasha Fierce",
                    234_345,
                    "sasha-fierce",
                ),
            ],
        }
    }
}
