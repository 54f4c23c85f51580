use crate::catalog::{Catalog, CoverRef};
use crate::session::PlaybackState;

use super::format::format_time;

/// Every widget on the now-playing screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WidgetId {
    AlbumArt,
    Title,
    Artist,
    ElapsedLabel,
    DurationLabel,
    Slider,
    PlayPause,
    Like,
    Repeat,
    Next,
    Previous,
}

impl WidgetId {
    pub const ALL: &'static [WidgetId] = &[
        WidgetId::AlbumArt,
        WidgetId::Title,
        WidgetId::Artist,
        WidgetId::ElapsedLabel,
        WidgetId::DurationLabel,
        WidgetId::Slider,
        WidgetId::PlayPause,
        WidgetId::Like,
        WidgetId::Repeat,
        WidgetId::Next,
        WidgetId::Previous,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayIcon {
    #[default]
    Play,
    Pause,
}

impl PlayIcon {
    /// Accessibility label announced for the button.
    pub fn label(self) -> &'static str {
        match self {
            PlayIcon::Play => "Play playback",
            PlayIcon::Pause => "Pause playback",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LikeIcon {
    #[default]
    NotLiked,
    Liked,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatIcon {
    #[default]
    Off,
    On,
}

/// A value assigned to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    Cover(CoverRef),
    Text(String),
    /// Slider bounds are `[0, max]`, both in milliseconds.
    Slider { max: u64, position: u64 },
    PlayPause { icon: PlayIcon, label: &'static str },
    Like(LikeIcon),
    Repeat(RepeatIcon),
    Enabled(bool),
}

/// The `setProperty(widget, value)` boundary to the host toolkit.
pub trait ViewSink {
    fn set_property(&mut self, widget: WidgetId, value: Property);
}

/// Which widgets must be re-rendered after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidate {
    Full,
    Only(&'static [WidgetId]),
}

impl Invalidate {
    pub const PROGRESS: Invalidate = Invalidate::Only(&[WidgetId::ElapsedLabel, WidgetId::Slider]);
    pub const PLAY_PAUSE: Invalidate = Invalidate::Only(&[WidgetId::PlayPause]);
    pub const REPEAT: Invalidate = Invalidate::Only(&[WidgetId::Repeat]);

    pub fn widgets(&self) -> &'static [WidgetId] {
        match self {
            Invalidate::Full => WidgetId::ALL,
            Invalidate::Only(widgets) => *widgets,
        }
    }

    pub fn covers(&self, widget: WidgetId) -> bool {
        self.widgets().contains(&widget)
    }
}

/// Snapshot of everything visible on the now-playing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlayingView {
    pub cover: CoverRef,
    pub title: String,
    pub artist: String,
    pub elapsed_label: String,
    pub duration_label: String,
    pub slider_max: u64,
    pub slider_position: u64,
    pub play_icon: PlayIcon,
    pub like_icon: LikeIcon,
    pub repeat_icon: RepeatIcon,
    pub next_enabled: bool,
    pub previous_enabled: bool,
}

impl NowPlayingView {
    /// Project `state` and its current track into widget values.
    ///
    /// `state.track_index` must address a track in `catalog`; the session
    /// guarantees this for every state it hands out.
    pub fn project(catalog: &Catalog, state: &PlaybackState) -> Self {
        let index = state.track_index.min(catalog.last_index());
        let track = catalog.clamped(index);

        Self {
            cover: track.cover.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            elapsed_label: format_time(state.elapsed),
            duration_label: format_time(track.duration),
            slider_max: track.duration_ms(),
            slider_position: state.elapsed.as_millis() as u64,
            play_icon: if state.is_playing {
                PlayIcon::Pause
            } else {
                PlayIcon::Play
            },
            like_icon: if track.favorited {
                LikeIcon::Liked
            } else {
                LikeIcon::NotLiked
            },
            repeat_icon: if state.is_repeat {
                RepeatIcon::On
            } else {
                RepeatIcon::Off
            },
            next_enabled: catalog.has_next(index),
            previous_enabled: catalog.has_previous(index),
        }
    }

    /// The value a single widget should display.
    pub fn property(&self, widget: WidgetId) -> Property {
        match widget {
            WidgetId::AlbumArt => Property::Cover(self.cover.clone()),
            WidgetId::Title => Property::Text(self.title.clone()),
            WidgetId::Artist => Property::Text(self.artist.clone()),
            WidgetId::ElapsedLabel => Property::Text(self.elapsed_label.clone()),
            WidgetId::DurationLabel => Property::Text(self.duration_label.clone()),
            WidgetId::Slider => Property::Slider {
                max: self.slider_max,
                position: self.slider_position,
            },
            WidgetId::PlayPause => Property::PlayPause {
                icon: self.play_icon,
                label: self.play_icon.label(),
            },
            WidgetId::Like => Property::Like(self.like_icon),
            WidgetId::Repeat => Property::Repeat(self.repeat_icon),
            WidgetId::Next => Property::Enabled(self.next_enabled),
            WidgetId::Previous => Property::Enabled(self.previous_enabled),
        }
    }

    /// Push the properties of every invalidated widget into `sink`.
    pub fn apply(&self, invalidate: &Invalidate, sink: &mut impl ViewSink) {
        for &widget in invalidate.widgets() {
            sink.set_property(widget, self.property(widget));
        }
    }
}
