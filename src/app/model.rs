//! Application model types: `Widgets` and `App`.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::catalog::CoverRef;
use crate::config::{ControlsSettings, UiSettings};
use crate::render::{
    Invalidate, LikeIcon, NowPlayingView, PlayIcon, Property, RepeatIcon, ViewSink, WidgetId,
};

use super::motion::{Fade, Pulse};

/// Retained state of every widget on the screen. Only ever written through
/// `ViewSink::set_property`.
#[derive(Debug, Clone, Default)]
pub struct Widgets {
    pub cover: Option<CoverRef>,
    pub title: String,
    pub artist: String,
    pub elapsed_label: String,
    pub duration_label: String,
    pub slider_max: u64,
    pub slider_position: u64,
    pub play_icon: PlayIcon,
    pub play_label: &'static str,
    pub like_icon: LikeIcon,
    pub repeat_icon: RepeatIcon,
    pub next_enabled: bool,
    pub previous_enabled: bool,
}

impl Widgets {
    /// Slider fill in `[0, 1]`.
    pub fn slider_ratio(&self) -> f64 {
        if self.slider_max == 0 {
            return 0.0;
        }
        (self.slider_position as f64 / self.slider_max as f64).clamp(0.0, 1.0)
    }
}

impl ViewSink for Widgets {
    fn set_property(&mut self, widget: WidgetId, value: Property) {
        match (widget, value) {
            (WidgetId::AlbumArt, Property::Cover(c)) => self.cover = Some(c),
            (WidgetId::Title, Property::Text(t)) => self.title = t,
            (WidgetId::Artist, Property::Text(t)) => self.artist = t,
            (WidgetId::ElapsedLabel, Property::Text(t)) => self.elapsed_label = t,
            (WidgetId::DurationLabel, Property::Text(t)) => self.duration_label = t,
            (WidgetId::Slider, Property::Slider { max, position }) => {
                self.slider_max = max;
                self.slider_position = position;
            }
            (WidgetId::PlayPause, Property::PlayPause { icon, label }) => {
                self.play_icon = icon;
                self.play_label = label;
            }
            (WidgetId::Like, Property::Like(icon)) => self.like_icon = icon,
            (WidgetId::Repeat, Property::Repeat(icon)) => self.repeat_icon = icon,
            (WidgetId::Next, Property::Enabled(e)) => self.next_enabled = e,
            (WidgetId::Previous, Property::Enabled(e)) => self.previous_enabled = e,
            (widget, value) => trace!(?widget, ?value, "property does not apply to widget"),
        }
    }
}

/// The main application model.
pub struct App {
    pub widgets: Widgets,
    pub header_text: String,
    pub show_help: bool,
    pub scrub: Duration,
    /// One-line message shown in the status box until the next action.
    pub status: Option<String>,

    like_pulse: Option<Pulse>,
    play_fade: Option<Fade>,
}

impl App {
    /// Create a new `App` with empty widgets.
    pub fn new(ui: &UiSettings, controls: &ControlsSettings) -> Self {
        Self {
            widgets: Widgets::default(),
            header_text: ui.header_text.clone(),
            show_help: ui.show_help,
            scrub: Duration::from_secs(controls.scrub_seconds),
            status: None,
            like_pulse: None,
            play_fade: None,
        }
    }

    /// Push the invalidated part of `view` into the widget tree. A changed
    /// play/pause icon starts the cross-fade.
    pub fn present(&mut self, view: &NowPlayingView, invalidate: &Invalidate, now: Instant) {
        let before = self.widgets.play_icon;
        view.apply(invalidate, &mut self.widgets);
        if self.widgets.play_icon != before {
            self.play_fade = Some(Fade::new(now, before));
        }
    }

    pub fn start_like_pulse(&mut self, now: Instant) {
        self.like_pulse = Some(Pulse::like(now));
    }

    /// Current scale of the like control.
    pub fn like_scale(&self, now: Instant) -> f32 {
        self.like_pulse.map(|p| p.scale(now)).unwrap_or(1.0)
    }

    /// The play/pause icon as currently drawn, with its opacity.
    pub fn play_icon_frame(&self, now: Instant) -> (PlayIcon, f32) {
        match self.play_fade {
            Some(fade) => fade.frame(now, self.widgets.play_icon),
            None => (self.widgets.play_icon, 1.0),
        }
    }

    /// Drop finished animations; returns true while any is still running.
    pub fn tick_animations(&mut self, now: Instant) -> bool {
        if self.like_pulse.is_some_and(|p| p.is_done(now)) {
            self.like_pulse = None;
        }
        if self.play_fade.is_some_and(|f| f.is_done(now)) {
            self.play_fade = None;
        }
        self.like_pulse.is_some() || self.play_fade.is_some()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
