//! UI rendering helpers for the terminal user interface.
//!
//! This module draws the retained `Widgets` tree using `ratatui`. It never
//! looks at the session directly.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Instant};

use crate::app::App;
use crate::catalog::CoverRef;
use crate::render::{LikeIcon, PlayIcon, RepeatIcon};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("h/l".to_string(), "prev/next".to_string());
    // H/L is filled dynamically from config.
    map.insert("0-9".to_string(), "seek to 0-90%".to_string());
    map.insert("f".to_string(), "like".to_string());
    map.insert("r".to_string(), "repeat".to_string());
    map.insert("?".to_string(), "help".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

const SWATCHES: [Color; 6] = [
    Color::Magenta,
    Color::Yellow,
    Color::Cyan,
    Color::LightRed,
    Color::LightBlue,
    Color::Green,
];

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let order = ["space/p", "h/l", "H/L", "0-9", "f", "r", "?", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] drag -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Stable colour for a cover key.
fn swatch(cover: &CoverRef) -> Color {
    let sum: usize = cover.key().bytes().map(usize::from).sum();
    SWATCHES[sum % SWATCHES.len()]
}

fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let help_height = if app.show_help { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(help_height),
        ])
        .split(frame.area());

    let header = Paragraph::new(app.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playdeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_cover(frame, app, chunks[1]);

    let w = &app.widgets;
    let meta = Paragraph::new(vec![
        Line::from(Span::styled(
            w.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(w.artist.as_str()),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().title(" track "))
    .wrap(Wrap { trim: true });
    frame.render_widget(meta, chunks[2]);

    let slider = Gauge::default()
        .block(Block::bordered())
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(w.slider_ratio())
        .label(format!("{} / {}", w.elapsed_label, w.duration_label));
    frame.render_widget(slider, chunks[3]);

    draw_controls(frame, app, now, chunks[4]);

    let status = {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!(" {}", w.play_label));
        parts.push(match w.repeat_icon {
            RepeatIcon::On => "Repeat: ON".to_string(),
            RepeatIcon::Off => "Repeat: OFF".to_string(),
        });
        if let Some(msg) = &app.status {
            parts.push(msg.clone());
        }
        parts.join(" • ")
    };
    let status_par = Paragraph::new(status)
        .block(Block::bordered().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[5]);

    if app.show_help {
        let footer = Paragraph::new(controls_text(app.scrub.as_secs()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[6]);
    }
}

fn draw_cover(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" cover ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(cover) = &app.widgets.cover else {
        return;
    };

    // Square-ish swatch: terminal cells are about twice as tall as wide.
    let height = inner.height.saturating_sub(1);
    let width = (height * 2).min(inner.width);
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    let art = Rect {
        x,
        y: inner.y,
        width,
        height,
    };
    let fill = Block::default().style(Style::default().bg(swatch(cover)));
    frame.render_widget(fill, art);

    let caption = Paragraph::new(cover.key())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    let caption_area = Rect {
        y: inner.y + height,
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(caption, caption_area);
}

fn draw_controls(frame: &mut Frame, app: &App, now: Instant, area: Rect) {
    let w = &app.widgets;

    let (icon, opacity) = app.play_icon_frame(now);
    let play_glyph = match icon {
        PlayIcon::Play => "▶",
        PlayIcon::Pause => "⏸",
    };
    let mut play_style = Style::default().add_modifier(Modifier::BOLD);
    if opacity < 0.5 {
        play_style = play_style.add_modifier(Modifier::DIM);
    }

    let scale = app.like_scale(now);
    let (like_glyph, mut like_style) = match w.like_icon {
        LikeIcon::Liked => ("♥", Style::default().fg(Color::Red)),
        LikeIcon::NotLiked => ("♡", Style::default()),
    };
    if scale > 1.15 {
        like_style = like_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let repeat_style = match w.repeat_icon {
        RepeatIcon::On => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        RepeatIcon::Off => Style::default().fg(Color::DarkGray),
    };

    let row = Line::from(vec![
        Span::styled("⏮", enabled_style(w.previous_enabled)),
        Span::raw("   "),
        Span::styled(play_glyph, play_style),
        Span::raw("   "),
        Span::styled("⏭", enabled_style(w.next_enabled)),
        Span::raw("      "),
        Span::styled(like_glyph, like_style),
        Span::raw("   "),
        Span::styled("↻", repeat_style),
    ]);

    let controls = Paragraph::new(row)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(controls, area);
}
