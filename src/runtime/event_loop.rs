use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::app::App;
use crate::render::Invalidate;
use crate::scheduler::Scheduler;
use crate::session::{Session, SessionError};
use crate::ui;

use super::keymap::{Action, action_for};
use super::startup::DeckSession;

/// Upper bound on input polling so animations keep moving.
const FRAME: Duration = Duration::from_millis(50);

/// Main terminal event loop: fires due ticks, draws, and handles input.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    session: &mut DeckSession,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Some(id) = session.scheduler_mut().pop_due() {
            if let Some(invalidate) = session.fire(id) {
                app.present(&session.view(), &invalidate, Instant::now());
            }
        }

        let now = Instant::now();
        let animating = app.tick_animations(now);
        terminal.draw(|f| ui::draw(f, app, now))?;

        let timeout = if animating {
            FRAME
        } else {
            session
                .scheduler()
                .next_deadline()
                .map(|d| d.saturating_duration_since(now))
                .unwrap_or(FRAME)
                .min(FRAME)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = action_for(key) {
                    if handle_action(action, app, session, Instant::now()) {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Apply one user action to the session and present the result.
/// Returns true when the user asked to quit.
pub fn handle_action<S: Scheduler>(
    action: Action,
    app: &mut App,
    session: &mut Session<S>,
    now: Instant,
) -> bool {
    let outcome: Result<Invalidate, SessionError> = match action {
        Action::Quit => return true,
        Action::ToggleHelp => {
            app.toggle_help();
            return false;
        }
        Action::TogglePlayback => Ok(session.toggle_playback()),
        Action::Next => session.play_next(),
        Action::Previous => session.play_previous(),
        Action::ToggleRepeat => Ok(session.toggle_repeat()),
        Action::ToggleLike => {
            app.start_like_pulse(now);
            Ok(session.toggle_like())
        }
        Action::ScrubForward => {
            let target = session.state().elapsed.saturating_add(app.scrub);
            Ok(session.seek_to(target))
        }
        Action::ScrubBack => {
            let target = session.state().elapsed.saturating_sub(app.scrub);
            Ok(session.seek_to(target))
        }
        Action::SeekTenths(n) => {
            let target = session.current_track().duration * u32::from(n) / 10;
            Ok(session.seek_to(target))
        }
    };

    match outcome {
        Ok(invalidate) => {
            app.clear_status();
            app.present(&session.view(), &invalidate, now);
        }
        Err(e) => {
            warn!(?action, error = %e, "action rejected");
            app.set_status(e.to_string());
        }
    }
    false
}
