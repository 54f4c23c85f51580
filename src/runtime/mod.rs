use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::render::Invalidate;

mod event_loop;
mod keymap;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    if env::args().nth(1).as_deref() == Some("--print-config") {
        print!("{}", toml::to_string_pretty(&config::Settings::default())?);
        return Ok(());
    }

    let settings = settings::load_settings();
    logging::init(&settings.log);

    let mut session = startup::build_session(&settings)?;
    let mut app = App::new(&settings.ui, &settings.controls);
    app.present(&session.view(), &Invalidate::Full, std::time::Instant::now());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut app, &mut session);

    // Nothing may fire once the screen is gone.
    session.teardown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
