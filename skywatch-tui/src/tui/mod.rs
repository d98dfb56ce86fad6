//! Single-screen terminal UI.
//!
//! The screen is a function of the controller's published state plus the
//! search field; the loop polls the keyboard, ticks the spinner and redraws
//! every frame from the latest published value.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self as crossterm_event, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use skywatch_core::WeatherController;
use tracing::info;

pub mod app;
pub mod ui;

use app::App;

/// Run the weather screen until the user exits.
pub async fn run(controller: WeatherController, default_location: Option<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("weather screen opened");
    let mut app = App::new(controller, default_location);
    let result = run_app(&mut terminal, &mut app);
    info!("weather screen closed");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Short poll timeout keeps the spinner moving and picks up state
        // published by completed request tasks on the next frame.
        if crossterm_event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = crossterm_event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }
                if app.handle_key(key) {
                    break;
                }
            }
        }

        app.tick();
    }

    Ok(())
}
