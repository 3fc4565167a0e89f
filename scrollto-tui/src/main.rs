//! scrollto-tui - scroll-to-index carousel demo for the terminal
//!
//! A horizontally scrolling list of generated labels with buttons that set
//! the scroll alignment (start, center, end) and step the active item.

mod app;
mod carousel;
mod config;
mod controller;
mod models;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;
use config::Config;

/// Frame rate for animations (approximately 30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main entry point
fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().ok();

    let config = Config::parse();
    let items = models::generate_items(config.item_count, config.seed());
    run_tui(App::new(items))
}

/// Run the TUI application
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Main event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Cleanup
    let restored = restore_terminal(&mut terminal);
    first_error(result, restored)
}

/// Keep the event loop error over a teardown error
fn first_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    result.and(cleanup)
}

/// Leave raw mode and the alternate screen
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    raw.and(screen).and(cursor)
}

/// Run the main event loop
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        // Update animations
        app.tick(size.width, size.height);

        // Render the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input events with timeout for animation
        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
