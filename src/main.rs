//! Bloom Forms - contact and newsletter signup forms in the terminal
//!
//! A Ratatui-based TUI with inline validation and a simulated
//! submission round-trip.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::FormsConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submit::SimulatedSubmitter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = FormsConfig::load()?;

    // Initialize logging
    let (writer, log_path) = log_writer(&config);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloom_forms=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    tracing::info!(log = ?log_path, "Starting bloom-forms");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
    tracing::info!(
        delay_ms = submitter.delay().as_millis() as u64,
        "Using simulated submitter"
    );
    let mut app = App::new(config.start_view(), submitter);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    config.last_view = Some(app.state.current_view());
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save config: {e}");
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file so output never lands on the alternate screen.
/// Falls back to stderr when the file can't be opened.
fn log_writer(config: &FormsConfig) -> (BoxMakeWriter, Option<std::path::PathBuf>) {
    let Some(path) = config.log_path() else {
        return (BoxMakeWriter::new(io::stderr), None);
    };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        Err(e) => {
            eprintln!("Could not open log file {}: {e}", path.display());
            (BoxMakeWriter::new(io::stderr), None)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while an entrance animation runs (16ms = ~60fps)
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit();
                    } else {
                        app.handle_key(key);
                    }
                }
            }
        }

        // Apply finished submissions
        app.poll_submissions();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
