//! Course Admin TUI - terminal admin console for an e-learning marketplace
//!
//! A Ratatui-based TUI for moderating courses, categories, comments,
//! contact messages, newsletter subscribers and users through the
//! marketplace REST API.

mod api;
mod app;
mod config;
mod session;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use api::ApiClient;
use app::App;
use config::AdminConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use session::{FileStore, KeyValueStore, MemoryStore, Session};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "course-admin-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    if let Err(err) = AdminConfig::init_file() {
        tracing::warn!("Could not write default config: {err:#}");
    }
    let config = AdminConfig::load()?;
    let api = ApiClient::new(&config)?;
    let session = Session::restore(open_store());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Box::new(api), session);
    app.start().await;
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the cache directory; stderr would tear the alternate screen
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "course_admin_tui=info".into());

    let log_file = config::project_dirs().and_then(|dirs| {
        let dir = dirs.cache_dir();
        std::fs::create_dir_all(dir).ok()?;
        File::create(dir.join(LOG_FILE)).ok()
    });

    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

/// Persisted session store, or an in-memory one when the data dir is unusable
fn open_store() -> Box<dyn KeyValueStore> {
    match FileStore::open_default() {
        Ok(Some(store)) => Box::new(store),
        Ok(None) => {
            tracing::warn!("No data directory; session will not persist");
            Box::new(MemoryStore::default())
        }
        Err(err) => {
            tracing::warn!("Could not open session store: {err:#}");
            Box::new(MemoryStore::default())
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
