//! `pointlist` — terminal task list sorted by point value.
//!
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/pointlist/config.toml`).
//!
//! ```bash
//! # Empty list
//! cargo run --bin pointlist
//!
//! # Start from a JSON seed file with a prefilled new-task input
//! cargo run --bin pointlist -- --seed tasks.json --next-task "eat the frog 20pts"
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pointlist_core::Session;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use pointlist::app::App;
use pointlist::config::{CliArgs, ClientConfig};
use pointlist::seed;
use pointlist::ui;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > env > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::from_cli(&cli)
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("pointlist starting");

    // Seed problems are reported before the terminal is taken over.
    let tasks = match config.seed_file.as_deref() {
        Some(path) => seed::load_seed(path).map_err(io::Error::other)?,
        None => Vec::new(),
    };
    let session = Session::new(config.next_task.clone(), tasks);

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, session, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("pointlist exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("pointlist.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(log_filter(level))
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Build the log filter from `--log-level` / `POINTLIST_LOG` only.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

/// Main application loop: draw, then apply one key event.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: Session,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new(session).with_title(config.title.clone());

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
