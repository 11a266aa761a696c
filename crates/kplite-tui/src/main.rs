//! kplite - a read-only terminal browser for KeePass databases.
//!
//! Built with Ratatui and crossterm.

mod app;
mod config;
mod handlers;
mod prompt;
mod screen;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use kplite_core::{Tree, VaultFile};
use ratatui::{backend::Backend, Terminal};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

use app::App;
use config::Config;
use screen::{EventSource, TerminalEvents};
use terminal::TerminalSession;

/// kplite - browse a KeePass database in the terminal
#[derive(Parser, Debug)]
#[command(name = "kplite", version)]
#[command(about = "A read-only terminal browser for KeePass databases")]
struct Args {
    /// Path to the KeePass database file
    database: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;
    init_logging(&config)?;
    tracing::info!("Starting kplite with database: {}", args.database.display());

    let vault = VaultFile::open(&args.database)?;
    let passphrase = prompt::read_passphrase("Enter database password: ", &mut TerminalEvents)?;
    let groups = vault.unlock(&passphrase)?.into_groups();
    drop(passphrase);

    let groups = groups
        .into_iter()
        .map(|group| group.without_hidden(&config.hidden_groups))
        .collect();
    let tree = Tree::build(groups);
    tracing::info!(
        groups = tree.group_count(),
        entries = tree.entry_count(),
        "Database loaded"
    );

    let mut app = App::new(args.database, tree, &config);

    let mut session = TerminalSession::start()?;
    let result = run_app(session.terminal_mut(), &mut app, &mut TerminalEvents);
    // Restore the terminal before anyhow prints the error.
    drop(session);

    tracing::info!("Exiting kplite");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(rust_log.as_deref(), &config.log_level)?;

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // stderr shares the tty with the alternate screen, so it stays quiet
        // while the session is up
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr.with_filter(|_| !terminal::session_active()))
            .init(),
    }
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise kplite's crates log at `level`.
fn log_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid {}: {directives}", EnvFilter::DEFAULT_ENV)),
        None => EnvFilter::try_new(format!("kplite_tui={level},kplite_core={level}"))
            .with_context(|| format!("Invalid log level: {level}")),
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut impl EventSource,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.resize(frame.area());
            ui::render(frame, app);
        })?;

        let event = events.next_event().context("Failed to read terminal event")?;
        if handlers::handle_event(app, event) {
            break;
        }
    }

    Ok(())
}
