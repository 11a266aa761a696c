//! Scoped terminal mode changes.
//!
//! Each guard undoes its change on drop, so the terminal is restored on
//! every exit path: normal return, `?` propagation and panic unwinding.

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor, execute, style,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Whether a [`TerminalSession`] currently owns the screen.
pub fn session_active() -> bool {
    SESSION_ACTIVE.load(Ordering::Relaxed)
}

/// Marks the screen as owned by the TUI until dropped.
struct ScreenClaim(());

impl ScreenClaim {
    fn acquire() -> Self {
        SESSION_ACTIVE.store(true, Ordering::Relaxed);
        Self(())
    }
}

impl Drop for ScreenClaim {
    fn drop(&mut self) {
        SESSION_ACTIVE.store(false, Ordering::Relaxed);
    }
}

/// Raw mode (no echo, no line buffering) for as long as the guard lives.
pub struct RawMode(());

impl RawMode {
    pub fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {e}");
        }
    }
}

/// Full-screen TUI session on the alternate screen.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _claim: ScreenClaim,
    // Dropped after `Drop::drop` has left the alternate screen.
    _raw: RawMode,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        if style::available_color_count() < 8 {
            bail!("Terminal does not support colors");
        }

        let raw = RawMode::enable()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
                return Err(e).context("Failed to create terminal");
            }
        };

        tracing::debug!("Terminal session started");
        Ok(Self {
            terminal,
            _claim: ScreenClaim::acquire(),
            _raw: raw,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        ) {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    }
}
