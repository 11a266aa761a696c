//! Passphrase prompt.

use crate::screen::EventSource;
use crate::terminal::RawMode;
use anyhow::{bail, Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Write;

/// What the prompt should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    Pending,
    Submit,
    Abort,
}

/// Accumulates the typed passphrase.
#[derive(Default)]
pub struct PassphraseInput {
    buffer: String,
}

impl PassphraseInput {
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptStep::Abort
            }
            KeyCode::Enter => PromptStep::Submit,
            KeyCode::Esc => PromptStep::Abort,
            KeyCode::Char(_) if is_chord(&key) => PromptStep::Pending,
            KeyCode::Char(c) => {
                self.buffer.push(c);
                PromptStep::Pending
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptStep::Pending
            }
            _ => PromptStep::Pending,
        }
    }

    pub fn into_passphrase(self) -> String {
        self.buffer
    }
}

/// Ctrl or Alt combinations are editing shortcuts, never text.
pub fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Ask for the passphrase on stderr without echoing it.
pub fn read_passphrase(prompt: &str, events: &mut impl EventSource) -> Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut input = PassphraseInput::default();
    let step = {
        let _raw = RawMode::enable()?;
        loop {
            let event = events.next_event().context("Failed to read passphrase")?;
            let Event::Key(key) = event else { continue };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match input.handle_key(key) {
                PromptStep::Pending => {}
                step => break step,
            }
        }
    };
    writeln!(stderr)?;

    if step == PromptStep::Abort {
        bail!("Passphrase entry aborted");
    }
    Ok(input.into_passphrase())
}
