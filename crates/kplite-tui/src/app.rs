//! Application state management.

use crate::config::Config;
use crate::ui::Panes;
use kplite_core::{Geometry, Input, Navigator, Transition, Tree};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the unlocked database.
    Browsing,
    /// Application should quit.
    Quit,
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Path to the database file.
    pub database_path: PathBuf,
    /// Tree and navigation state.
    pub navigator: Navigator,
    /// Pane sizes from the last layout.
    pub geometry: Geometry,
    /// Width of the group pane in percent.
    pub group_pane_percent: u16,
}

impl App {
    /// Create a new application instance around an already built tree.
    pub fn new(database_path: PathBuf, tree: Tree, config: &Config) -> Self {
        Self {
            state: AppState::Browsing,
            database_path,
            navigator: Navigator::new(tree, config.options()),
            geometry: Geometry::default(),
            group_pane_percent: config.group_pane_percent,
        }
    }

    /// Recompute the pane geometry for a terminal of the given size.
    pub fn resize(&mut self, area: Rect) {
        let geometry = Panes::split(area, self.group_pane_percent).geometry();
        if geometry != self.geometry {
            tracing::debug!(?geometry, "Pane geometry changed");
            self.geometry = geometry;
        }
        self.navigator.settle(self.geometry);
    }

    /// Apply one input to the navigator.
    pub fn apply(&mut self, input: Input) {
        if self.navigator.apply(input, self.geometry) == Transition::Quit {
            self.state = AppState::Quit;
        }
    }

    /// Whether the search line editor has the keyboard.
    pub fn is_searching(&self) -> bool {
        self.navigator.state().is_searching()
    }

    /// File name shown in the header.
    pub fn database_name(&self) -> String {
        self.database_path
            .file_name()
            .unwrap_or(self.database_path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}
