//! The input-driven state machine behind the two-pane browser.
//!
//! [`Navigator`] owns the [`Tree`] and the [`NavigationState`]. Each
//! [`Input`] is applied atomically and the state is settled against the
//! current pane [`Geometry`] before `apply` returns.

use crate::flatten::{flatten, position_of, VisibleItem};
use crate::search::{self, SearchKind};
use crate::tree::{GroupId, Tree};
use crate::viewport;

/// Default cap on the length of a search query.
pub const DEFAULT_SEARCH_MAX_LEN: usize = 30;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Groups,
    Entries,
}

/// Outcome of the last submitted search, as shown in the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No query submitted yet (or the last one was cancelled).
    #[default]
    Idle,
    Found,
    NotFound,
}

/// Discrete input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    FocusLeft,
    FocusRight,
    Up,
    Down,
    /// Jump to the top of the focused pane.
    Top,
    /// Jump to the bottom of the focused pane.
    Bottom,
    ToggleExpand,
    TogglePasswordVisibility,
    ToggleExpandAll,
    EnterSearch(SearchKind),
    SearchChar(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
    /// The terminal changed size; only settles the state.
    Resize,
    Quit,
}

/// Whether the main loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}

/// Usable rows of each pane, borders already subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub group_rows: usize,
    pub entry_rows: usize,
}

impl Geometry {
    pub fn new(group_rows: usize, entry_rows: usize) -> Self {
        Self {
            group_rows,
            entry_rows,
        }
    }

    /// Number of entries shown at once in the entry pane.
    pub fn entries_per_page(&self) -> usize {
        viewport::entries_per_page(self.entry_rows)
    }
}

/// Tunables taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub show_passwords: bool,
    pub search_max_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_passwords: false,
            search_max_len: DEFAULT_SEARCH_MAX_LEN,
        }
    }
}

/// Everything the browser remembers between inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Index into the flattened group list.
    pub selected: usize,
    pub group_scroll: usize,
    pub entry_scroll: usize,
    pub query: String,
    /// Set while a query is being typed.
    pub search: Option<SearchKind>,
    pub status: SearchStatus,
    pub show_passwords: bool,
    pub focus: Pane,
    /// Last "expand all" request; the next one flips it.
    pub expand_all: bool,
}

impl NavigationState {
    /// Whether the search line editor is active.
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }
}

/// The tree together with its navigation state.
pub struct Navigator {
    tree: Tree,
    state: NavigationState,
    search_max_len: usize,
}

impl Navigator {
    pub fn new(tree: Tree, options: Options) -> Self {
        Self {
            tree,
            state: NavigationState {
                show_passwords: options.show_passwords,
                ..NavigationState::default()
            },
            search_max_len: options.search_max_len,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current flattened group list.
    pub fn visible(&self) -> Vec<VisibleItem> {
        flatten(&self.tree)
    }

    /// The group under the selection.
    pub fn selected_group(&self) -> GroupId {
        self.visible()
            .get(self.state.selected)
            .map_or(self.tree.root(), |item| item.group)
    }

    /// Apply one input event.
    pub fn apply(&mut self, input: Input, geometry: Geometry) -> Transition {
        if input == Input::Quit {
            tracing::debug!("Quit requested");
            return Transition::Quit;
        }

        match self.state.search {
            Some(kind) => self.apply_search_input(kind, input, geometry),
            None => self.apply_normal_input(input, geometry),
        }
        self.settle(geometry);
        Transition::Continue
    }

    fn apply_normal_input(&mut self, input: Input, geometry: Geometry) {
        match input {
            Input::FocusLeft => self.state.focus = Pane::Groups,
            Input::FocusRight => self.state.focus = Pane::Entries,
            Input::Up => match self.state.focus {
                Pane::Groups => {
                    let target = self.state.selected.saturating_sub(1);
                    self.select(target, geometry);
                }
                Pane::Entries => {
                    self.state.entry_scroll = self.state.entry_scroll.saturating_sub(1);
                }
            },
            Input::Down => match self.state.focus {
                Pane::Groups => {
                    let target = self.state.selected + 1;
                    self.select(target, geometry);
                }
                Pane::Entries => {
                    let max = self.max_entry_scroll(geometry);
                    self.state.entry_scroll = (self.state.entry_scroll + 1).min(max);
                }
            },
            Input::Top => match self.state.focus {
                Pane::Groups => {
                    self.select(0, geometry);
                    self.state.group_scroll = 0;
                }
                Pane::Entries => self.state.entry_scroll = 0,
            },
            Input::Bottom => match self.state.focus {
                Pane::Groups => {
                    let last = self.visible().len().saturating_sub(1);
                    self.select(last, geometry);
                }
                Pane::Entries => self.state.entry_scroll = self.max_entry_scroll(geometry),
            },
            Input::ToggleExpand => {
                if self.state.focus == Pane::Groups {
                    self.toggle_selected();
                }
            }
            Input::TogglePasswordVisibility => {
                self.state.show_passwords = !self.state.show_passwords;
            }
            Input::ToggleExpandAll => self.toggle_expand_all(),
            Input::EnterSearch(kind) => {
                self.state.search = Some(kind);
                self.state.query.clear();
                self.state.status = SearchStatus::Idle;
            }
            Input::SearchChar(_)
            | Input::SearchBackspace
            | Input::SubmitSearch
            | Input::CancelSearch
            | Input::Resize
            | Input::Quit => {}
        }
    }

    fn apply_search_input(&mut self, kind: SearchKind, input: Input, geometry: Geometry) {
        match input {
            Input::SearchChar(c) => {
                if self.state.query.chars().count() < self.search_max_len {
                    self.state.query.push(c);
                }
            }
            Input::SearchBackspace => {
                self.state.query.pop();
            }
            Input::SubmitSearch => {
                self.state.search = None;
                self.submit_search(kind, geometry);
            }
            Input::CancelSearch => {
                self.state.search = None;
                self.state.query.clear();
                self.state.status = SearchStatus::Idle;
            }
            _ => {}
        }
    }

    /// Move the group selection, clamped to the visible list.
    fn select(&mut self, target: usize, geometry: Geometry) {
        let len = self.visible().len();
        let target = target.min(len.saturating_sub(1));
        if target != self.state.selected {
            self.state.selected = target;
            self.state.entry_scroll = 0;
        }
        self.state.group_scroll =
            viewport::follow(len, geometry.group_rows, target, self.state.group_scroll);
    }

    fn toggle_selected(&mut self) {
        let group = self.selected_group();
        let expanded = self.tree.toggle(group);
        self.tree.reveal(group);
        self.state.entry_scroll = 0;
        tracing::debug!(group = group.index(), expanded, "Toggled group");
    }

    fn toggle_expand_all(&mut self) {
        self.state.expand_all = !self.state.expand_all;
        let selected = self.selected_group();
        self.tree.set_all_expanded(self.state.expand_all);

        if self.state.expand_all {
            if let Some(position) = position_of(&self.visible(), selected) {
                self.state.selected = position;
            }
        } else {
            self.state.selected = 0;
            self.state.group_scroll = 0;
            self.state.entry_scroll = 0;
        }
        tracing::debug!(expand_all = self.state.expand_all, "Toggled all groups");
    }

    fn submit_search(&mut self, kind: SearchKind, geometry: Geometry) {
        let Some(found) = search::search(&mut self.tree, kind, &self.state.query) else {
            self.state.status = SearchStatus::NotFound;
            return;
        };

        let visible = self.visible();
        let Some(position) = position_of(&visible, found.group) else {
            self.state.status = SearchStatus::NotFound;
            return;
        };

        self.state.status = SearchStatus::Found;
        self.state.selected = position;
        self.state.group_scroll = viewport::recenter(visible.len(), geometry.group_rows, position);

        let entries = self.tree.group(found.group).entries().len();
        let max = viewport::max_offset(entries, geometry.entries_per_page());
        self.state.entry_scroll = found.entry.unwrap_or(0).min(max);
    }

    fn max_entry_scroll(&self, geometry: Geometry) -> usize {
        let entries = self.tree.group(self.selected_group()).entries().len();
        viewport::max_offset(entries, geometry.entries_per_page())
    }

    /// Clamp selection and both scroll offsets to the current tree and geometry.
    pub fn settle(&mut self, geometry: Geometry) {
        let len = self.visible().len();
        if self.state.selected >= len {
            self.state.selected = len.saturating_sub(1);
        }
        self.state.group_scroll = viewport::follow(
            len,
            geometry.group_rows,
            self.state.selected,
            self.state.group_scroll,
        );
        self.state.entry_scroll = self.state.entry_scroll.min(self.max_entry_scroll(geometry));
    }
}
