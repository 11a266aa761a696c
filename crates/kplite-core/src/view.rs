//! What a renderer needs to paint one frame.
//!
//! The projection is pure data: no escape codes and no layout beyond the
//! row windows computed from [`Geometry`].

use std::borrow::Cow;

use crate::models::Entry;
use crate::navigation::{Geometry, Navigator, Pane, SearchStatus};
use crate::search::SearchKind;
use crate::viewport;

/// Status text shown when a search had no match.
pub const NOT_FOUND: &str = "NOT FOUND";

/// Expand marker of a group row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Expanded,
    Collapsed,
    /// The group has no subgroups.
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow<'a> {
    pub name: &'a str,
    pub depth: usize,
    pub indicator: Indicator,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard<'a> {
    pub title: &'a str,
    pub username: &'a str,
    /// Either the password or one `*` per character.
    pub password: Cow<'a, str>,
    /// Omitted when the entry has no URL.
    pub url: Option<&'a str>,
}

impl<'a> EntryCard<'a> {
    fn new(entry: &'a Entry, show_password: bool) -> Self {
        let password = if show_password {
            Cow::Borrowed(entry.password.as_str())
        } else {
            Cow::Owned(mask(&entry.password))
        };
        Self {
            title: &entry.title,
            username: &entry.username,
            password,
            url: (!entry.url.is_empty()).then_some(entry.url.as_str()),
        }
    }
}

/// The on-screen slice of one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView<T> {
    pub rows: Vec<T>,
    pub more_above: bool,
    pub more_below: bool,
}

/// Content of the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine<'a> {
    /// Nothing searched yet.
    Idle,
    /// A query is being typed.
    Editing { kind: SearchKind, query: &'a str },
    /// The last query matched.
    Found(&'a str),
    /// The last query matched nothing; rendered as [`NOT_FOUND`].
    NotFound,
}

/// A full frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub groups: PaneView<GroupRow<'a>>,
    pub entries: PaneView<EntryCard<'a>>,
    /// Name of the selected group.
    pub entry_title: &'a str,
    pub focus: Pane,
    pub status: StatusLine<'a>,
}

impl Navigator {
    /// Project the current state into renderable rows.
    pub fn view(&self, geometry: Geometry) -> View<'_> {
        let tree = self.tree();
        let state = self.state();
        let visible = self.visible();

        let range = viewport::window(visible.len(), geometry.group_rows, state.group_scroll);
        let groups = PaneView {
            more_above: range.start > 0,
            more_below: range.end < visible.len(),
            rows: visible[range]
                .iter()
                .map(|item| {
                    let group = tree.group(item.group);
                    let indicator = match (group.has_children(), group.is_expanded()) {
                        (false, _) => Indicator::Leaf,
                        (true, true) => Indicator::Expanded,
                        (true, false) => Indicator::Collapsed,
                    };
                    GroupRow {
                        name: group.name(),
                        depth: item.depth,
                        indicator,
                        selected: item.position == state.selected,
                    }
                })
                .collect(),
        };

        let selected = tree.group(self.selected_group());
        let all_entries = selected.entries();
        let per_page = geometry.entries_per_page();
        let range = viewport::window(all_entries.len(), per_page, state.entry_scroll);
        let paged = all_entries.len() > per_page;
        let entries = PaneView {
            more_above: paged && range.start > 0,
            more_below: paged && range.end < all_entries.len(),
            rows: all_entries[range]
                .iter()
                .map(|entry| EntryCard::new(entry, state.show_passwords))
                .collect(),
        };

        let status = match (state.search, state.status) {
            (Some(kind), _) => StatusLine::Editing {
                kind,
                query: &state.query,
            },
            (None, SearchStatus::Idle) => StatusLine::Idle,
            (None, SearchStatus::Found) => StatusLine::Found(&state.query),
            (None, SearchStatus::NotFound) => StatusLine::NotFound,
        };

        View {
            groups,
            entries,
            entry_title: selected.name(),
            focus: state.focus,
            status,
        }
    }
}

fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}
