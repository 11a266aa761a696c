//! Core of the kplite KeePass viewer.
//!
//! Turns a decoded group/entry hierarchy into a navigable two-pane view:
//! tree model, visibility flattening, viewport scrolling, search and the
//! input state machine. Nothing in here talks to a terminal.

pub mod database;
pub mod error;
pub mod flatten;
pub mod models;
pub mod navigation;
pub mod search;
pub mod tree;
pub mod view;
pub mod viewport;

pub use database::{KeepassDatabase, VaultFile};
pub use error::VaultError;
pub use flatten::{flatten, VisibleItem};
pub use models::{Entry, RawGroup};
pub use navigation::{
    Geometry, Input, NavigationState, Navigator, Options, Pane, SearchStatus, Transition,
};
pub use search::{Match, SearchKind};
pub use tree::{Group, GroupId, Tree};
pub use view::{EntryCard, GroupRow, Indicator, PaneView, StatusLine, View, NOT_FOUND};
