//! Rendering of the two-pane browser.
//!
//! Everything here draws through [`Canvas`], so the same code paints a
//! ratatui frame or a test double.

use crate::app::App;
use crate::screen::Canvas;
use kplite_core::{Geometry, Indicator, Pane, SearchKind, StatusLine, View, NOT_FOUND};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};
use std::borrow::Cow;
use std::ops::Range;

const HELP: &str = "q: quit, arrows: navigate, enter: expand/collapse, space: passwords, \
                    f: expand/collapse all, /: find group, ?: find entry";

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub header: Rect,
    pub groups: Rect,
    pub entries: Rect,
    pub search: Rect,
}

impl Panes {
    /// Header line on top, search bar at the bottom, the two panes between.
    pub fn split(area: Rect, group_percent: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Panes
                Constraint::Length(3), // Search bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(group_percent),
                Constraint::Percentage(100 - group_percent),
            ])
            .split(rows[1]);

        Self {
            header: rows[0],
            groups: columns[0],
            entries: columns[1],
            search: rows[2],
        }
    }

    /// Usable rows inside the pane borders.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(
            usize::from(self.groups.height.saturating_sub(2)),
            usize::from(self.entries.height.saturating_sub(2)),
        )
    }
}

/// Main render function.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, app: &App) {
    let panes = Panes::split(canvas.area(), app.group_pane_percent);
    let view = app.navigator.view(app.geometry);

    render_header(canvas, app, panes.header);
    render_groups(canvas, &view, panes.groups);
    render_entries(canvas, &view, panes.entries);
    render_search(canvas, &view, panes.search);
}

fn render_header<C: Canvas + ?Sized>(canvas: &mut C, app: &App, area: Rect) {
    let text = format!("kplite [{}] - ({HELP})", app.database_name());
    let text = truncate(&text, usize::from(area.width));
    canvas.print(area.x, area.y, &text, Style::default().fg(Color::DarkGray));
}

/// Render the group tree.
fn render_groups<C: Canvas + ?Sized>(canvas: &mut C, view: &View<'_>, area: Rect) {
    canvas.draw_box(area, "Groups", view.focus == Pane::Groups);

    // One column is reserved for the scroll markers.
    let width = usize::from(area.width.saturating_sub(3));
    for (row, y) in view.groups.rows.iter().zip(inner_rows(area)) {
        let text = format!(
            "{}{} {}",
            "  ".repeat(row.depth),
            indicator(row.indicator),
            row.name
        );
        let style = if row.selected {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let padded = format!("{:<width$}", truncate(&text, width));
        canvas.print(area.x + 1, y, &padded, style);
    }

    render_scroll_markers(canvas, area, view.groups.more_above, view.groups.more_below);
}

/// Render the entries of the selected group.
fn render_entries<C: Canvas + ?Sized>(canvas: &mut C, view: &View<'_>, area: Rect) {
    canvas.draw_box(area, view.entry_title, view.focus == Pane::Entries);

    let x = area.x + 1;
    let width = usize::from(area.width.saturating_sub(3));
    let mut rows = inner_rows(area);

    if view.entries.rows.is_empty() {
        if let Some(y) = rows.next() {
            canvas.print(x, y, "(no entries)", Style::default().fg(Color::DarkGray));
        }
        return;
    }

    'cards: for card in &view.entries.rows {
        let mut fields = vec![
            ("Title: ", card.title, Color::White),
            ("Username: ", card.username, Color::Green),
            ("Password: ", card.password.as_ref(), Color::Yellow),
        ];
        if let Some(url) = card.url {
            fields.push(("URL: ", url, Color::Blue));
        }

        for (label, value, color) in fields {
            let Some(y) = rows.next() else { break 'cards };
            render_field(canvas, x, y, width, label, value, color);
        }

        let Some(y) = rows.next() else { break };
        canvas.print(x, y, &"-".repeat(width), Style::default().fg(Color::DarkGray));
    }

    render_scroll_markers(canvas, area, view.entries.more_above, view.entries.more_below);
}

fn render_field<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: u16,
    y: u16,
    width: usize,
    label: &str,
    value: &str,
    color: Color,
) {
    canvas.print(x, y, label, Style::default().fg(Color::DarkGray));
    let value = truncate(value, width.saturating_sub(label.len()));
    canvas.print(x + label.len() as u16, y, &value, Style::default().fg(color));
}

/// Render the search bar.
fn render_search<C: Canvas + ?Sized>(canvas: &mut C, view: &View<'_>, area: Rect) {
    let editing = matches!(view.status, StatusLine::Editing { .. });
    canvas.draw_box(area, "Search", editing);

    let Some(y) = inner_rows(area).next() else {
        return;
    };
    let (text, style) = match view.status {
        StatusLine::Idle => (
            Cow::Borrowed("/: find group  ?: find entry"),
            Style::default().fg(Color::DarkGray),
        ),
        StatusLine::Editing { kind, query } => {
            let prompt = match kind {
                SearchKind::GroupName => '/',
                SearchKind::Content => '?',
            };
            (
                Cow::Owned(format!("{prompt} {query}_")),
                Style::default().fg(Color::White),
            )
        }
        StatusLine::Found(query) => (Cow::Borrowed(query), Style::default().fg(Color::Green)),
        StatusLine::NotFound => (
            Cow::Borrowed(NOT_FOUND),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let text = truncate(&text, usize::from(area.width.saturating_sub(2)));
    canvas.print(area.x + 1, y, &text, style);
}

fn render_scroll_markers<C: Canvas + ?Sized>(
    canvas: &mut C,
    area: Rect,
    more_above: bool,
    more_below: bool,
) {
    if area.height < 3 || area.width < 3 {
        return;
    }
    let x = area.right() - 2;
    let style = Style::default().fg(Color::Cyan);
    if more_above {
        canvas.print(x, area.y + 1, "↑", style);
    }
    if more_below {
        canvas.print(x, area.bottom() - 2, "↓", style);
    }
}

fn indicator(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Expanded => "▾",
        Indicator::Collapsed => "▸",
        Indicator::Leaf => "-",
    }
}

/// Rows inside the top and bottom border.
fn inner_rows(area: Rect) -> Range<u16> {
    area.y + 1..area.bottom().saturating_sub(1)
}

/// Shorten `text` to `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    if max <= 3 {
        return Cow::Owned(text.chars().take(max).collect());
    }
    let mut short: String = text.chars().take(max - 3).collect();
    short.push_str("...");
    Cow::Owned(short)
}
