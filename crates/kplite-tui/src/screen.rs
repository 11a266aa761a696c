//! The narrow drawing and input capabilities the UI is written against.

use crossterm::event::{self, Event};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::io;

/// Something the UI can paint on.
pub trait Canvas {
    /// Full drawable area.
    fn area(&self) -> Rect;

    /// Draw a bordered box with a title in the top border.
    fn draw_box(&mut self, area: Rect, title: &str, highlighted: bool);

    /// Print `text` starting at `(x, y)`, clipped to the drawable area.
    fn print(&mut self, x: u16, y: u16, text: &str, style: Style);
}

impl Canvas for Frame<'_> {
    fn area(&self) -> Rect {
        Frame::area(self)
    }

    fn draw_box(&mut self, area: Rect, title: &str, highlighted: bool) {
        let border_color = if highlighted { Color::Cyan } else { Color::DarkGray };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        if !title.is_empty() {
            block = block.title(format!(" {title} "));
        }
        self.render_widget(block, area);
    }

    fn print(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let area = Frame::area(self);
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            return;
        }
        let max_width = usize::from(area.right() - x);
        self.buffer_mut().set_stringn(x, y, text, max_width, style);
    }
}

/// Blocking source of terminal events.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the controlling terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}
