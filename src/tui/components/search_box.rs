//! # SearchBox Component
//!
//! Single-line query input used by the dashboard and search screens.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (newlines flattened to spaces)
//! - Handle editing (backspace, delete, cursor movement)
//! - Display the buffer with a placeholder when empty
//!
//! The buffer is internal state; the parent mirrors it into `App::query`
//! whenever a `SearchEvent::Changed` comes out. Enter and Up/Down are left
//! to the parent, which uses them for the result list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer content changed.
    Changed,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: &'static str,
    /// Byte offset of the cursor, always on a char boundary
    cursor: usize,
}

impl SearchBox {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            placeholder,
            cursor: 0,
        }
    }

    /// Replace the buffer, e.g. when the app cleared the query.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    /// Cursor column relative to the start of the text.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::SECONDARY))
            .title(" Search ");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(theme::muted())
        } else {
            Paragraph::new(self.buffer.as_str()).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + self.cursor_column()).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp));
                Some(SearchEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let flat = text.replace(['\r', '\n'], " ");
                self.insert(&flat);
                Some(SearchEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                SearchEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                SearchEvent::Changed
            }),
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}
