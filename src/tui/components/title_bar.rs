//! # TitleBar Component
//!
//! Top status bar: app name, current screen, status message.
//!
//! Stateless: all three values are props, so the bar doesn't care whether
//! they came from the screen stack or from the last action.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"BIA Navigator · Search & Navigate | Sorted by distance"`
//! 2. **Default**: `"BIA Navigator · Search & Navigate"`

use crate::tui::component::Component;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String) -> Self {
        Self {
            screen_title,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() || self.status_message == self.screen_title {
            format!(" BIA Navigator · {}", self.screen_title)
        } else {
            format!(" BIA Navigator · {} | {}", self.screen_title, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = Span::styled(self.text(), Style::default().fg(Color::White).bg(theme::PRIMARY));
        frame.render_widget(
            ratatui::widgets::Paragraph::new(bar).style(Style::default().bg(theme::PRIMARY)),
            area,
        );
    }
}
