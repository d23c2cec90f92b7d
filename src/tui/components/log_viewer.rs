//! # Log Viewer Component
//!
//! Scrollable view of the log file snapshot held in `App::logs`, with each
//! line colored by its level tag.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use log::Level;

use crate::core::log_file::line_level;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

fn level_style(level: Option<Level>) -> Style {
    match level {
        Some(Level::Error) => Style::default().fg(Color::Red),
        Some(Level::Warn) => Style::default().fg(theme::WARNING),
        Some(Level::Info) => Style::default().fg(theme::SKY),
        Some(Level::Debug) | Some(Level::Trace) => theme::muted(),
        None => Style::default(),
    }
}

/// Scroll keys for the viewer. Returns true when the event was consumed.
pub fn handle_scroll(state: &mut ScrollViewState, event: &TuiEvent) -> bool {
    match event {
        TuiEvent::CursorUp => state.scroll_up(),
        TuiEvent::CursorDown => state.scroll_down(),
        TuiEvent::CursorHome => state.scroll_to_top(),
        TuiEvent::CursorEnd => state.scroll_to_bottom(),
        _ => return false,
    }
    true
}

/// Most lines the viewer keeps; older ones are dropped from the top.
const MAX_LINES: usize = 5_000;

/// Count of dropped leading lines and the newest `MAX_LINES` lines.
fn log_tail(logs: &str) -> (usize, Vec<&str>) {
    let all: Vec<&str> = logs.lines().collect();
    let skipped = all.len().saturating_sub(MAX_LINES);
    (skipped, all[skipped..].to_vec())
}

pub struct LogViewer<'a> {
    pub logs: &'a str,
    pub state: &'a mut ScrollViewState,
}

impl LogViewer<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(" System Logs ")
            .title_bottom(Line::from(" ↑↓ Scroll  c Clear  r Reload  Esc Back ").centered());

        if self.logs.trim().is_empty() {
            let empty = Paragraph::new("No logs found.")
                .style(theme::muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (skipped, tail) = log_tail(self.logs);
        let mut lines: Vec<Line> = Vec::with_capacity(tail.len() + 1);
        if skipped > 0 {
            lines.push(Line::styled(
                format!("... {skipped} earlier lines not shown"),
                theme::muted(),
            ));
        }
        lines.extend(
            tail.into_iter()
                .map(|l| Line::styled(l, level_style(line_level(l)))),
        );
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(lines);
        let height = u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, self.state);
    }
}
