//! # Directions Component
//!
//! Numbered step list. On the navigation screen one step is active and the
//! ones before it are drawn as done.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme;

pub struct DirectionsList<'a> {
    pub steps: &'a [String],
    /// `None` on the preview screen: every step drawn the same.
    pub active: Option<usize>,
    pub title: &'a str,
}

impl Component for DirectionsList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let (marker, style) = match self.active {
                    Some(active) if i < active => ("✓", theme::muted()),
                    Some(active) if i == active => (
                        "▶",
                        Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD),
                    ),
                    _ => (" ", Style::default()),
                };
                Line::from(vec![
                    Span::styled(format!("{marker} {:>2}. ", i + 1), style),
                    Span::styled(step.as_str(), style),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted())
                .title(Span::styled(format!(" {} ", self.title), theme::heading()))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, area);
    }
}
