//! # Landing Page Component
//!
//! The welcome screen: a small pulsing plane over the app name.

use crate::tui::component::Component;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const PLANE: [&str; 3] = ["    __|__    ", "--o--(_)--o--", "   '  ✈  '   "];

pub struct LandingPage {
    /// 0.0..=1.0, drives the plane's brightness.
    pulse: f32,
}

impl LandingPage {
    pub fn new(pulse: f32) -> Self {
        Self { pulse }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let plane_style = if self.pulse > 0.5 {
            Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::SECONDARY)
        };

        let mut lines: Vec<Line> = PLANE
            .iter()
            .map(|row| Line::from(Span::styled(*row, plane_style)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "BIA AIRPORT",
            Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled("Navigator", theme::heading())));
        lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            theme::muted(),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press Enter to get started",
            Style::default().fg(theme::SUCCESS),
        )));

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_renders_title() {
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal
            .draw(|f| LandingPage::new(0.8).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("AIRPORT"));
        assert!(text.contains("Navigator"));
        assert!(text.contains("get started"));
    }
}
