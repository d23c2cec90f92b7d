//! # Place Card Component
//!
//! Summary card for one place: name, type badge, description, then a stats
//! row with floor, distance and walk time.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::directory::{Place, style_for, walk_minutes};
use crate::tui::component::Component;
use crate::tui::theme;

pub struct PlaceCard<'a> {
    pub place: &'a Place,
    /// Closing call to action, e.g. "Enter  Let's Go".
    pub hint: &'a str,
}

impl PlaceCard<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let place = self.place;
        let style = style_for(place.place_type);
        let accent = theme::rgb(style.accent);
        let distance = place
            .distance
            .map(|d| format!("{d}m"))
            .unwrap_or_else(|| "--".to_string());

        vec![
            Line::from(Span::styled(
                place.name,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {} {} ", style.glyph, place.place_type),
                Style::default().fg(Color::White).bg(theme::rgb(style.marker)),
            )),
            Line::default(),
            Line::from(place.description),
            Line::default(),
            Line::from(vec![
                Span::styled("Floor ", theme::muted()),
                Span::raw(place.floor),
                Span::styled("   Distance ", theme::muted()),
                Span::styled(distance, Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD)),
                Span::styled("   Walk ", theme::muted()),
                Span::raw(format!("~{} min", walk_minutes(place))),
            ]),
            Line::default(),
            Line::from(Span::styled(self.hint.to_string(), Style::default().fg(theme::SUCCESS))),
        ]
    }

    /// Rows needed at `width` including borders.
    pub fn height(&self, width: u16) -> u16 {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .line_count(width.saturating_sub(4)) as u16
            + 2
    }
}

impl Component for PlaceCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::SECONDARY))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::find_place;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_card_shows_stats() {
        let place = find_place(7).unwrap();
        let mut card = PlaceCard { place, hint: "Enter  Let's Go" };
        let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Gate 01"));
        assert!(text.contains("320m"));
        assert!(text.contains("~6 min"));
        assert!(text.contains("Let's Go"));
    }

    #[test]
    fn test_height_grows_when_narrow() {
        let place = find_place(14).unwrap();
        let card = PlaceCard { place, hint: "" };
        assert!(card.height(30) > card.height(120));
    }
}
