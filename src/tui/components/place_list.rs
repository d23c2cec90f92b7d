//! # Place List Component
//!
//! Result list for the dashboard and search screens. One row per place:
//! colored type glyph, name, type, floor, distance.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `Selection` lives in `TuiState`
//! - `PlaceList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};

use crate::directory::{Place, style_for};
use crate::tui::components::selection::Selection;
use crate::tui::theme;

/// "3 places found" / "1 place found".
pub fn result_count_label(n: usize) -> String {
    format!("{} {} found", n, if n == 1 { "place" } else { "places" })
}

pub struct PlaceList<'a> {
    places: &'a [&'a Place],
    selection: &'a mut Selection,
    title: String,
}

impl<'a> PlaceList<'a> {
    pub fn new(places: &'a [&'a Place], selection: &'a mut Selection) -> Self {
        Self {
            places,
            selection,
            title: result_count_label(places.len()),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));

        if self.places.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from("No places found"),
                Line::from(Span::styled("Try adjusting your search or filters", theme::muted())),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.selection.sync(self.places.len());

        let items: Vec<ListItem> = self
            .places
            .iter()
            .enumerate()
            .map(|(i, place)| {
                let style = style_for(place.place_type);
                let row_style = if i == self.selection.selected {
                    theme::selected()
                } else {
                    Style::default()
                };
                let distance = place
                    .distance
                    .map(|d| format!("{d}m"))
                    .unwrap_or_else(|| "--".to_string());
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", style.glyph), Style::default().fg(theme::rgb(style.marker))),
                    Span::styled(place.name, row_style),
                    Span::styled(
                        format!("  {} · {} · {}", place.place_type, place.floor, distance),
                        if i == self.selection.selected { row_style } else { theme::muted() },
                    ),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), area, &mut self.selection.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(0), "0 places found");
        assert_eq!(result_count_label(1), "1 place found");
        assert_eq!(result_count_label(3), "3 places found");
    }

    #[test]
    fn test_renders_rows() {
        let places = Directory::builtin().filter_places("atm", None);
        let mut selection = Selection::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|f| PlaceList::new(&places, &mut selection).render(f, f.area()))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("3 places found"));
        assert!(text.contains("Commercial Bank ATM"));
        assert!(text.contains("45m"));
        assert_eq!(selection.list_state.selected(), Some(0));
    }

    #[test]
    fn test_renders_empty_state() {
        let places: Vec<&Place> = Vec::new();
        let mut selection = Selection::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| PlaceList::new(&places, &mut selection).render(f, f.area()))
            .unwrap();
        assert!(screen_text(&terminal).contains("No places found"));
    }
}
