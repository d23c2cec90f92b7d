//! # Category Grid Component
//!
//! The dashboard's "browse by category" cards, three to a row. Stateless:
//! the selected index comes in as a prop and Up/Down/Left/Right are mapped
//! by the parent through [`grid_step`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::directory::Category;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 4;

/// New index after an arrow key on a grid of `len` cards, or `None` when the
/// event is not a grid move.
pub fn grid_step(event: &TuiEvent, selected: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let next = match event {
        TuiEvent::CursorLeft => selected.saturating_sub(1),
        TuiEvent::CursorRight => (selected + 1).min(last),
        TuiEvent::CursorUp => selected.checked_sub(COLUMNS).unwrap_or(selected),
        TuiEvent::CursorDown => {
            if selected + COLUMNS <= last {
                selected + COLUMNS
            } else {
                selected
            }
        }
        _ => return None,
    };
    Some(next)
}

pub struct CategoryGrid<'a> {
    /// Category and how many places it holds.
    pub entries: &'a [(&'static Category, usize)],
    pub selected: usize,
}

impl Component for CategoryGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.entries.len().div_ceil(COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);

        for (row, chunk) in self.entries.chunks(COLUMNS).enumerate() {
            let Some(row_area) = row_areas.get(row) else {
                break;
            };
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_area);

            for (col, (category, count)) in chunk.iter().enumerate() {
                let index = row * COLUMNS + col;
                let is_selected = index == self.selected;
                let color = theme::rgb(category.color);

                let border_style = if is_selected {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    theme::muted()
                };
                let name_style = if is_selected {
                    theme::selected()
                } else {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                };

                let card = Paragraph::new(vec![
                    Line::from(Span::styled(category.name, name_style)),
                    Line::from(Span::styled(
                        format!("{} · {}", category.icon, count),
                        theme::muted(),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                );
                frame.render_widget(card, cells[col]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::CATEGORIES;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_grid_step_moves() {
        assert_eq!(grid_step(&TuiEvent::CursorRight, 0, 9), Some(1));
        assert_eq!(grid_step(&TuiEvent::CursorDown, 1, 9), Some(4));
        assert_eq!(grid_step(&TuiEvent::CursorDown, 7, 9), Some(7));
        assert_eq!(grid_step(&TuiEvent::CursorUp, 1, 9), Some(1));
        assert_eq!(grid_step(&TuiEvent::CursorLeft, 0, 9), Some(0));
        assert_eq!(grid_step(&TuiEvent::CursorRight, 8, 9), Some(8));
        assert_eq!(grid_step(&TuiEvent::Submit, 0, 9), None);
        assert_eq!(grid_step(&TuiEvent::CursorDown, 0, 0), None);
    }

    #[test]
    fn test_renders_category_cards() {
        let entries: Vec<(&'static Category, usize)> =
            CATEGORIES.iter().skip(1).map(|c| (c, 1)).collect();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                CategoryGrid {
                    entries: &entries,
                    selected: 0,
                }
                .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("ATM"));
        assert!(text.contains("Gates"));
        assert!(text.contains("Medical"));
    }
}
