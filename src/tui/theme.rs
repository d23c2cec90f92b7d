//! Terminal palette, taken from the airline sky-blue theme.

use ratatui::style::{Color, Modifier, Style};

use crate::directory::Rgb;

pub const PRIMARY: Color = Color::Rgb(0x2A, 0x65, 0x8A);
pub const SECONDARY: Color = Color::Rgb(0x51, 0x84, 0x94);
pub const ACCENT: Color = Color::Rgb(0x4D, 0x8E, 0x7B);
pub const SUCCESS: Color = Color::Rgb(0x04, 0xA5, 0x1B);
pub const WARNING: Color = Color::Rgb(0xEF, 0x6C, 0x1A);
pub const SKY: Color = Color::Rgb(0x87, 0xCE, 0xEB);
pub const MUTED: Color = Color::DarkGray;

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub fn selected() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(SKY).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}
