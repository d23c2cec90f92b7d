//! # Map Component
//!
//! A braille canvas standing in for the terminal map: longitude on x,
//! latitude on y. Draws the reference point, place markers colored by type,
//! and optionally the route polyline.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};

use crate::directory::{Coordinates, Place, PlaceId, REFERENCE_POINT, style_for};
use crate::tui::component::Component;
use crate::tui::theme;

/// Smallest span shown on either axis, in degrees (~100m).
const MIN_SPAN: f64 = 0.001;
/// Margin added around the outermost point, as a fraction of the span.
const MARGIN: f64 = 0.15;

pub struct MapView<'a> {
    pub markers: &'a [&'a Place],
    pub highlight: Option<PlaceId>,
    pub route: Option<[Coordinates; 4]>,
    pub title: &'a str,
}

/// `(x_bounds, y_bounds)` covering every point plus a margin.
pub fn bounds(points: impl IntoIterator<Item = Coordinates>) -> ([f64; 2], [f64; 2]) {
    let mut lng = [REFERENCE_POINT.longitude; 2];
    let mut lat = [REFERENCE_POINT.latitude; 2];
    for p in points {
        lng = [lng[0].min(p.longitude), lng[1].max(p.longitude)];
        lat = [lat[0].min(p.latitude), lat[1].max(p.latitude)];
    }
    (pad(lng), pad(lat))
}

fn pad([lo, hi]: [f64; 2]) -> [f64; 2] {
    let span = (hi - lo).max(MIN_SPAN);
    let mid = (lo + hi) / 2.0;
    let half = span * (0.5 + MARGIN);
    [mid - half, mid + half]
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let points = self
            .markers
            .iter()
            .map(|p| p.coordinates)
            .chain(self.route.into_iter().flatten());
        let (x_bounds, y_bounds) = bounds(points);

        let canvas = Canvas::default()
            .block(Block::bordered().border_style(theme::muted()).title(format!(" {} ", self.title)))
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                if let Some(route) = &self.route {
                    for pair in route.windows(2) {
                        ctx.draw(&CanvasLine::new(
                            pair[0].longitude,
                            pair[0].latitude,
                            pair[1].longitude,
                            pair[1].latitude,
                            theme::SUCCESS,
                        ));
                    }
                    ctx.layer();
                }

                for place in self.markers {
                    let style = style_for(place.place_type);
                    let mut span_style = Style::default().fg(theme::rgb(style.marker));
                    if self.highlight == Some(place.id) {
                        span_style = span_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    ctx.print(
                        place.coordinates.longitude,
                        place.coordinates.latitude,
                        Span::styled(style.glyph.to_string(), span_style),
                    );
                }

                ctx.print(
                    REFERENCE_POINT.longitude,
                    REFERENCE_POINT.latitude,
                    Span::styled("◉ You", Style::default().fg(theme::WARNING)),
                );
            });

        frame.render_widget(canvas, area);
    }
}
