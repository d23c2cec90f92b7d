use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::{App, Screen};
use crate::directory::{CATEGORIES, Category, Place, directions, route_polyline, walk_minutes};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CategoryGrid, DirectionsList, LandingPage, LogViewer, MapView, PlaceCard, PlaceList, TitleBar,
};
use crate::tui::theme;

/// Dashboard cards: every category but "All", with its place count.
pub fn category_entries(app: &App) -> Vec<(&'static Category, usize)> {
    CATEGORIES
        .iter()
        .filter(|c| !c.is_all())
        .map(|c| (c, app.directory.filter_places("", Some(c)).len()))
        .collect()
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let screen = app.current_screen();
    TitleBar::new(screen.title().to_string(), app.status_message.clone()).render(frame, title_area);

    match screen {
        Screen::Welcome => LandingPage::new(tui.pulse_value).render(frame, main_area),
        Screen::Dashboard => draw_dashboard(frame, main_area, app, tui),
        Screen::Search => draw_search(frame, main_area, app, tui),
        Screen::PlaceDetail(_) => match app.current_place() {
            Some(place) => draw_place_detail(frame, main_area, place),
            None => draw_not_found(frame, main_area),
        },
        Screen::RoutePreview(_) => match app.current_place() {
            Some(place) => draw_route_preview(frame, main_area, place),
            None => draw_not_found(frame, main_area),
        },
        Screen::RouteNavigation(_) => match app.current_place() {
            Some(place) => draw_route_navigation(frame, main_area, place, app.active_step),
            None => draw_not_found(frame, main_area),
        },
        Screen::Logs => LogViewer {
            logs: &app.logs,
            state: &mut tui.log_scroll,
        }
        .render(frame, main_area),
    }

    frame.render_widget(
        Paragraph::new(help_text(screen)).style(theme::muted()),
        help_area,
    );
}

fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Welcome => " Enter Start  Tab Search  q Quit  Ctrl+L Logs",
        Screen::Dashboard => " Type to search  ←↑↓→ Select  Enter Open  Tab Search  Esc Back",
        Screen::Search => " Type to search  ←→ Category  ↑↓ Select  Ctrl+S Sort  Enter Route  Esc Back",
        Screen::PlaceDetail(_) => " Enter Let's Go  Esc Back",
        Screen::RoutePreview(_) => " Enter Start Navigation  Esc Back",
        Screen::RouteNavigation(_) => " ↑↓ Step  Esc Back",
        Screen::Logs => " ↑↓ Scroll  c Clear  r Reload  Esc Back",
    }
}

fn draw_not_found(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled("Place not found", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("Press Esc to go back", theme::muted())),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(theme::muted()));
    frame.render_widget(paragraph, area);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [search_area, body_area] = Layout::vertical([Length(3), Min(0)]).areas(area);
    tui.search_box.render(frame, search_area);

    if app.query.is_empty() {
        let [label_area, grid_area] = Layout::vertical([Length(1), Min(0)]).areas(body_area);
        frame.render_widget(
            Paragraph::new(Span::styled(" Browse by category", theme::heading())),
            label_area,
        );
        let entries = category_entries(app);
        CategoryGrid {
            entries: &entries,
            selected: tui.category_index,
        }
        .render(frame, grid_area);
    } else {
        let places = app.dashboard_places();
        PlaceList::new(&places, &mut tui.results).render(frame, body_area);
    }
}

fn category_chips(app: &App) -> Line<'static> {
    let mut spans: Vec<Span> = CATEGORIES
        .iter()
        .flat_map(|c| {
            let style = if c.id == app.category.id {
                theme::selected()
            } else {
                theme::muted()
            };
            [Span::styled(format!(" {} ", c.name), style), Span::raw(" ")]
        })
        .collect();
    let (mark, style) = if app.sort_by_distance {
        ("[x]", Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD))
    } else {
        ("[ ]", theme::muted())
    };
    spans.push(Span::styled(format!("  {mark} Sort by Distance"), style));
    Line::from(spans)
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [search_area, chips_area, body_area] =
        Layout::vertical([Length(3), Length(1), Min(0)]).areas(area);
    tui.search_box.render(frame, search_area);
    frame.render_widget(Paragraph::new(category_chips(app)), chips_area);

    let places = app.search_places();
    let [list_area, map_area] =
        Layout::horizontal([Percentage(55), Percentage(45)]).areas(body_area);
    PlaceList::new(&places, &mut tui.results).render(frame, list_area);

    let highlight = tui.results.get(&places).map(|p| p.id);
    MapView {
        markers: &places,
        highlight,
        route: None,
        title: "Terminal Map",
    }
    .render(frame, map_area);
}

fn draw_place_detail(frame: &mut Frame, area: Rect, place: &Place) {
    use Constraint::{Length, Min};
    let mut card = PlaceCard {
        place,
        hint: "Enter  Let's Go",
    };
    let [map_area, card_area] =
        Layout::vertical([Min(6), Length(card.height(area.width))]).areas(area);
    MapView {
        markers: &[place],
        highlight: Some(place.id),
        route: None,
        title: "Map Preview",
    }
    .render(frame, map_area);
    card.render(frame, card_area);
}

fn draw_route_preview(frame: &mut Frame, area: Rect, place: &Place) {
    use Constraint::{Length, Min};
    let mut card = PlaceCard {
        place,
        hint: "Enter  Start Navigation",
    };
    let [card_area, steps_area] =
        Layout::vertical([Length(card.height(area.width)), Min(0)]).areas(area);
    card.render(frame, card_area);

    let steps = directions(place);
    DirectionsList {
        steps: &steps,
        active: None,
        title: "Step-by-Step Directions",
    }
    .render(frame, steps_area);
}

fn draw_route_navigation(frame: &mut Frame, area: Rect, place: &Place, active_step: usize) {
    use Constraint::{Length, Min, Percentage};
    let [map_area, side_area] =
        Layout::horizontal([Percentage(55), Percentage(45)]).areas(area);

    MapView {
        markers: &[place],
        highlight: Some(place.id),
        route: Some(route_polyline(place)),
        title: "Route",
    }
    .render(frame, map_area);

    let [summary_area, steps_area] = Layout::vertical([Length(4), Min(0)]).areas(side_area);
    let distance = place
        .distance
        .map(|d| format!("{d}m"))
        .unwrap_or_else(|| "--".to_string());
    let summary = Paragraph::new(vec![
        Line::from(Span::styled(format!("→ {}", place.name), theme::heading())),
        Line::from(vec![
            Span::styled(distance, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  ~{} min walk", walk_minutes(place)), theme::muted()),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(theme::muted()));
    frame.render_widget(summary, summary_area);

    let steps = directions(place);
    DirectionsList {
        steps: &steps,
        active: Some(active_step),
        title: "Directions",
    }
    .render(frame, steps_area);
}
