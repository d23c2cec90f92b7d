//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (welcome screen): draws every ~80ms for the pulsing plane.
//! - **Idle** (everything else): sleeps up to 500ms, only redraws on events
//!   or terminal resize.
//!
//! ## Key Mapping
//!
//! `dispatch()` is the whole keymap. It either returns an `Action` for
//! `update()` or handles the key locally (list cursor, grid cursor, log
//! scroll) and returns `None`.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::log_file::{clear_logs, read_logs};
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::category_grid::grid_step;
use crate::tui::components::log_viewer::handle_scroll;
use crate::tui::components::{SearchBox, SearchEvent, Selection};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    /// Cursor over the dashboard or search results.
    pub results: Selection,
    /// Selected dashboard category card.
    pub category_index: usize,
    pub log_scroll: ScrollViewState,
    // Animation state
    pub pulse_value: f32,
    /// Screen drawn last frame; cursors reset when it changes.
    last_screen: Option<Screen>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new("Search gates, ATMs, lounges..."),
            results: Selection::new(),
            category_index: 0,
            log_scroll: ScrollViewState::default(),
            pulse_value: 0.0,
            last_screen: None,
        }
    }

    /// Bring presentation state in line with the app before drawing.
    fn sync(&mut self, app: &App) {
        if self.search_box.buffer != app.query {
            self.search_box.set_text(&app.query);
        }
        let screen = app.current_screen();
        if self.last_screen != Some(screen) {
            self.results.reset();
            self.log_scroll = ScrollViewState::default();
            self.last_screen = Some(screen);
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock // redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Feed typing to the search box; a changed buffer becomes `SetQuery`.
fn edit_query(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.search_box.handle_event(event)? {
        SearchEvent::Changed => Some(Action::SetQuery(tui.search_box.buffer.clone())),
    }
}

/// Map one key event to an action for the current screen.
pub fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::OpenLogs => return Some(Action::Open(Screen::Logs)),
        TuiEvent::Escape => return Some(Action::Back),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.current_screen() {
        Screen::Welcome => match event {
            TuiEvent::Submit => Some(Action::Open(Screen::Dashboard)),
            TuiEvent::Tab => Some(Action::Open(Screen::Search)),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Dashboard => {
            if matches!(event, TuiEvent::Tab) {
                return Some(Action::Open(Screen::Search));
            }
            if app.query.is_empty() {
                let entries = ui::category_entries(app);
                if let Some(next) = grid_step(event, tui.category_index, entries.len()) {
                    tui.category_index = next;
                    return None;
                }
                if matches!(event, TuiEvent::Submit) {
                    return entries
                        .get(tui.category_index)
                        .map(|(category, _)| Action::BrowseCategory(*category));
                }
            } else {
                let places = app.dashboard_places();
                if tui.results.handle_event(event, places.len()) {
                    return None;
                }
                if matches!(event, TuiEvent::Submit) {
                    return tui
                        .results
                        .get(&places)
                        .map(|p| Action::Open(Screen::PlaceDetail(p.id)));
                }
            }
            edit_query(tui, event)
        }
        Screen::Search => {
            let places = app.search_places();
            match event {
                TuiEvent::ToggleSort => Some(Action::ToggleSort),
                TuiEvent::CursorLeft => Some(Action::CycleCategory(-1)),
                TuiEvent::CursorRight | TuiEvent::Tab => Some(Action::CycleCategory(1)),
                TuiEvent::Submit => tui
                    .results
                    .get(&places)
                    .map(|p| Action::Open(Screen::RoutePreview(p.id))),
                _ if tui.results.handle_event(event, places.len()) => None,
                _ => edit_query(tui, event),
            }
        }
        Screen::PlaceDetail(id) | Screen::RoutePreview(id) => match event {
            TuiEvent::Submit if app.current_place().is_some() => {
                Some(Action::Open(Screen::RouteNavigation(id)))
            }
            _ => None,
        },
        Screen::RouteNavigation(_) => match event {
            TuiEvent::CursorUp | TuiEvent::CursorLeft => Some(Action::PreviousStep),
            TuiEvent::CursorDown | TuiEvent::CursorRight | TuiEvent::Submit => {
                Some(Action::NextStep)
            }
            _ => None,
        },
        Screen::Logs => match event {
            TuiEvent::InputChar('c') => Some(Action::ClearLogs),
            TuiEvent::InputChar('r') => Some(Action::ReloadLogs),
            _ => {
                handle_scroll(&mut tui.log_scroll, event);
                None
            }
        },
    }
}

/// Apply an action and carry out its effects. Returns true on quit.
fn apply(app: &mut App, action: Action) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::LoadLogs => apply(app, Action::LogsLoaded(read_logs(&app.log_file))),
        Effect::ClearLogs => {
            match clear_logs(&app.log_file) {
                Ok(()) => info!("Logs cleared"),
                Err(e) => {
                    warn!("Failed to clear {}: {}", app.log_file.display(), e);
                    app.status_message = format!("Clear failed: {}", e);
                }
            }
            apply(app, Action::LogsLoaded(read_logs(&app.log_file)))
        }
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    app.logs = read_logs(&app.log_file);

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        let animating = app.current_screen() == Screen::Welcome;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.sync(&app);
            tui.pulse_value = (start_time.elapsed().as_secs_f32() * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.sync(&app);
            let Some(action) = dispatch(&app, &mut tui, &event) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            if apply(&mut app, action) {
                break 'main;
            }
        }
    }

    info!("Exiting");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::find_category;
    use crate::test_support::test_app;

    fn app_on(screen: Screen) -> App {
        let mut app = test_app();
        update(&mut app, Action::Open(screen));
        app
    }

    fn state_for(app: &App) -> TuiState {
        let mut tui = TuiState::new();
        tui.sync(app);
        tui
    }

    #[test]
    fn test_global_keys() {
        let app = app_on(Screen::Search);
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::ForceQuit), Some(Action::Quit));
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Escape), Some(Action::Back));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::OpenLogs),
            Some(Action::Open(Screen::Logs))
        );
    }

    #[test]
    fn test_welcome_keys() {
        let app = test_app();
        let mut tui = state_for(&app);
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Open(Screen::Dashboard))
        );
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::InputChar('q')), Some(Action::Quit));
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_dashboard_typing_sets_query() {
        let app = app_on(Screen::Dashboard);
        let mut tui = state_for(&app);
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::InputChar('a')),
            Some(Action::SetQuery("a".to_string()))
        );
    }

    #[test]
    fn test_dashboard_grid_then_browse() {
        let app = app_on(Screen::Dashboard);
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::CursorRight), None);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::CursorDown), None);
        assert_eq!(tui.category_index, 4);

        let Some(Action::BrowseCategory(category)) = dispatch(&app, &mut tui, &TuiEvent::Submit)
        else {
            panic!("expected BrowseCategory");
        };
        assert_eq!(category.id, "lounge");
    }

    #[test]
    fn test_dashboard_results_open_detail() {
        let mut app = app_on(Screen::Dashboard);
        update(&mut app, Action::SetQuery("atm".to_string()));
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::CursorDown), None);
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Open(Screen::PlaceDetail(2)))
        );
    }

    #[test]
    fn test_search_keys() {
        let app = app_on(Screen::Search);
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::ToggleSort), Some(Action::ToggleSort));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::CursorLeft),
            Some(Action::CycleCategory(-1))
        );
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::CursorRight),
            Some(Action::CycleCategory(1))
        );
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Open(Screen::RoutePreview(1)))
        );
    }

    #[test]
    fn test_search_submit_with_no_results() {
        let mut app = app_on(Screen::Search);
        update(&mut app, Action::SetQuery("zzz".to_string()));
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_search_follows_category_and_sort() {
        let mut app = app_on(Screen::Search);
        app.category = find_category("lounge").unwrap();
        update(&mut app, Action::ToggleSort);
        let mut tui = state_for(&app);
        // Lounges sorted by distance: 9 (200m) before 10 (215m)
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Open(Screen::RoutePreview(9)))
        );
    }

    #[test]
    fn test_place_screens_start_navigation() {
        let app = app_on(Screen::PlaceDetail(7));
        let mut tui = state_for(&app);
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Open(Screen::RouteNavigation(7)))
        );

        let app = app_on(Screen::RoutePreview(999));
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_navigation_steps() {
        let app = app_on(Screen::RouteNavigation(4));
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::CursorDown), Some(Action::NextStep));
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::CursorUp), Some(Action::PreviousStep));
    }

    #[test]
    fn test_logs_keys() {
        let app = app_on(Screen::Logs);
        let mut tui = state_for(&app);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::InputChar('c')), Some(Action::ClearLogs));
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::InputChar('r')), Some(Action::ReloadLogs));
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_sync_follows_query_and_screen() {
        let mut app = app_on(Screen::Search);
        let mut tui = state_for(&app);
        tui.results.selected = 3;
        update(&mut app, Action::SetQuery("gate".to_string()));
        tui.sync(&app);
        assert_eq!(tui.search_box.buffer, "gate");
        assert_eq!(tui.results.selected, 3);

        update(&mut app, Action::Open(Screen::RoutePreview(7)));
        tui.sync(&app);
        assert_eq!(tui.results.selected, 0);
    }

    #[test]
    fn test_apply_quits_from_root() {
        let mut app = test_app();
        assert!(apply(&mut app, Action::Back));
    }
}
