//! # Application State
//!
//! Core business state for Wayfinder. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── directory: Directory          // read-only place catalog
//! ├── history: Vec<Screen>          // navigation stack, never empty
//! ├── query: String                 // search text (dashboard + search)
//! ├── category: &Category           // search category chip
//! ├── sort_by_distance: bool        // search sort toggle
//! ├── active_step: usize            // highlighted direction while navigating
//! ├── logs: String                  // last log file snapshot
//! ├── log_file: PathBuf             // where the logger writes
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::PathBuf;

use crate::StartScreen;
use crate::core::config::ResolvedConfig;
use crate::directory::{Category, Directory, Place, PlaceId, all_category, sort_by_distance};

/// Every screen the app can show. Place screens carry the id they were
/// opened with, which may not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Dashboard,
    Search,
    PlaceDetail(PlaceId),
    RoutePreview(PlaceId),
    RouteNavigation(PlaceId),
    Logs,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Dashboard => "Where to?",
            Screen::Search => "Search & Navigate",
            Screen::PlaceDetail(_) => "Map Preview",
            Screen::RoutePreview(_) => "Route Preview",
            Screen::RouteNavigation(_) => "Navigation",
            Screen::Logs => "System Logs",
        }
    }

    pub fn place_id(&self) -> Option<PlaceId> {
        match self {
            Screen::PlaceDetail(id) | Screen::RoutePreview(id) | Screen::RouteNavigation(id) => {
                Some(*id)
            }
            _ => None,
        }
    }
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Welcome => Screen::Welcome,
            StartScreen::Dashboard => Screen::Dashboard,
            StartScreen::Search => Screen::Search,
        }
    }
}

pub struct App {
    pub directory: Directory<'static>,
    pub history: Vec<Screen>,
    pub query: String,
    pub category: &'static Category,
    pub sort_by_distance: bool,
    pub active_step: usize,
    pub logs: String,
    pub log_file: PathBuf,
    pub status_message: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            directory: Directory::builtin(),
            history: vec![Screen::from(config.start_screen)],
            query: String::new(),
            category: all_category(),
            sort_by_distance: config.sort_by_distance,
            active_step: 0,
            logs: String::new(),
            log_file: config.log_file.clone(),
            status_message: String::from("Welcome to BIA Airport Navigator"),
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.history.last().copied().unwrap_or(Screen::Welcome)
    }

    /// The place the current screen is about, if it resolves.
    pub fn current_place(&self) -> Option<&'static Place> {
        self.current_screen()
            .place_id()
            .and_then(|id| self.directory.find_place(id))
    }

    /// Dashboard results: nothing until the user types something.
    pub fn dashboard_places(&self) -> Vec<&'static Place> {
        if self.query.is_empty() {
            return Vec::new();
        }
        self.directory.filter_places(&self.query, None)
    }

    /// Search results: query + category, sorted when the toggle is on.
    pub fn search_places(&self) -> Vec<&'static Place> {
        let base = self.directory.filter_places(&self.query, Some(self.category));
        if self.sort_by_distance {
            sort_by_distance(&base)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::find_category;
    use crate::test_support::{ids, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.current_screen(), Screen::Welcome);
        assert!(app.category.is_all());
        assert!(app.query.is_empty());
        assert!(!app.sort_by_distance);
        assert!(app.current_place().is_none());
    }

    #[test]
    fn test_dashboard_empty_until_query() {
        let mut app = test_app();
        assert!(app.dashboard_places().is_empty());
        app.query = "lounge".to_string();
        assert_eq!(ids(&app.dashboard_places()), vec![9, 10]);
    }

    #[test]
    fn test_search_places_all_by_default() {
        let app = test_app();
        assert_eq!(app.search_places().len(), 15);
    }

    #[test]
    fn test_search_sort_toggle_keeps_base_order() {
        let mut app = test_app();
        app.category = find_category("atm").unwrap();
        assert_eq!(ids(&app.search_places()), vec![1, 2, 3]);
        app.sort_by_distance = true;
        assert_eq!(ids(&app.search_places()), vec![3, 2, 1]);
        app.sort_by_distance = false;
        assert_eq!(ids(&app.search_places()), vec![1, 2, 3]);
    }

    #[test]
    fn test_current_place_resolves_or_not() {
        let mut app = test_app();
        app.history.push(Screen::PlaceDetail(4));
        assert_eq!(app.current_place().map(|p| p.name), Some("Information Counter"));
        app.history.push(Screen::RouteNavigation(999));
        assert!(app.current_place().is_none());
    }
}
