//! # Actions
//!
//! Everything that can happen in Wayfinder becomes an `Action`.
//! User picks a place? That's `Action::Open(Screen::PlaceDetail(id))`.
//! Log file read finished? That's `Action::LogsLoaded(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must do.
//! No side effects here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Screen};
use crate::directory::{CATEGORIES, Category, directions};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a screen onto the navigation stack.
    Open(Screen),
    /// Pop the current screen; quits from the root.
    Back,
    SetQuery(String),
    /// Open the search screen pre-filtered to a category.
    BrowseCategory(&'static Category),
    /// Move the category chip selection by `n` (wraps).
    CycleCategory(isize),
    ToggleSort,
    NextStep,
    PreviousStep,
    ClearLogs,
    ReloadLogs,
    LogsLoaded(String),
    Quit,
}

/// I/O the caller has to perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    LoadLogs,
    ClearLogs,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Open(screen) => open(app, screen),
        Action::Back => {
            if app.history.len() <= 1 {
                info!("Back from root screen, quitting");
                return Effect::Quit;
            }
            app.history.pop();
            app.status_message = app.current_screen().title().to_string();
            Effect::None
        }
        Action::SetQuery(query) => {
            app.query = query;
            Effect::None
        }
        Action::BrowseCategory(category) => {
            info!("Browsing category {}", category.name);
            app.category = category;
            app.query.clear();
            open(app, Screen::Search)
        }
        Action::CycleCategory(n) => {
            let len = CATEGORIES.len() as isize;
            let current = CATEGORIES
                .iter()
                .position(|c| c.id == app.category.id)
                .unwrap_or(0) as isize;
            app.category = &CATEGORIES[(current + n).rem_euclid(len) as usize];
            app.status_message = format!("Category: {}", app.category.name);
            Effect::None
        }
        Action::ToggleSort => {
            app.sort_by_distance = !app.sort_by_distance;
            app.status_message = if app.sort_by_distance {
                "Sorted by distance".to_string()
            } else {
                "Catalog order".to_string()
            };
            Effect::None
        }
        Action::NextStep => {
            let steps = app.current_place().map(|p| directions(p).len()).unwrap_or(0);
            if app.active_step + 1 < steps {
                app.active_step += 1;
            }
            Effect::None
        }
        Action::PreviousStep => {
            app.active_step = app.active_step.saturating_sub(1);
            Effect::None
        }
        Action::ClearLogs => Effect::ClearLogs,
        Action::ReloadLogs => Effect::LoadLogs,
        Action::LogsLoaded(text) => {
            app.logs = text;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn open(app: &mut App, screen: Screen) -> Effect {
    // Re-opening the current screen is a no-op rather than a stack entry
    if app.current_screen() == screen {
        return Effect::None;
    }
    info!("Navigating to {:?}", screen);
    app.history.push(screen);
    app.status_message = screen.title().to_string();

    if let Some(id) = screen.place_id() {
        match app.directory.find_place(id) {
            Some(place) => app.status_message = place.name.to_string(),
            None => warn!("Place {} not found", id),
        }
    }

    match screen {
        Screen::RouteNavigation(_) => {
            app.active_step = 0;
            Effect::None
        }
        Screen::Logs => Effect::LoadLogs,
        _ => Effect::None,
    }
}
