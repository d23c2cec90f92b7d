//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top status bar
//! - `LandingPage`: welcome screen
//! - `CategoryGrid`: dashboard category cards
//! - `MapView`: braille map with markers and route line
//! - `PlaceCard`: one place's details
//! - `DirectionsList`: numbered steps
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events, or render with
//! borrowed state that lives in `TuiState`:
//! - `SearchBox`: query input
//! - `PlaceList` + `Selection`: result list with a cursor
//! - `LogViewer` + `ScrollViewState`: scrollable log file
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! MapView { markers: &places, highlight: None, route: None, title: "Map" }.render(frame, area);
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod category_grid;
pub mod directions;
pub mod landing;
pub mod log_viewer;
pub mod map;
pub mod place_card;
pub mod place_list;
pub mod search_box;
pub mod selection;

pub use category_grid::CategoryGrid;
pub use directions::DirectionsList;
pub use landing::LandingPage;
pub use log_viewer::LogViewer;
pub use map::MapView;
pub use place_card::PlaceCard;
pub use place_list::PlaceList;
pub use search_box::{SearchBox, SearchEvent};
pub use selection::Selection;
