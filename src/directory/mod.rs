//! # Place Directory & Route Synthesis
//!
//! The static BIA catalog and every pure function the screens call on it.
//! No I/O, no logging, no global mutable state.
//!
//! ```text
//!   id ──────────▶ find_place ──────────▶ Option<&Place>
//!   query, cat ──▶ filter_places ───────▶ Vec<&Place> ──▶ sort_by_distance
//!   &Place ──────▶ route_polyline ──────▶ [Coordinates; 4]
//!   &Place ──────▶ directions ──────────▶ Vec<String>
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `Place`, `PlaceType`, `Category`, `Coordinates`
//! - [`catalog`]: the built-in places, categories and reference point
//! - [`filter`]: `Directory` view, query filter, distance sort
//! - [`route`]: polyline, directions, walk time
//! - [`style`]: the per-type color/icon/template table

pub mod catalog;
pub mod filter;
pub mod route;
pub mod style;
pub mod types;

pub use catalog::{
    CATEGORIES, PLACES, REFERENCE_POINT, all_category, category_for_type, find_category, find_place,
};
pub use filter::{Directory, sort_by_distance};
pub use route::{directions, route_polyline, walk_minutes};
pub use style::{DirectionTemplate, PlaceStyle, Rgb, style_for};
pub use types::{Category, Coordinates, Place, PlaceId, PlaceType};
