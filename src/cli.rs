//! # Command-line Reports
//!
//! Output of the `places`, `route` and `categories` subcommands. Every
//! report is built as a `String` so `main` only prints it and maps errors
//! to an exit code.
//!
//! ```text
//! wayfinder places --category gate      →  places_report()
//! wayfinder route 4 --json              →  route_report()
//! wayfinder categories                  →  categories_report()
//! ```

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::directory::{
    CATEGORIES, Category, Coordinates, Directory, Place, PlaceId, PlaceStyle, PlaceType,
    category_for_type, directions, find_category, route_polyline, sort_by_distance, style_for,
    walk_minutes,
};

const WRAP_WIDTH: usize = 76;
const INDENT: &str = "     ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

#[derive(Debug)]
pub enum CliError {
    PlaceNotFound(PlaceId),
    UnknownCategory(String),
    UnknownType(String),
    Json(serde_json::Error),
}

impl CliError {
    /// Process exit status: 1 for a missing place, 2 for bad arguments.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::PlaceNotFound(_) | CliError::Json(_) => 1,
            CliError::UnknownCategory(_) | CliError::UnknownType(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::PlaceNotFound(_) => write!(f, "Place not found"),
            CliError::UnknownCategory(key) => write!(f, "Unknown category: {key}"),
            CliError::UnknownType(label) => write!(f, "Unknown place type: {label}"),
            CliError::Json(e) => write!(f, "JSON encoding failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// Arguments of `places`.
#[derive(Debug, Default)]
pub struct PlacesQuery<'a> {
    pub query: &'a str,
    /// Category slug or display name.
    pub category: Option<&'a str>,
    /// Place type label, e.g. "Help Desk". Ignored when `category` is set.
    pub place_type: Option<&'a str>,
    pub sort: bool,
}

#[derive(Serialize)]
struct RouteReport<'a> {
    place: &'a Place,
    style: &'a PlaceStyle,
    walk_minutes: u32,
    polyline: [Coordinates; 4],
    directions: Vec<String>,
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn resolve_filter(query: &PlacesQuery) -> Result<Option<&'static Category>, CliError> {
    if let Some(key) = query.category {
        return find_category(key)
            .map(Some)
            .ok_or_else(|| CliError::UnknownCategory(key.to_string()));
    }
    match query.place_type {
        None => Ok(None),
        Some(label) => match PlaceType::from_label(label) {
            PlaceType::Unknown => Err(CliError::UnknownType(label.to_string())),
            place_type => category_for_type(place_type)
                .map(Some)
                .ok_or_else(|| CliError::UnknownType(label.to_string())),
        },
    }
}

fn write_place(out: &mut String, place: &Place) {
    let distance = place
        .distance
        .map(|d| format!("{d}m"))
        .unwrap_or_else(|| "--".to_string());
    let _ = writeln!(
        out,
        "{:>3}  {}  [{} · {} · {}]",
        place.id, place.name, place.place_type, place.floor, distance
    );
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(INDENT)
        .subsequent_indent(INDENT);
    let _ = writeln!(out, "{}", textwrap::fill(place.description, options));
}

pub fn places_report(
    directory: &Directory,
    query: &PlacesQuery,
    format: OutputFormat,
) -> Result<String, CliError> {
    let category = resolve_filter(query)?;
    let mut places = directory.filter_places(query.query, category);
    if query.sort {
        places = sort_by_distance(&places);
    }

    if format == OutputFormat::Json {
        return json(&places);
    }
    let mut out = String::new();
    let _ = match places.len() {
        0 => writeln!(out, "No places found"),
        1 => writeln!(out, "1 place found"),
        n => writeln!(out, "{n} places found"),
    };
    for place in places {
        write_place(&mut out, place);
    }
    Ok(out)
}

pub fn route_report(
    directory: &Directory,
    id: PlaceId,
    format: OutputFormat,
) -> Result<String, CliError> {
    let place = directory
        .find_place(id)
        .ok_or(CliError::PlaceNotFound(id))?;
    let report = RouteReport {
        place,
        style: style_for(place.place_type),
        walk_minutes: walk_minutes(place),
        polyline: route_polyline(place),
        directions: directions(place),
    };
    if format == OutputFormat::Json {
        return json(&report);
    }

    let mut out = String::new();
    write_place(&mut out, place);
    let style = report.style;
    let _ = writeln!(out, "{INDENT}Marker: {} {} ({})", style.glyph, style.icon, style.marker);
    let _ = writeln!(out, "{INDENT}~{} min walk", report.walk_minutes);

    let _ = writeln!(out, "\nRoute");
    for (i, point) in report.polyline.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, point);
    }
    let _ = writeln!(out, "\nDirections");
    for (i, step) in report.directions.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, step);
    }
    Ok(out)
}

pub fn categories_report(directory: &Directory, format: OutputFormat) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return json(CATEGORIES);
    }
    let mut out = String::new();
    for category in CATEGORIES {
        let count = directory.filter_places("", Some(category)).len();
        let _ = writeln!(
            out,
            "{:<11} {:<12} {:<19} {} {:>3}",
            category.id, category.name, category.icon, category.color, count
        );
    }
    Ok(out)
}
