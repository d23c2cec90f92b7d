//! # Directory Types
//!
//! Plain data records for the place catalog. Everything here is immutable
//! once constructed; the catalog itself is a `static` slice of these.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::style::Rgb;

/// Stable identity key of a place.
pub type PlaceId = u32;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Point at fraction `t` along the straight segment from `self` to `to`.
    pub fn lerp(&self, to: &Coordinates, t: f64) -> Coordinates {
        Coordinates {
            latitude: self.latitude + (to.latitude - self.latitude) * t,
            longitude: self.longitude + (to.longitude - self.longitude) * t,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// Kind of point of interest.
///
/// `Unknown` absorbs any label outside the fixed set, so style and direction
/// dispatch always has a branch to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceType {
    #[serde(rename = "ATM")]
    Atm,
    Cashier,
    #[serde(rename = "Help Desk")]
    HelpDesk,
    Gate,
    Lounge,
    Restroom,
    Shop,
    Restaurant,
    Medical,
    #[serde(other)]
    Unknown,
}

impl PlaceType {
    pub const ALL: [PlaceType; 9] = [
        PlaceType::Atm,
        PlaceType::Cashier,
        PlaceType::HelpDesk,
        PlaceType::Gate,
        PlaceType::Lounge,
        PlaceType::Restroom,
        PlaceType::Shop,
        PlaceType::Restaurant,
        PlaceType::Medical,
    ];

    /// Display label, also the text the search filter matches against.
    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Atm => "ATM",
            PlaceType::Cashier => "Cashier",
            PlaceType::HelpDesk => "Help Desk",
            PlaceType::Gate => "Gate",
            PlaceType::Lounge => "Lounge",
            PlaceType::Restroom => "Restroom",
            PlaceType::Shop => "Shop",
            PlaceType::Restaurant => "Restaurant",
            PlaceType::Medical => "Medical",
            PlaceType::Unknown => "Other",
        }
    }

    /// Parse a display label. Unrecognised labels map to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(PlaceType::Unknown)
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single point of interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub floor: &'static str,
    pub description: &'static str,
    /// Meters from the reference point. Display and sort only.
    pub distance: Option<u32>,
    pub coordinates: Coordinates,
}

impl Place {
    /// Distance in meters with a missing value read as zero.
    pub fn distance_or_zero(&self) -> u32 {
        self.distance.unwrap_or(0)
    }
}

/// A named grouping for the filter UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: Rgb,
    /// `None` marks the "All" sentinel.
    #[serde(rename = "type")]
    pub place_type: Option<PlaceType>,
}

impl Category {
    pub fn is_all(&self) -> bool {
        self.place_type.is_none()
    }

    /// True when the category admits this place.
    pub fn matches(&self, place: &Place) -> bool {
        match self.place_type {
            None => true,
            Some(t) => t == place.place_type,
        }
    }
}
