//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::{CliOverrides, WayfinderConfig, resolve_with};
use crate::core::state::App;
use crate::directory::{Coordinates, Place, PlaceId, PlaceType};

/// Five places with a distance tie (102/104) and one missing distance (105).
pub fn sample_places() -> Vec<Place> {
    vec![
        Place {
            id: 101,
            name: "Gate 40",
            place_type: PlaceType::Gate,
            floor: "Pier B",
            description: "Long-haul departures.",
            distance: Some(300),
            coordinates: Coordinates::new(7.1830, 79.8870),
        },
        Place {
            id: 102,
            name: "Orchid Lounge",
            place_type: PlaceType::Lounge,
            floor: "Mezzanine",
            description: "Quiet lounge with shower rooms.",
            distance: Some(50),
            coordinates: Coordinates::new(7.1812, 79.8848),
        },
        Place {
            id: 103,
            name: "Tea Bar",
            place_type: PlaceType::Restaurant,
            floor: "Arrival Level",
            description: "Ceylon tea and snacks near the lounge corridor.",
            distance: Some(10),
            coordinates: Coordinates::new(7.1806, 79.8840),
        },
        Place {
            id: 104,
            name: "Transit Lounge",
            place_type: PlaceType::Lounge,
            floor: "Departure Level",
            description: "Open seating for transfer passengers.",
            distance: Some(50),
            coordinates: Coordinates::new(7.1813, 79.8849),
        },
        Place {
            id: 105,
            name: "Prayer Room",
            place_type: PlaceType::Unknown,
            floor: "Main Lobby",
            description: "Multi-faith room.",
            distance: None,
            coordinates: Coordinates::new(7.1807, 79.8842),
        },
    ]
}

/// A throwaway place of the given type, for template tests.
pub fn place_of_type(place_type: PlaceType, distance: Option<u32>) -> Place {
    Place {
        id: 900,
        name: "Test Place",
        place_type,
        floor: "Test Level",
        description: "Only used in tests.",
        distance,
        coordinates: Coordinates::new(7.1820, 79.8850),
    }
}

pub fn ids(places: &[&Place]) -> Vec<PlaceId> {
    places.iter().map(|p| p.id).collect()
}

/// Creates a test App from default config, starting on the welcome screen.
pub fn test_app() -> App {
    App::from_config(&resolve_with(&WayfinderConfig::default(), &CliOverrides::default(), |_| None))
}
