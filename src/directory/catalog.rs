//! # Catalog
//!
//! The built-in places and categories for BIA. Both are process-wide
//! constants; nothing creates, updates or deletes entries at runtime.

use super::style::Rgb;
use super::types::{Category, Coordinates, Place, PlaceId, PlaceType};

/// Airport center, standing in for "current location" in every route.
pub const REFERENCE_POINT: Coordinates = Coordinates::new(7.1807, 79.8841);

pub static PLACES: &[Place] = &[
    Place {
        id: 1,
        name: "Commercial Bank ATM",
        place_type: PlaceType::Atm,
        floor: "Arrival Level",
        description: "Located near baggage belt 3. Available 24/7 with multi-currency support.",
        distance: Some(120),
        coordinates: Coordinates::new(7.1810, 79.8845),
    },
    Place {
        id: 2,
        name: "People's Bank ATM",
        place_type: PlaceType::Atm,
        floor: "Departure Level",
        description: "Near entrance gate 02. Accepts international cards.",
        distance: Some(85),
        coordinates: Coordinates::new(7.1815, 79.8850),
    },
    Place {
        id: 3,
        name: "Sampath Bank ATM",
        place_type: PlaceType::Atm,
        floor: "Main Lobby",
        description: "Central location near information desk. Quick access.",
        distance: Some(45),
        coordinates: Coordinates::new(7.1808, 79.8843),
    },
    Place {
        id: 4,
        name: "Information Counter",
        place_type: PlaceType::HelpDesk,
        floor: "Main Lobby",
        description: "Central help desk with multilingual staff available 24/7.",
        distance: Some(30),
        coordinates: Coordinates::new(7.1807, 79.8841),
    },
    Place {
        id: 5,
        name: "SriLankan Airlines Service Desk",
        place_type: PlaceType::Cashier,
        floor: "Departure Level",
        description: "Ticketing and payment counter. Flight rebooking available.",
        distance: Some(150),
        coordinates: Coordinates::new(7.1820, 79.8855),
    },
    Place {
        id: 6,
        name: "Currency Exchange - Thomas Cook",
        place_type: PlaceType::Cashier,
        floor: "Arrival Level",
        description: "Best rates for USD, EUR, GBP. Commission-free exchange.",
        distance: Some(95),
        coordinates: Coordinates::new(7.1812, 79.8847),
    },
    Place {
        id: 7,
        name: "Gate 01",
        place_type: PlaceType::Gate,
        floor: "Departure Level",
        description: "International departures. Boarding starts 45 minutes before flight.",
        distance: Some(320),
        coordinates: Coordinates::new(7.1825, 79.8860),
    },
    Place {
        id: 8,
        name: "Gate 12",
        place_type: PlaceType::Gate,
        floor: "Departure Level",
        description: "Domestic and regional flights. Check-in counter nearby.",
        distance: Some(280),
        coordinates: Coordinates::new(7.1823, 79.8858),
    },
    Place {
        id: 9,
        name: "SriLankan Airlines Lounge",
        place_type: PlaceType::Lounge,
        floor: "Departure Level",
        description: "Premium lounge with complimentary food and beverages.",
        distance: Some(200),
        coordinates: Coordinates::new(7.1818, 79.8852),
    },
    Place {
        id: 10,
        name: "Plaza Premium Lounge",
        place_type: PlaceType::Lounge,
        floor: "Departure Level",
        description: "Pay-per-use lounge with shower facilities and WiFi.",
        distance: Some(215),
        coordinates: Coordinates::new(7.1819, 79.8853),
    },
    Place {
        id: 11,
        name: "Men's Restroom - Terminal A",
        place_type: PlaceType::Restroom,
        floor: "Departure Level",
        description: "Clean facilities with accessible stalls.",
        distance: Some(60),
        coordinates: Coordinates::new(7.1809, 79.8844),
    },
    Place {
        id: 12,
        name: "Women's Restroom - Terminal A",
        place_type: PlaceType::Restroom,
        floor: "Departure Level",
        description: "Clean facilities with baby changing station.",
        distance: Some(65),
        coordinates: Coordinates::new(7.1809, 79.8845),
    },
    Place {
        id: 13,
        name: "Duty Free Shop - Main",
        place_type: PlaceType::Shop,
        floor: "Departure Level",
        description: "Perfumes, chocolates, electronics, and local souvenirs.",
        distance: Some(180),
        coordinates: Coordinates::new(7.1816, 79.8851),
    },
    Place {
        id: 14,
        name: "Food Court",
        place_type: PlaceType::Restaurant,
        floor: "Departure Level",
        description: "Multiple dining options including local and international cuisine.",
        distance: Some(140),
        coordinates: Coordinates::new(7.1814, 79.8849),
    },
    Place {
        id: 15,
        name: "Pharmacy",
        place_type: PlaceType::Medical,
        floor: "Main Lobby",
        description: "Over-the-counter medications and first aid supplies.",
        distance: Some(75),
        coordinates: Coordinates::new(7.1811, 79.8846),
    },
];

pub static CATEGORIES: &[Category] = &[
    Category { id: "all", name: "All", icon: "apps", color: Rgb(0x00, 0x5B, 0x8F), place_type: None },
    Category { id: "atm", name: "ATM", icon: "cash", color: Rgb(0x0F, 0xA3, 0xB1), place_type: Some(PlaceType::Atm) },
    Category { id: "cashier", name: "Cashier", icon: "card", color: Rgb(0x3B, 0xA9, 0x9C), place_type: Some(PlaceType::Cashier) },
    Category { id: "help-desk", name: "Help Desk", icon: "information-circle", color: Rgb(0x00, 0x5B, 0x8F), place_type: Some(PlaceType::HelpDesk) },
    Category { id: "gate", name: "Gates", icon: "airplane", color: Rgb(0x66, 0xBC, 0xE8), place_type: Some(PlaceType::Gate) },
    Category { id: "lounge", name: "Lounges", icon: "bed", color: Rgb(0x3B, 0xA9, 0x9C), place_type: Some(PlaceType::Lounge) },
    Category { id: "restroom", name: "Restrooms", icon: "man", color: Rgb(0x0F, 0xA3, 0xB1), place_type: Some(PlaceType::Restroom) },
    Category { id: "shop", name: "Shops", icon: "cart", color: Rgb(0x66, 0xBC, 0xE8), place_type: Some(PlaceType::Shop) },
    Category { id: "restaurant", name: "Restaurants", icon: "restaurant", color: Rgb(0x3B, 0xA9, 0x9C), place_type: Some(PlaceType::Restaurant) },
    Category { id: "medical", name: "Medical", icon: "medical", color: Rgb(0x3B, 0xA9, 0x9C), place_type: Some(PlaceType::Medical) },
];

/// The "All" sentinel category.
pub fn all_category() -> &'static Category {
    &CATEGORIES[0]
}

/// Look up a place in the built-in catalog.
pub fn find_place(id: PlaceId) -> Option<&'static Place> {
    PLACES.iter().find(|p| p.id == id)
}

/// Look up a category by slug (`"gate"`) or display name (`"Gates"`).
pub fn find_category(key: &str) -> Option<&'static Category> {
    let key = key.trim();
    CATEGORIES
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
}

/// The category that holds exactly this type, if any.
pub fn category_for_type(place_type: PlaceType) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.place_type == Some(place_type))
}
