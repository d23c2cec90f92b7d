//! # Route Synthesis
//!
//! There is no terminal geometry and no pathfinding. A "route" is the
//! straight segment from the reference point to the destination, bent into
//! four points so the map line reads as a path, and the directions are
//! templates chosen by place type.

use super::catalog::REFERENCE_POINT;
use super::style::{DirectionTemplate, style_for};
use super::types::{Coordinates, Place};

/// Fractions along the straight segment for the two interior points.
const MIDPOINTS: [f64; 2] = [0.3, 0.7];

/// Average walking pace, meters per minute.
const WALK_METERS_PER_MINUTE: f64 = 60.0;

/// Reference point, t=0.3, t=0.7, destination.
pub fn route_polyline(destination: &Place) -> [Coordinates; 4] {
    let start = REFERENCE_POINT;
    let end = destination.coordinates;
    [
        start,
        start.lerp(&end, MIDPOINTS[0]),
        start.lerp(&end, MIDPOINTS[1]),
        end,
    ]
}

/// Step-by-step instructions to `destination`: two fixed opening lines and
/// three lines picked by the place type's template.
pub fn directions(destination: &Place) -> Vec<String> {
    let name = destination.name;
    let floor = destination.floor;
    let distance = f64::from(destination.distance_or_zero());

    let mut steps = vec![
        "Start from your current location".to_string(),
        format!("Head towards {floor}"),
    ];

    match style_for(destination.place_type).template {
        DirectionTemplate::Atm => steps.extend([
            "Look for the banking services signage".to_string(),
            format!("Turn right at the {floor} corridor"),
            format!("{name} will be on your left"),
        ]),
        DirectionTemplate::Gate => steps.extend([
            "Follow the departure gates signage".to_string(),
            "Walk straight through the security checkpoint area".to_string(),
            format!("{name} will be ahead on your right"),
        ]),
        DirectionTemplate::Restroom => steps.extend([
            "Look for the restroom symbols overhead".to_string(),
            format!("Walk {}m straight", round_meters(distance / 2.0)),
            "Facilities will be on your right".to_string(),
        ]),
        DirectionTemplate::Lounge => steps.extend([
            "Take the escalator to Departure Level".to_string(),
            "Turn left after security".to_string(),
            format!(
                "Walk {}m and look for lounge entrance on right",
                round_meters(distance * 0.7)
            ),
        ]),
        DirectionTemplate::Default => steps.extend([
            format!("Walk straight for {}m", round_meters(distance * 0.6)),
            "Turn left at Terminal A".to_string(),
            format!("{name} will be on your right"),
        ]),
    }

    steps
}

/// Whole minutes on foot, rounded up.
pub fn walk_minutes(place: &Place) -> u32 {
    (f64::from(place.distance_or_zero()) / WALK_METERS_PER_MINUTE).ceil() as u32
}

/// Nearest whole meter, halves rounded up. Inputs are never negative.
fn round_meters(meters: f64) -> u64 {
    meters.round() as u64
}
