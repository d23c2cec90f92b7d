//! # Type Styles
//!
//! One table owning every per-type dispatch: marker color, accent color,
//! icon and direction template. Screens and the route synthesiser read from
//! here instead of matching on `PlaceType` themselves.

use std::fmt;

use serde::{Serialize, Serializer};

use super::types::PlaceType;

/// 24-bit color. Serializes as `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Which closing lines `directions()` appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionTemplate {
    Atm,
    Gate,
    Restroom,
    Lounge,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaceStyle {
    /// Map marker fill.
    pub marker: Rgb,
    /// Badge/heading color on the route screens.
    pub accent: Rgb,
    pub icon: &'static str,
    /// Single-cell symbol used where the icon name can't be drawn.
    pub glyph: char,
    pub template: DirectionTemplate,
}

const PRIMARY: Rgb = Rgb(0x00, 0x5B, 0x8F);
const TEAL: Rgb = Rgb(0x0F, 0xA3, 0xB1);
const GREEN: Rgb = Rgb(0x3B, 0xA9, 0x9C);
const SKY: Rgb = Rgb(0x66, 0xBC, 0xE8);

const SLATE: Rgb = Rgb(0x51, 0x84, 0x94);
const SAGE: Rgb = Rgb(0x4D, 0x8E, 0x7B);
const NAVY: Rgb = Rgb(0x2A, 0x65, 0x8A);
const EMERALD: Rgb = Rgb(0x04, 0xA5, 0x1B);

const DEFAULT_STYLE: PlaceStyle = PlaceStyle {
    marker: PRIMARY,
    accent: NAVY,
    icon: "location",
    glyph: '●',
    template: DirectionTemplate::Default,
};

static STYLES: &[(PlaceType, PlaceStyle)] = &[
    (PlaceType::Atm, PlaceStyle { marker: TEAL, accent: SLATE, icon: "cash", glyph: '$', template: DirectionTemplate::Atm }),
    (PlaceType::Cashier, PlaceStyle { marker: GREEN, accent: SAGE, icon: "card", glyph: '¤', template: DirectionTemplate::Default }),
    (PlaceType::HelpDesk, PlaceStyle { marker: PRIMARY, accent: NAVY, icon: "information-circle", glyph: 'i', template: DirectionTemplate::Default }),
    (PlaceType::Gate, PlaceStyle { marker: SKY, accent: SLATE, icon: "airplane", glyph: '✈', template: DirectionTemplate::Gate }),
    (PlaceType::Lounge, PlaceStyle { marker: GREEN, accent: SAGE, icon: "bed", glyph: 'L', template: DirectionTemplate::Lounge }),
    (PlaceType::Restroom, PlaceStyle { marker: TEAL, accent: NAVY, icon: "man", glyph: 'W', template: DirectionTemplate::Restroom }),
    (PlaceType::Shop, PlaceStyle { marker: SKY, accent: SLATE, icon: "cart", glyph: 'S', template: DirectionTemplate::Default }),
    (PlaceType::Restaurant, PlaceStyle { marker: GREEN, accent: SAGE, icon: "restaurant", glyph: 'R', template: DirectionTemplate::Default }),
    (PlaceType::Medical, PlaceStyle { marker: GREEN, accent: EMERALD, icon: "medical", glyph: '+', template: DirectionTemplate::Default }),
];

/// Style row for a type, falling back to the default row.
pub fn style_for(place_type: PlaceType) -> &'static PlaceStyle {
    STYLES
        .iter()
        .find(|(t, _)| *t == place_type)
        .map(|(_, style)| style)
        .unwrap_or(&DEFAULT_STYLE)
}
