//! # Filter & Sort
//!
//! The query pipeline shared by the dashboard, search and category screens.
//!
//! ```text
//! catalog ──▶ filter_places(query, category) ──▶ [sort_by_distance] ──▶ screen
//! ```
//!
//! Filtering keeps catalog order. Sorting returns a fresh `Vec` so the caller
//! still holds the unsorted list when the user toggles sorting off.

use super::catalog::PLACES;
use super::types::{Category, Place, PlaceId};

/// A read-only view over a place catalog.
#[derive(Debug, Clone, Copy)]
pub struct Directory<'a> {
    places: &'a [Place],
}

impl Directory<'static> {
    /// The built-in BIA catalog.
    pub const fn builtin() -> Self {
        Self { places: PLACES }
    }
}

impl Default for Directory<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Directory<'a> {
    pub const fn new(places: &'a [Place]) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &'a [Place] {
        self.places
    }

    pub fn find_place(&self, id: PlaceId) -> Option<&'a Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Places matching `query` (case-insensitive substring of name, type
    /// label or description) within `category`. `None` and the "All"
    /// sentinel both mean no type restriction.
    pub fn filter_places(&self, query: &str, category: Option<&Category>) -> Vec<&'a Place> {
        let needle = query.to_lowercase();
        self.places
            .iter()
            .filter(|p| matches_query(p, &needle) && category.is_none_or(|c| c.matches(p)))
            .collect()
    }
}

/// `needle` must already be lowercase.
fn matches_query(place: &Place, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    place.name.to_lowercase().contains(needle)
        || place.place_type.label().to_lowercase().contains(needle)
        || place.description.to_lowercase().contains(needle)
}

/// Stable ascending sort by distance, missing distances first (read as 0).
/// The input slice is left as it was.
pub fn sort_by_distance<'a>(places: &[&'a Place]) -> Vec<&'a Place> {
    let mut sorted = places.to_vec();
    sorted.sort_by_key(|p| p.distance_or_zero());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::catalog::{all_category, find_category};
    use crate::directory::types::PlaceType;
    use crate::test_support::{ids, sample_places};

    #[test]
    fn test_empty_query_no_category_returns_everything() {
        let dir = Directory::builtin();
        assert_eq!(dir.filter_places("", None).len(), PLACES.len());
        assert_eq!(dir.filter_places("", Some(all_category())).len(), PLACES.len());
    }

    #[test]
    fn test_atm_query_finds_three_atms() {
        let dir = Directory::builtin();
        let found = dir.filter_places("atm", Some(all_category()));
        assert_eq!(ids(&found), vec![1, 2, 3]);
        assert!(found.iter().all(|p| p.place_type == PlaceType::Atm));
    }

    #[test]
    fn test_query_matches_description() {
        let dir = Directory::builtin();
        let found = dir.filter_places("WIFI", None);
        assert_eq!(ids(&found), vec![10]);
    }

    #[test]
    fn test_query_matches_type_label() {
        let dir = Directory::builtin();
        let found = dir.filter_places("help desk", None);
        assert_eq!(ids(&found), vec![4]);
    }

    #[test]
    fn test_category_restricts_by_type() {
        let dir = Directory::builtin();
        let gates = find_category("gate").unwrap();
        assert_eq!(ids(&dir.filter_places("", Some(gates))), vec![7, 8]);
        assert_eq!(ids(&dir.filter_places("domestic", Some(gates))), vec![8]);
        assert!(dir.filter_places("atm", Some(gates)).is_empty());
    }

    #[test]
    fn test_filter_is_sound_and_complete_on_custom_catalog() {
        let places = sample_places();
        let dir = Directory::new(&places);
        let lounges = find_category("lounge").unwrap();
        for query in ["", "a", "LOUNGE", "gate", "zzz", "shower"] {
            for category in [None, Some(all_category()), Some(lounges)] {
                let found = dir.filter_places(query, category);
                let needle = query.to_lowercase();
                let expected: Vec<PlaceId> = places
                    .iter()
                    .filter(|p| {
                        (p.name.to_lowercase().contains(&needle)
                            || p.place_type.label().to_lowercase().contains(&needle)
                            || p.description.to_lowercase().contains(&needle))
                            && category.is_none_or(|c| c.matches(p))
                    })
                    .map(|p| p.id)
                    .collect();
                assert_eq!(ids(&found), expected, "query={query:?}");
            }
        }
    }

    #[test]
    fn test_sort_by_distance_is_ascending_and_stable() {
        let places = sample_places();
        let refs: Vec<&Place> = places.iter().collect();
        let sorted = sort_by_distance(&refs);
        // 102 and 104 share a distance and keep catalog order; 105 has none
        assert_eq!(ids(&sorted), vec![105, 103, 102, 104, 101]);
    }

    #[test]
    fn test_sort_by_distance_does_not_mutate_input() {
        let dir = Directory::builtin();
        let base = dir.filter_places("", None);
        let before = ids(&base);
        let _ = sort_by_distance(&base);
        assert_eq!(ids(&base), before);
    }

    #[test]
    fn test_sort_by_distance_is_idempotent() {
        let dir = Directory::builtin();
        let once = sort_by_distance(&dir.filter_places("", None));
        let twice = sort_by_distance(&once);
        assert_eq!(ids(&once), ids(&twice));
    }
}
