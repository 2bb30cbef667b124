//! Keyword classification of free-text destinations.

use crate::budget_optimizer::budget_optimizer_constants::{
    BEACH_KEYWORDS, METRO_KEYWORDS, MOUNTAIN_KEYWORDS,
};
use crate::budget_optimizer::Terrain;

/// Keyword groups in evaluation order. A destination matching both a beach
/// and a mountain keyword is a beach.
const TERRAIN_KEYWORDS: &[(Terrain, &[&str])] = &[
    (Terrain::Beach, BEACH_KEYWORDS),
    (Terrain::Mountain, MOUNTAIN_KEYWORDS),
];

fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack_lower.contains(k))
}

pub fn classify_terrain(destination: &str) -> Terrain {
    let destination_lower = destination.to_lowercase();
    TERRAIN_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&destination_lower, keywords))
        .map(|(terrain, _)| *terrain)
        .unwrap_or(Terrain::Generic)
}

/// False when the destination names a major metro, where a flights budget
/// line makes no sense.
pub fn has_flights(destination: &str) -> bool {
    !contains_any(&destination.to_lowercase(), METRO_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beach_destinations() {
        assert_eq!(classify_terrain("Goa"), Terrain::Beach);
        assert_eq!(classify_terrain("KERALA backwaters"), Terrain::Beach);
        assert_eq!(classify_terrain("Havelock, Andaman"), Terrain::Beach);
    }

    #[test]
    fn test_mountain_destinations() {
        assert_eq!(classify_terrain("Shimla"), Terrain::Mountain);
        assert_eq!(classify_terrain("manali"), Terrain::Mountain);
        assert_eq!(classify_terrain("Srinagar, Kashmir"), Terrain::Mountain);
    }

    #[test]
    fn test_unmatched_destination_is_generic() {
        assert_eq!(classify_terrain("Jaipur"), Terrain::Generic);
        assert_eq!(classify_terrain(""), Terrain::Generic);
    }

    #[test]
    fn test_beach_wins_over_mountain() {
        assert_eq!(classify_terrain("Manali and Goa"), Terrain::Beach);
        assert_eq!(classify_terrain("Kashmir-Kerala circuit"), Terrain::Beach);
    }

    #[test]
    fn test_metro_destinations_have_no_flights() {
        for city in [
            "Mumbai", "delhi", "BANGALORE", "Pune", "Chennai", "Kolkata", "Hyderabad",
        ] {
            assert!(!has_flights(city), "{} should not have flights", city);
        }
        assert!(!has_flights("Mumbai weekend"));
        assert!(!has_flights("New Delhi and Agra"));
    }

    #[test]
    fn test_other_destinations_have_flights() {
        assert!(has_flights("Goa"));
        assert!(has_flights("Shimla"));
        assert!(has_flights("Reykjavik"));
        assert!(has_flights(""));
    }
}
