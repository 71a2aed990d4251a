//! Property-match scoring for lead recommendations.
//!
//! Scores each candidate property against a preference object as a weighted
//! sum of four component fits, keeps everything at or above the threshold,
//! and returns the top matches sorted by score descending.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Component weights. Must sum to 1.0.
pub const BUDGET_WEIGHT: f64 = 0.40;
pub const BEDROOM_WEIGHT: f64 = 0.25;
pub const LOCATION_WEIGHT: f64 = 0.20;
pub const AMENITY_WEIGHT: f64 = 0.15;

/// Matches scoring below this are discarded.
pub const MIN_MATCH_SCORE: f64 = 50.0;
/// At most this many matches are returned.
pub const MAX_MATCHES: usize = 10;

/// The matching-relevant slice of a property listing.
#[derive(Debug, Clone)]
pub struct CandidateProperty {
    pub id: DbId,
    pub price_cents: i64,
    pub bedrooms: i32,
    pub location: String,
    pub amenities: Vec<String>,
}

/// Buyer preferences to match against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPreferences {
    pub budget_min_cents: Option<i64>,
    pub budget_max_cents: Option<i64>,
    pub bedrooms_min: Option<i32>,
    pub bedrooms_max: Option<i32>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// A scored match, ready for the API response.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyMatch {
    pub property_id: DbId,
    /// Weighted total, 0-100.
    pub score: f64,
    pub budget_fit: f64,
    pub bedroom_fit: f64,
    pub location_fit: f64,
    pub amenity_fit: f64,
}

/// Score all candidates, drop weak matches, return the top ten descending.
pub fn match_properties(
    candidates: &[CandidateProperty],
    prefs: &MatchPreferences,
) -> Vec<PropertyMatch> {
    let mut matches: Vec<PropertyMatch> = candidates
        .iter()
        .map(|c| score_candidate(c, prefs))
        .filter(|m| m.score >= MIN_MATCH_SCORE)
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(MAX_MATCHES);
    matches
}

/// Score one candidate against the preferences.
pub fn score_candidate(candidate: &CandidateProperty, prefs: &MatchPreferences) -> PropertyMatch {
    let budget_fit = budget_fit(candidate.price_cents, prefs);
    let bedroom_fit = bedroom_fit(candidate.bedrooms, prefs);
    let location_fit = location_fit(&candidate.location, &prefs.preferred_locations);
    let amenity_fit = amenity_fit(&candidate.amenities, &prefs.amenities);

    let score = BUDGET_WEIGHT * budget_fit
        + BEDROOM_WEIGHT * bedroom_fit
        + LOCATION_WEIGHT * location_fit
        + AMENITY_WEIGHT * amenity_fit;

    PropertyMatch {
        property_id: candidate.id,
        score: (score * 10.0).round() / 10.0,
        budget_fit,
        bedroom_fit,
        location_fit,
        amenity_fit,
    }
}

/// Budget fit: 100 inside the stated range, 60 within 10% over the maximum,
/// otherwise 0. No stated budget means no constraint.
fn budget_fit(price_cents: i64, prefs: &MatchPreferences) -> f64 {
    let Some(max) = prefs.budget_max_cents else {
        return 100.0;
    };
    let min = prefs.budget_min_cents.unwrap_or(0);

    if price_cents >= min && price_cents <= max {
        100.0
    } else if price_cents > max && price_cents as f64 <= max as f64 * 1.1 {
        60.0
    } else {
        0.0
    }
}

/// Bedroom fit: 100 inside the range, 50 off by one, otherwise 0.
fn bedroom_fit(bedrooms: i32, prefs: &MatchPreferences) -> f64 {
    let (min, max) = match (prefs.bedrooms_min, prefs.bedrooms_max) {
        (None, None) => return 100.0,
        (min, max) => (min.unwrap_or(0), max.unwrap_or(i32::MAX)),
    };

    if bedrooms >= min && bedrooms <= max {
        100.0
    } else if bedrooms == min.saturating_sub(1) || bedrooms == max.saturating_add(1) {
        50.0
    } else {
        0.0
    }
}

/// Location fit: 100 if the property's location matches any preferred
/// location (case-insensitive substring either way), otherwise 0.
fn location_fit(location: &str, preferred: &[String]) -> f64 {
    if preferred.is_empty() {
        return 100.0;
    }
    let loc = location.to_lowercase();
    let hit = preferred.iter().any(|p| {
        let p = p.to_lowercase();
        loc == p || loc.contains(&p) || p.contains(&loc)
    });
    if hit {
        100.0
    } else {
        0.0
    }
}

/// Amenity fit: overlap ratio between wanted and offered amenities, 0-100.
fn amenity_fit(offered: &[String], wanted: &[String]) -> f64 {
    if wanted.is_empty() {
        return 100.0;
    }
    let offered_lower: Vec<String> = offered.iter().map(|a| a.to_lowercase()).collect();
    let hits = wanted
        .iter()
        .filter(|w| offered_lower.contains(&w.to_lowercase()))
        .count();
    hits as f64 / wanted.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: DbId, price_cents: i64, bedrooms: i32, location: &str) -> CandidateProperty {
        CandidateProperty {
            id,
            price_cents,
            bedrooms,
            location: location.to_string(),
            amenities: vec!["pool".into(), "gym".into()],
        }
    }

    fn prefs() -> MatchPreferences {
        MatchPreferences {
            budget_min_cents: Some(10_000_000),
            budget_max_cents: Some(30_000_000),
            bedrooms_min: Some(2),
            bedrooms_max: Some(3),
            preferred_locations: vec!["Marina District".into()],
            amenities: vec!["pool".into()],
        }
    }

    #[test]
    fn perfect_match_scores_100() {
        let m = score_candidate(&candidate(1, 20_000_000, 2, "Marina District"), &prefs());
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn weak_matches_are_discarded() {
        // Wrong budget, wrong bedrooms, wrong location: only the amenity
        // component survives, well below the 50-point threshold.
        let weak = candidate(2, 90_000_000, 6, "Hillcrest");
        let results = match_properties(&[weak], &prefs());
        assert!(results.is_empty());
    }

    #[test]
    fn returns_at_most_ten_sorted_descending() {
        // Twelve viable candidates with progressively worse budget fit.
        let mut candidates = Vec::new();
        for i in 0..12 {
            let price = 20_000_000 + i * 900_000; // some slide past the max
            candidates.push(candidate(i, price, 2, "Marina District"));
        }
        let results = match_properties(&candidates, &prefs());
        assert!(results.len() <= MAX_MATCHES);
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "results must be sorted descending");
        }
    }

    #[test]
    fn slightly_over_budget_gets_partial_credit() {
        // 10% over the 30M max.
        let m = score_candidate(&candidate(3, 32_000_000, 2, "Marina District"), &prefs());
        assert_eq!(m.budget_fit, 60.0);
        assert!(m.score >= MIN_MATCH_SCORE);
    }

    #[test]
    fn under_min_budget_gets_no_credit() {
        // Far below the 10M minimum; the bargain must not outrank real fits.
        let m = score_candidate(&candidate(7, 1_000, 2, "Marina District"), &prefs());
        assert_eq!(m.budget_fit, 0.0);
    }

    #[test]
    fn off_by_one_bedrooms_gets_half_credit() {
        let m = score_candidate(&candidate(4, 20_000_000, 4, "Marina District"), &prefs());
        assert_eq!(m.bedroom_fit, 50.0);
    }

    #[test]
    fn empty_preferences_match_everything() {
        let m = score_candidate(&candidate(5, 999, 9, "Nowhere"), &MatchPreferences::default());
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn amenity_overlap_is_a_ratio() {
        let mut p = prefs();
        p.amenities = vec!["pool".into(), "gym".into(), "sauna".into(), "parking".into()];
        let m = score_candidate(&candidate(6, 20_000_000, 2, "Marina District"), &p);
        assert_eq!(m.amenity_fit, 50.0); // pool + gym out of four wanted
    }
}
