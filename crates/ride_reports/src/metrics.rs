//! Per-rider matching-quality metrics.

use chrono::{DateTime, Utc};
use ride_core::preferences::UserPreferences;
use ride_core::recommend::{rank_candidates, RecommendationConfig, RideCandidate};
use serde::{Deserialize, Serialize};

/// How well the marketplace serves one rider's search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderMatchReport {
    pub user_id: String,
    /// Candidates fetched for the rider before any filtering.
    pub candidate_count: usize,
    /// Candidates that survived the seat/searchability/rating pre-filters.
    pub searchable_count: usize,
    /// Searchable candidates at or above the recommendation threshold.
    pub qualifying_count: usize,
    /// Qualifying candidates actually surfaced (after truncation).
    pub recommended_count: usize,
    /// Best match percentage among searchable candidates; 0 when none.
    pub best_match_percentage: u8,
    /// Mean match percentage among searchable candidates; 0 when none.
    pub mean_match_percentage: f64,
    /// Ride with the highest raw score, if any candidate was scorable.
    pub best_ride_id: Option<String>,
}

/// Score one rider's candidate set and aggregate it into a report.
///
/// Scoring reuses [`rank_candidates`] with the threshold and truncation
/// lifted, so the report sees every searchable candidate; the qualifying
/// and recommended counts are then derived from the caller's `config`.
pub fn build_report(
    user_id: &str,
    candidates: &[RideCandidate],
    prefs: &UserPreferences,
    now: DateTime<Utc>,
    config: &RecommendationConfig,
) -> RiderMatchReport {
    let unfiltered = RecommendationConfig {
        min_match_percentage: 0,
        max_results: usize::MAX,
        ..*config
    };
    let scored = rank_candidates(candidates, prefs, now, &unfiltered);

    let qualifying_count = scored
        .iter()
        .filter(|score| score.match_percentage >= config.min_match_percentage)
        .count();
    let best_match_percentage = scored
        .iter()
        .map(|score| score.match_percentage)
        .max()
        .unwrap_or(0);
    let mean_match_percentage = if scored.is_empty() {
        0.0
    } else {
        scored
            .iter()
            .map(|score| score.match_percentage as f64)
            .sum::<f64>()
            / scored.len() as f64
    };

    RiderMatchReport {
        user_id: user_id.to_string(),
        candidate_count: candidates.len(),
        searchable_count: scored.len(),
        qualifying_count,
        recommended_count: qualifying_count.min(config.max_results),
        best_match_percentage,
        mean_match_percentage,
        // Scores come back sorted by raw total, so the first is the best.
        best_ride_id: scored.first().map(|score| score.ride_id.clone()),
    }
}
