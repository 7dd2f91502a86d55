//! Recommendation ranking over candidate rides.
//!
//! [`rank_candidates`] is the pure, reusable unit: it scores a fetched
//! candidate set and returns the qualifying scores in rank order.
//! [`recommend_rides`] is the thin orchestration over a [`CandidateSource`]
//! implementation, which is where all I/O lives.

use chrono::{DateTime, Utc};

use crate::lifecycle::LifecycleConfig;
use crate::preferences::{DriverProfile, UserPreferences};
use crate::ride::Ride;
use crate::scoring::{calculate_match_score, MatchScore, ScoreWeights};

/// A ride paired with its driver's profile, as fetched for scoring.
#[derive(Debug, Clone)]
pub struct RideCandidate {
    pub ride: Ride,
    pub driver: DriverProfile,
}

/// Tuning for recommendation ranking.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationConfig {
    /// Minimum match percentage a candidate must reach to be recommended.
    pub min_match_percentage: u8,
    /// Maximum number of recommendations returned.
    pub max_results: usize,
    pub lifecycle: LifecycleConfig,
    pub weights: ScoreWeights,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_match_percentage: 50,
            max_results: 10,
            lifecycle: LifecycleConfig::default(),
            weights: ScoreWeights::default(),
        }
    }
}

/// Provider of rider preferences and candidate rides. Implementations wrap
/// the backend; everything returned is scored locally.
pub trait CandidateSource: Send + Sync {
    /// Fetch the rider's saved preferences.
    fn user_preferences(
        &self,
        user_id: &str,
    ) -> Result<UserPreferences, Box<dyn std::error::Error>>;

    /// Fetch open candidate rides for a corridor, optionally departing at
    /// or after the given instant.
    fn open_rides(
        &self,
        from: &str,
        to: &str,
        departure_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<RideCandidate>, Box<dyn std::error::Error>>;
}

/// Score a candidate set and return qualifying matches in rank order.
///
/// Candidates are dropped before scoring when they have no free seats, are
/// not searchable at `now`, or their driver's rating falls below the
/// rider's minimum. Survivors are scored, filtered by
/// `min_match_percentage`, sorted descending by raw total score (not
/// percentage), and truncated to `max_results`.
pub fn rank_candidates(
    candidates: &[RideCandidate],
    prefs: &UserPreferences,
    now: DateTime<Utc>,
    config: &RecommendationConfig,
) -> Vec<MatchScore> {
    let mut scored: Vec<MatchScore> = candidates
        .iter()
        .filter(|candidate| candidate.ride.available_seats > 0)
        .filter(|candidate| candidate.ride.is_searchable(&config.lifecycle, now))
        .filter(|candidate| meets_minimum_rating(candidate, prefs))
        .map(|candidate| {
            calculate_match_score(&candidate.ride, prefs, &candidate.driver, &config.weights)
        })
        .filter(|score| score.match_percentage >= config.min_match_percentage)
        .collect();

    scored.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(config.max_results);
    scored
}

fn meets_minimum_rating(candidate: &RideCandidate, prefs: &UserPreferences) -> bool {
    match (prefs.min_driver_rating, candidate.driver.rating) {
        (Some(min), Some(rating)) => rating >= min,
        _ => true,
    }
}

/// Fetch a rider's preferences and candidate rides through `source`, then
/// rank them. The scoring itself never touches I/O.
pub fn recommend_rides(
    source: &dyn CandidateSource,
    user_id: &str,
    from: &str,
    to: &str,
    departure_after: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    config: &RecommendationConfig,
) -> Result<Vec<MatchScore>, Box<dyn std::error::Error>> {
    let prefs = source.user_preferences(user_id)?;
    let candidates = source.open_rides(from, to, departure_after)?;
    Ok(rank_candidates(&candidates, &prefs, now, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_candidate, test_now};

    #[test]
    fn candidates_without_seats_are_dropped() {
        let mut candidate = test_candidate();
        candidate.ride.available_seats = 0;
        let ranked = rank_candidates(
            &[candidate],
            &UserPreferences::default(),
            test_now(),
            &RecommendationConfig::default(),
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn low_rated_drivers_are_filtered_before_scoring() {
        let mut candidate = test_candidate();
        candidate.driver.rating = Some(3.0);
        let prefs = UserPreferences {
            min_driver_rating: Some(4.0),
            ..Default::default()
        };
        let ranked = rank_candidates(
            &[candidate.clone()],
            &prefs,
            test_now(),
            &RecommendationConfig::default(),
        );
        assert!(ranked.is_empty());

        // An unrated driver is not filtered by the minimum.
        candidate.driver.rating = None;
        let ranked = rank_candidates(
            &[candidate],
            &prefs,
            test_now(),
            &RecommendationConfig::default(),
        );
        assert_eq!(ranked.len(), 1);
    }
}
