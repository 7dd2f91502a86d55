use chrono::{DateTime, Duration, Utc};
use ride_core::preferences::{DriverProfile, UserPreferences};
use ride_core::recommend::{
    rank_candidates, recommend_rides, CandidateSource, RecommendationConfig, RideCandidate,
};
use ride_core::ride::RideStatus;
use ride_core::test_helpers::{test_candidate, test_now, test_user_preferences};

fn candidate_with_id(id: &str) -> RideCandidate {
    let mut candidate = test_candidate();
    candidate.ride.id = id.to_string();
    candidate
}

/// A candidate that scores below any sensible threshold: overpriced,
/// poorly rated, low trust, unverified, no declared preferences.
fn poor_candidate(id: &str) -> RideCandidate {
    let mut candidate = candidate_with_id(id);
    candidate.ride.price_per_seat = Some(50.0); // £2.00/km, over any ceiling
    candidate.driver = DriverProfile {
        rating: Some(1.0),
        trust_score: Some(10.0),
        verified: false,
        preferences: None,
    };
    candidate
}

#[test]
fn low_scoring_candidates_fall_below_the_threshold() {
    let candidates = vec![candidate_with_id("good"), poor_candidate("poor")];
    let ranked = rank_candidates(
        &candidates,
        &test_user_preferences(),
        test_now(),
        &RecommendationConfig::default(),
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].ride_id, "good");
    assert!(ranked[0].match_percentage >= 50);
}

#[test]
fn ranking_orders_by_raw_score_not_percentage() {
    // "wide": all categories apply, 70.5 of 100 (71%).
    let mut wide = candidate_with_id("wide");
    wide.ride.price_per_seat = Some(2.5); // £0.10/km against the 0.2 ceiling

    // "narrow": only rating/trust/verification apply, 45 of 45 (100%).
    let mut narrow = candidate_with_id("narrow");
    narrow.ride.price_per_seat = None;
    narrow.driver = DriverProfile {
        rating: Some(5.0),
        trust_score: Some(100.0),
        verified: true,
        preferences: None,
    };

    let prefs = UserPreferences {
        max_price_per_km: Some(0.2),
        needs_air_conditioning: true,
        needs_wifi: true,
        ..Default::default()
    };
    let ranked = rank_candidates(
        &[narrow, wide],
        &prefs,
        test_now(),
        &RecommendationConfig::default(),
    );

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].ride_id, "wide");
    assert!(ranked[0].match_percentage < ranked[1].match_percentage);
    assert!(ranked[0].total_score > ranked[1].total_score);
}

#[test]
fn results_are_truncated_to_max_results() {
    let candidates: Vec<RideCandidate> = (0..15)
        .map(|i| candidate_with_id(&format!("ride-{i}")))
        .collect();
    let ranked = rank_candidates(
        &candidates,
        &test_user_preferences(),
        test_now(),
        &RecommendationConfig::default(),
    );
    assert_eq!(ranked.len(), 10);

    let config = RecommendationConfig {
        max_results: 3,
        ..Default::default()
    };
    let ranked = rank_candidates(&candidates, &test_user_preferences(), test_now(), &config);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn unsearchable_rides_are_never_recommended() {
    let mut cancelled = candidate_with_id("cancelled");
    cancelled.ride.status = RideStatus::Cancelled;

    let mut long_gone = candidate_with_id("long-gone");
    long_gone.ride.departure_time = test_now() - Duration::hours(3);

    let mut in_grace = candidate_with_id("in-grace");
    in_grace.ride.departure_time = test_now() - Duration::minutes(30);

    let ranked = rank_candidates(
        &[cancelled, long_gone, in_grace],
        &test_user_preferences(),
        test_now(),
        &RecommendationConfig::default(),
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].ride_id, "in-grace");
}

struct InMemorySource {
    prefs: UserPreferences,
    candidates: Vec<RideCandidate>,
}

impl CandidateSource for InMemorySource {
    fn user_preferences(
        &self,
        _user_id: &str,
    ) -> Result<UserPreferences, Box<dyn std::error::Error>> {
        Ok(self.prefs.clone())
    }

    fn open_rides(
        &self,
        _from: &str,
        _to: &str,
        departure_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<RideCandidate>, Box<dyn std::error::Error>> {
        Ok(self
            .candidates
            .iter()
            .filter(|c| departure_after.map_or(true, |after| c.ride.departure_time >= after))
            .cloned()
            .collect())
    }
}

struct FailingSource;

impl CandidateSource for FailingSource {
    fn user_preferences(
        &self,
        _user_id: &str,
    ) -> Result<UserPreferences, Box<dyn std::error::Error>> {
        Err("preferences unavailable".into())
    }

    fn open_rides(
        &self,
        _from: &str,
        _to: &str,
        _departure_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<RideCandidate>, Box<dyn std::error::Error>> {
        Ok(vec![])
    }
}

#[test]
fn recommend_rides_fetches_and_ranks_through_the_source() {
    let source = InMemorySource {
        prefs: test_user_preferences(),
        candidates: vec![candidate_with_id("a"), poor_candidate("b")],
    };
    let ranked = recommend_rides(
        &source,
        "user-1",
        "Berlin",
        "Potsdam",
        None,
        test_now(),
        &RecommendationConfig::default(),
    )
    .expect("in-memory source never fails");

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].ride_id, "a");
}

#[test]
fn recommend_rides_propagates_source_errors() {
    let result = recommend_rides(
        &FailingSource,
        "user-1",
        "Berlin",
        "Potsdam",
        None,
        test_now(),
        &RecommendationConfig::default(),
    );
    assert!(result.is_err());
}
