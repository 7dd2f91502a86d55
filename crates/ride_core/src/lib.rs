pub mod lifecycle;
pub mod preferences;
pub mod recommend;
pub mod ride;
pub mod scoring;
pub mod spatial;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use lifecycle::{LifecycleConfig, RideActions, RidePhase};
pub use preferences::{DriverPreferences, DriverProfile, UserPreferences};
pub use recommend::{
    rank_candidates, recommend_rides, CandidateSource, RecommendationConfig, RideCandidate,
};
pub use ride::{parse_timestamp, Location, Ride, RideStatus};
pub use scoring::{
    calculate_match_score, match_quality_label, MatchScore, ScoreBreakdown, ScoreWeights,
};
