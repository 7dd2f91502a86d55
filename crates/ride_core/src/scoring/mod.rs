pub mod quality;
pub mod score;
pub mod weights;

pub use quality::{match_quality_label, MatchQuality};
pub use score::{calculate_match_score, CategoryScore, MatchScore, ScoreBreakdown};
pub use weights::ScoreWeights;
