//! Configurable category maxima for match scoring.

/// Maximum points each scoring category can contribute.
///
/// A category's maximum only enters the percentage denominator when the
/// category has applicable data for the ride being scored.
///
/// # Default Weights
///
/// - Price: 20
/// - Driver rating: 20
/// - Trust score: 15
/// - Verification: 10
/// - Preference overlap: 35
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Maximum points for price per km versus the rider's ceiling.
    pub price_weight: f64,
    /// Maximum points for the driver's review rating.
    pub rating_weight: f64,
    /// Maximum points for the driver's trust score.
    pub trust_weight: f64,
    /// Points for a verified driver profile.
    pub verification_weight: f64,
    /// Cap on the summed preference/amenity sub-checks.
    pub preference_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            price_weight: 20.0,
            rating_weight: 20.0,
            trust_weight: 15.0,
            verification_weight: 10.0,
            preference_weight: 35.0,
        }
    }
}

impl ScoreWeights {
    /// Create custom score weights.
    pub fn new(
        price_weight: f64,
        rating_weight: f64,
        trust_weight: f64,
        verification_weight: f64,
        preference_weight: f64,
    ) -> Self {
        Self {
            price_weight,
            rating_weight,
            trust_weight,
            verification_weight,
            preference_weight,
        }
    }
}
