//! Weighted compatibility scoring between a rider's preferences and a
//! candidate ride.
//!
//! Each category is computed independently into a fixed-shape breakdown and
//! summed. A category with no applicable data contributes to neither the
//! score nor the maximum, so the percentage reflects what is actually known
//! about the ride.

use serde::Serialize;

use crate::preferences::{
    DriverPreferences, DriverProfile, MusicPreference, PetPreference, SmokingPreference,
    UserPreferences,
};
use crate::ride::Ride;
use crate::scoring::weights::ScoreWeights;

/// Points for a fully matched preference sub-check.
const PREFERENCE_MATCH_POINTS: f64 = 5.0;

/// Partial credit when the rider's tri-state preference is `Any`.
const PREFERENCE_PARTIAL_POINTS: f64 = 3.0;

/// Rating threshold above which the driver is called out as highly rated.
const HIGHLY_RATED_THRESHOLD: f64 = 4.5;

/// Trust score threshold above which the driver is called out as trusted.
const HIGH_TRUST_THRESHOLD: f64 = 80.0;

/// One category's contribution: points earned and the maximum that was
/// applicable. Both zero when the category had no data to score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryScore {
    pub points: f64,
    pub max: f64,
}

impl CategoryScore {
    fn skipped() -> Self {
        Self::default()
    }
}

/// Per-category contributions, one named field per category.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScoreBreakdown {
    pub price: CategoryScore,
    pub rating: CategoryScore,
    pub trust: CategoryScore,
    pub verification: CategoryScore,
    pub preferences: CategoryScore,
}

impl ScoreBreakdown {
    /// Total points earned across all categories.
    pub fn total(&self) -> f64 {
        self.price.points
            + self.rating.points
            + self.trust.points
            + self.verification.points
            + self.preferences.points
    }

    /// Maximum points across the categories that applied.
    pub fn max(&self) -> f64 {
        self.price.max
            + self.rating.max
            + self.trust.max
            + self.verification.max
            + self.preferences.max
    }
}

/// Compatibility score for one (ride, rider) pair.
#[derive(Debug, Clone, Serialize)]
pub struct MatchScore {
    pub ride_id: String,
    pub total_score: f64,
    pub max_score: f64,
    /// `round(total_score / max_score × 100)`; 0 when no category applied.
    pub match_percentage: u8,
    pub breakdown: ScoreBreakdown,
    /// Display-only explanations, in category order. No effect on the
    /// numeric score.
    pub reasons: Vec<String>,
}

/// Score a single candidate ride against a rider's preferences.
pub fn calculate_match_score(
    ride: &Ride,
    user: &UserPreferences,
    driver: &DriverProfile,
    weights: &ScoreWeights,
) -> MatchScore {
    let mut reasons = Vec::new();

    let breakdown = ScoreBreakdown {
        price: score_price(ride, user, weights, &mut reasons),
        rating: score_rating(driver, weights, &mut reasons),
        trust: score_trust(driver, weights, &mut reasons),
        verification: score_verification(driver, weights, &mut reasons),
        preferences: score_preferences(user, driver.preferences.as_ref(), weights, &mut reasons),
    };

    let total_score = breakdown.total();
    let max_score = breakdown.max();
    let match_percentage = if max_score > 0.0 {
        (total_score / max_score * 100.0).round() as u8
    } else {
        0
    };

    MatchScore {
        ride_id: ride.id.clone(),
        total_score,
        max_score,
        match_percentage,
        breakdown,
        reasons,
    }
}

/// Price category: linear from full weight at zero cost down to nothing at
/// the rider's ceiling. Skipped entirely when the ride has no computable
/// price per km; flat half weight when the rider set no ceiling. A negative
/// price is treated as zero so the contribution stays within the weight.
fn score_price(
    ride: &Ride,
    user: &UserPreferences,
    weights: &ScoreWeights,
    reasons: &mut Vec<String>,
) -> CategoryScore {
    let Some(price_per_km) = ride.price_per_km() else {
        return CategoryScore::skipped();
    };
    let price_per_km = price_per_km.max(0.0);

    let points = match user.max_price_per_km {
        Some(ceiling) if ceiling > 0.0 => {
            if price_per_km <= ceiling {
                let points = weights.price_weight * (1.0 - price_per_km / ceiling);
                if price_per_km <= ceiling * 0.5 {
                    reasons.push(format!("Great price (£{price_per_km:.2}/km)"));
                }
                points
            } else {
                0.0
            }
        }
        _ => weights.price_weight * 0.5,
    };

    CategoryScore {
        points,
        max: weights.price_weight,
    }
}

fn score_rating(
    driver: &DriverProfile,
    weights: &ScoreWeights,
    reasons: &mut Vec<String>,
) -> CategoryScore {
    let Some(rating) = driver.rating else {
        return CategoryScore::skipped();
    };
    let rating = rating.clamp(0.0, 5.0);
    if rating >= HIGHLY_RATED_THRESHOLD {
        reasons.push(format!("Highly rated driver ({rating:.1}⭐)"));
    }
    CategoryScore {
        points: rating / 5.0 * weights.rating_weight,
        max: weights.rating_weight,
    }
}

fn score_trust(
    driver: &DriverProfile,
    weights: &ScoreWeights,
    reasons: &mut Vec<String>,
) -> CategoryScore {
    let Some(trust) = driver.trust_score else {
        return CategoryScore::skipped();
    };
    let trust = trust.clamp(0.0, 100.0);
    if trust >= HIGH_TRUST_THRESHOLD {
        reasons.push("High trust score".to_string());
    }
    CategoryScore {
        points: trust / 100.0 * weights.trust_weight,
        max: weights.trust_weight,
    }
}

fn score_verification(
    driver: &DriverProfile,
    weights: &ScoreWeights,
    reasons: &mut Vec<String>,
) -> CategoryScore {
    let points = if driver.verified {
        reasons.push("Verified driver".to_string());
        weights.verification_weight
    } else {
        0.0
    };
    CategoryScore {
        points,
        max: weights.verification_weight,
    }
}

/// Preference overlap: eight independent sub-checks worth
/// [`PREFERENCE_MATCH_POINTS`] each, summed and capped at the category
/// weight. Skipped when the driver declared no preferences.
fn score_preferences(
    user: &UserPreferences,
    driver: Option<&DriverPreferences>,
    weights: &ScoreWeights,
    reasons: &mut Vec<String>,
) -> CategoryScore {
    let Some(driver) = driver else {
        return CategoryScore::skipped();
    };

    let mut points = 0.0;

    points += match user.smoking {
        SmokingPreference::NonSmoking if !driver.smoking_allowed => {
            reasons.push("Non-smoking vehicle".to_string());
            PREFERENCE_MATCH_POINTS
        }
        SmokingPreference::SmokingOk if driver.smoking_allowed => PREFERENCE_MATCH_POINTS,
        SmokingPreference::Any => PREFERENCE_PARTIAL_POINTS,
        _ => 0.0,
    };

    points += match user.pets {
        PetPreference::PetsOk if driver.pets_allowed => {
            reasons.push("Pet-friendly driver".to_string());
            PREFERENCE_MATCH_POINTS
        }
        PetPreference::NoPets if !driver.pets_allowed => PREFERENCE_MATCH_POINTS,
        PetPreference::Any => PREFERENCE_PARTIAL_POINTS,
        _ => 0.0,
    };

    points += match user.music {
        MusicPreference::Quiet if !driver.plays_music => {
            reasons.push("Quiet ride".to_string());
            PREFERENCE_MATCH_POINTS
        }
        MusicPreference::Music if driver.plays_music => PREFERENCE_MATCH_POINTS,
        MusicPreference::Any => PREFERENCE_PARTIAL_POINTS,
        _ => 0.0,
    };

    let amenities = [
        (
            user.needs_air_conditioning,
            driver.has_air_conditioning,
            "AC available",
        ),
        (
            user.needs_phone_charging,
            driver.has_phone_charging,
            "Phone charging available",
        ),
        (user.needs_wifi, driver.has_wifi, "WiFi available"),
        (
            user.needs_wheelchair_access,
            driver.wheelchair_accessible,
            "Wheelchair accessible",
        ),
        (
            user.needs_child_seat,
            driver.has_child_seat,
            "Child seat available",
        ),
    ];
    for (needed, available, reason) in amenities {
        if needed && available {
            reasons.push(reason.to_string());
            points += PREFERENCE_MATCH_POINTS;
        }
    }

    CategoryScore {
        points: points.min(weights.preference_weight),
        max: weights.preference_weight,
    }
}
