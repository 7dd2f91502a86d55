//! Rider-side filters and driver-side declared attributes.
//!
//! These are read-only inputs to the match scorer, fetched from the
//! backend by the surrounding application and passed in as plain data.

use serde::{Deserialize, Serialize};

/// Rider's smoking preference. `Any` earns partial credit against either
/// vehicle policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingPreference {
    NonSmoking,
    SmokingOk,
    #[default]
    Any,
}

/// Rider's pet preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetPreference {
    NoPets,
    PetsOk,
    #[default]
    Any,
}

/// Rider's in-ride atmosphere preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicPreference {
    Music,
    Quiet,
    #[default]
    Any,
}

/// A rider's saved search preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Maximum acceptable price per km; rides above this ceiling score 0
    /// on price.
    pub max_price_per_km: Option<f64>,
    /// Minimum acceptable driver rating (0–5); rides below are filtered
    /// out before scoring.
    pub min_driver_rating: Option<f64>,
    pub smoking: SmokingPreference,
    pub pets: PetPreference,
    pub music: MusicPreference,
    pub needs_air_conditioning: bool,
    pub needs_phone_charging: bool,
    pub needs_wifi: bool,
    pub needs_wheelchair_access: bool,
    pub needs_child_seat: bool,
}

/// A driver's declared vehicle policies and amenities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DriverPreferences {
    pub smoking_allowed: bool,
    pub pets_allowed: bool,
    pub plays_music: bool,
    pub has_air_conditioning: bool,
    pub has_phone_charging: bool,
    pub has_wifi: bool,
    pub wheelchair_accessible: bool,
    pub has_child_seat: bool,
}

/// Driver reputation data consumed by the scorer. Rating and trust score
/// are maintained externally; absent values simply skip their scoring
/// category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Average review rating, 0–5.
    pub rating: Option<f64>,
    /// Externally maintained reputation value, 0–100.
    pub trust_score: Option<f64>,
    pub verified: bool,
    pub preferences: Option<DriverPreferences>,
}
