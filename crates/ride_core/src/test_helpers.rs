//! Test fixtures shared by unit tests, integration tests, and benches.

use chrono::{DateTime, TimeZone, Utc};

use crate::preferences::{DriverPreferences, DriverProfile, UserPreferences};
use crate::recommend::RideCandidate;
use crate::ride::{Location, Ride, RideStatus};

/// Reference "now" used across test files: one hour before [`test_departure`].
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
}

/// Fixed departure instant used across test files.
pub fn test_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

/// A baseline active ride: Berlin → Potsdam, 2 of 3 seats free,
/// £5.00 per seat over a stored 25 km route (£0.20/km).
pub fn test_ride() -> Ride {
    Ride {
        id: "ride-1".to_string(),
        driver_id: "driver-1".to_string(),
        origin: Location {
            name: "Berlin Hbf".to_string(),
            lat: 52.5251,
            lng: 13.3694,
        },
        destination: Location {
            name: "Potsdam Hbf".to_string(),
            lat: 52.3917,
            lng: 13.0669,
        },
        departure_time: test_departure(),
        available_until: None,
        total_seats: 3,
        available_seats: 2,
        status: RideStatus::Active,
        price_per_seat: Some(5.0),
        distance_km: Some(25.0),
        recurring: false,
        recurrence_pattern: None,
        notes: None,
    }
}

/// A baseline driver: rated 4.5, trust 90, verified, with AC and WiFi.
pub fn test_driver_profile() -> DriverProfile {
    DriverProfile {
        rating: Some(4.5),
        trust_score: Some(90.0),
        verified: true,
        preferences: Some(DriverPreferences {
            smoking_allowed: false,
            pets_allowed: false,
            plays_music: false,
            has_air_conditioning: true,
            has_phone_charging: false,
            has_wifi: true,
            wheelchair_accessible: false,
            has_child_seat: false,
        }),
    }
}

/// Baseline rider preferences: £0.40/km ceiling, AC and WiFi required,
/// tri-states left at their defaults.
pub fn test_user_preferences() -> UserPreferences {
    UserPreferences {
        max_price_per_km: Some(0.4),
        needs_air_conditioning: true,
        needs_wifi: true,
        ..Default::default()
    }
}

/// The baseline ride paired with the baseline driver.
pub fn test_candidate() -> RideCandidate {
    RideCandidate {
        ride: test_ride(),
        driver: test_driver_profile(),
    }
}
