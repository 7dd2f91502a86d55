//! Ride records as fetched from the backing store.
//!
//! Lifecycle phase and permitted actions are derived from these records by
//! [`crate::lifecycle`]; compatibility scores by [`crate::scoring`]. Nothing
//! here is persisted by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spatial::distance_km_between;

/// A named point on the route (free-text label plus coordinates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Stored ride status. The temporal phase (upcoming/grace/expired) is
/// derived, never stored; `Expired` appears here only when the backend has
/// materialized it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RideStatus {
    Active,
    InProgress,
    Completed,
    Cancelled,
    Expired,
}

impl RideStatus {
    /// Cancelled and completed rides accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, RideStatus::Cancelled | RideStatus::Completed)
    }

    /// Statuses for which live tracking / completion make sense.
    pub fn is_running(self) -> bool {
        matches!(self, RideStatus::Active | RideStatus::InProgress)
    }
}

/// A published ride offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: String,
    pub driver_id: String,
    pub origin: Location,
    pub destination: Location,
    /// Nominal departure instant.
    pub departure_time: DateTime<Utc>,
    /// Optional booking deadline overriding `departure_time` for phase
    /// derivation.
    pub available_until: Option<DateTime<Utc>>,
    pub total_seats: u8,
    pub available_seats: u8,
    pub status: RideStatus,
    /// Asking price per seat, if the driver set one.
    pub price_per_seat: Option<f64>,
    /// Route distance in km as stored by the backend, if known.
    pub distance_km: Option<f64>,
    pub recurring: bool,
    pub recurrence_pattern: Option<String>,
    pub notes: Option<String>,
}

impl Ride {
    /// Route distance in km: the stored value when present, otherwise the
    /// great-circle distance between origin and destination.
    pub fn route_distance_km(&self) -> f64 {
        self.distance_km
            .unwrap_or_else(|| distance_km_between(&self.origin, &self.destination))
    }

    /// Price per km derived from the per-seat price and route distance.
    /// `None` when no price is set or the route distance is non-positive.
    pub fn price_per_km(&self) -> Option<f64> {
        let price = self.price_per_seat?;
        let distance = self.route_distance_km();
        if distance > 0.0 {
            Some(price / distance)
        } else {
            None
        }
    }
}

/// Parse an RFC 3339 timestamp into UTC, rejecting malformed input at the
/// boundary instead of letting it reach phase comparisons.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}
