//! Ride lifecycle derivation: temporal phase and permitted actions.
//!
//! Everything here is a pure function of its arguments. The reference
//! instant is always passed in as `now` rather than read from a hidden
//! clock, so callers (and tests) control time explicitly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ride::{Ride, RideStatus};

/// Default grace window after a ride's effective deadline, in minutes.
pub const DEFAULT_GRACE_PERIOD_MINUTES: i64 = 60;

/// Temporal classification of a ride relative to a reference instant.
///
/// For a fixed deadline, phases are monotonic in time: a ride only moves
/// `Upcoming` → `Grace` → `Expired`, which the `Ord` derive reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RidePhase {
    Upcoming,
    Grace,
    Expired,
}

/// Lifecycle tuning. The grace period is injected here instead of living
/// as a hidden module constant, so callers can vary it.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleConfig {
    /// Window after the effective deadline during which the ride stays
    /// visible and actionable.
    pub grace_period: Duration,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            grace_period: Duration::minutes(DEFAULT_GRACE_PERIOD_MINUTES),
        }
    }
}

/// The set of actions a caller may offer for a ride. Six independent
/// booleans; no precedence between them is defined here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideActions {
    pub can_edit: bool,
    pub can_cancel: bool,
    pub can_delete: bool,
    pub can_archive: bool,
    pub can_start_tracking: bool,
    pub can_complete: bool,
}

impl LifecycleConfig {
    /// Create a config with a grace period given in minutes.
    pub fn with_grace_minutes(minutes: i64) -> Self {
        Self {
            grace_period: Duration::minutes(minutes),
        }
    }

    /// Classify a ride's phase at `now`.
    ///
    /// The effective deadline is `available_until` when set, else
    /// `departure_time`. At exactly the deadline the ride is already in
    /// `Grace`; at exactly deadline + grace period it is `Expired`.
    pub fn phase(
        &self,
        departure_time: DateTime<Utc>,
        available_until: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> RidePhase {
        let deadline = available_until.unwrap_or(departure_time);
        if now < deadline {
            RidePhase::Upcoming
        } else if now < deadline + self.grace_period {
            RidePhase::Grace
        } else {
            RidePhase::Expired
        }
    }

    /// Whether the ride is past its effective deadline.
    ///
    /// With `include_grace_period = false` this is true as soon as the
    /// deadline passes (phases `Grace` and `Expired`); with `true` it is
    /// true only once the grace window has also elapsed.
    pub fn is_expired(
        &self,
        departure_time: DateTime<Utc>,
        available_until: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        include_grace_period: bool,
    ) -> bool {
        let phase = self.phase(departure_time, available_until, now);
        if include_grace_period {
            phase == RidePhase::Expired
        } else {
            phase != RidePhase::Upcoming
        }
    }

    /// Whether the ride should appear in search results at `now`.
    ///
    /// Cancelled, completed, and expired statuses are never searchable;
    /// otherwise the ride is searchable through the end of its grace
    /// window.
    pub fn is_searchable(
        &self,
        departure_time: DateTime<Utc>,
        available_until: Option<DateTime<Utc>>,
        status: Option<RideStatus>,
        now: DateTime<Utc>,
    ) -> bool {
        if matches!(
            status,
            Some(RideStatus::Cancelled) | Some(RideStatus::Completed) | Some(RideStatus::Expired)
        ) {
            return false;
        }
        self.phase(departure_time, available_until, now) != RidePhase::Expired
    }

    /// Derive the permitted actions for a ride at `now`.
    ///
    /// `can_cancel` stays true for expired rides so the record can still be
    /// closed out after the fact. `can_delete` ignores the phase entirely;
    /// only confirmed passengers block deletion (enforced again by the
    /// backend).
    pub fn actions(
        &self,
        departure_time: DateTime<Utc>,
        available_until: Option<DateTime<Utc>>,
        status: RideStatus,
        has_confirmed_passengers: bool,
        now: DateTime<Utc>,
    ) -> RideActions {
        let phase = self.phase(departure_time, available_until, now);
        RideActions {
            can_edit: phase == RidePhase::Upcoming && !status.is_terminal(),
            can_cancel: !status.is_terminal(),
            can_delete: !has_confirmed_passengers,
            can_archive: phase == RidePhase::Expired && !status.is_terminal(),
            can_start_tracking: phase != RidePhase::Expired && status.is_running(),
            can_complete: phase != RidePhase::Upcoming && status.is_running(),
        }
    }
}

impl Ride {
    /// Phase of this ride at `now`.
    pub fn phase(&self, config: &LifecycleConfig, now: DateTime<Utc>) -> RidePhase {
        config.phase(self.departure_time, self.available_until, now)
    }

    /// Whether this ride should appear in search results at `now`.
    pub fn is_searchable(&self, config: &LifecycleConfig, now: DateTime<Utc>) -> bool {
        config.is_searchable(self.departure_time, self.available_until, Some(self.status), now)
    }

    /// Permitted actions for this ride at `now`.
    pub fn actions(
        &self,
        config: &LifecycleConfig,
        has_confirmed_passengers: bool,
        now: DateTime<Utc>,
    ) -> RideActions {
        config.actions(
            self.departure_time,
            self.available_until,
            self.status,
            has_confirmed_passengers,
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn departure() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn available_until_overrides_departure_for_phase() {
        let config = LifecycleConfig::default();
        let until = departure() + Duration::hours(2);
        let now = departure() + Duration::minutes(30);

        // Past departure but before the override: still upcoming.
        assert_eq!(config.phase(departure(), Some(until), now), RidePhase::Upcoming);
        assert_eq!(config.phase(departure(), None, now), RidePhase::Grace);
    }

    #[test]
    fn zero_grace_period_skips_grace_phase() {
        let config = LifecycleConfig::with_grace_minutes(0);
        assert_eq!(
            config.phase(departure(), None, departure()),
            RidePhase::Expired
        );
        let just_before = departure() - Duration::milliseconds(1);
        assert_eq!(
            config.phase(departure(), None, just_before),
            RidePhase::Upcoming
        );
    }

    #[test]
    fn is_expired_modes_agree_when_grace_is_zero() {
        let config = LifecycleConfig::with_grace_minutes(0);
        for offset_minutes in [-30i64, 0, 30] {
            let now = departure() + Duration::minutes(offset_minutes);
            assert_eq!(
                config.is_expired(departure(), None, now, false),
                config.is_expired(departure(), None, now, true),
            );
        }
    }

    #[test]
    fn phases_order_upcoming_before_grace_before_expired() {
        assert!(RidePhase::Upcoming < RidePhase::Grace);
        assert!(RidePhase::Grace < RidePhase::Expired);
    }
}
