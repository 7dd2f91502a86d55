//! Match-quality labels for displaying a score band.

use serde::Serialize;

/// Display attributes for a match-percentage band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchQuality {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Map a match percentage to its display band.
pub fn match_quality_label(percentage: u8) -> MatchQuality {
    if percentage >= 90 {
        MatchQuality {
            label: "Perfect Match",
            color: "green",
            description: "This ride matches all of your preferences",
        }
    } else if percentage >= 75 {
        MatchQuality {
            label: "Great Match",
            color: "teal",
            description: "This ride matches most of your preferences",
        }
    } else if percentage >= 60 {
        MatchQuality {
            label: "Good Match",
            color: "blue",
            description: "This ride matches several of your preferences",
        }
    } else if percentage >= 50 {
        MatchQuality {
            label: "Fair Match",
            color: "orange",
            description: "This ride matches some of your preferences",
        }
    } else {
        MatchQuality {
            label: "Poor Match",
            color: "red",
            description: "This ride matches few of your preferences",
        }
    }
}
