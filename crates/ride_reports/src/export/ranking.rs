use std::cmp::Ordering;

use crate::metrics::RiderMatchReport;

/// Compare two reports by best-match percentage, then by mean percentage.
fn service_order(a: &RiderMatchReport, b: &RiderMatchReport) -> Ordering {
    a.best_match_percentage
        .cmp(&b.best_match_percentage)
        .then_with(|| {
            a.mean_match_percentage
                .partial_cmp(&b.mean_match_percentage)
                .unwrap_or(Ordering::Equal)
        })
}

pub(crate) fn find_best_served_index_impl(reports: &[RiderMatchReport]) -> Option<usize> {
    reports
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| service_order(a, b))
        .map(|(idx, _)| idx)
}

pub(crate) fn find_worst_served_index_impl(reports: &[RiderMatchReport]) -> Option<usize> {
    reports
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| service_order(a, b))
        .map(|(idx, _)| idx)
}
