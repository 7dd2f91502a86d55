//! Parallel report generation using rayon.

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use ride_core::preferences::UserPreferences;
use ride_core::recommend::{RecommendationConfig, RideCandidate};

use crate::metrics::{build_report, RiderMatchReport};

/// One rider's inputs: saved preferences plus the candidate rides fetched
/// for their search corridor.
#[derive(Debug, Clone)]
pub struct RiderScenario {
    pub user_id: String,
    pub preferences: UserPreferences,
    pub candidates: Vec<RideCandidate>,
}

/// Build reports for many rider scenarios in parallel.
///
/// Uses rayon's default thread pool and shows a progress bar.
///
/// # Returns
///
/// Vector of [`RiderMatchReport`] in the same order as input scenarios.
pub fn build_reports(
    scenarios: Vec<RiderScenario>,
    now: DateTime<Utc>,
    config: &RecommendationConfig,
) -> Vec<RiderMatchReport> {
    build_reports_with_progress(scenarios, now, config, None, true)
}

/// Build reports for many rider scenarios in parallel with optional
/// progress bar.
///
/// Each scenario is scored independently with no shared state.
///
/// # Arguments
///
/// * `scenarios` - Rider scenarios to score
/// * `now` - Reference instant for lifecycle/searchability checks
/// * `config` - Recommendation tuning shared by all scenarios
/// * `num_threads` - Optional number of threads. If None, uses rayon's default.
/// * `show_progress` - Whether to display a progress bar
///
/// # Returns
///
/// Vector of [`RiderMatchReport`] in the same order as input scenarios.
pub fn build_reports_with_progress(
    scenarios: Vec<RiderScenario>,
    now: DateTime<Utc>,
    config: &RecommendationConfig,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Vec<RiderMatchReport> {
    let total = scenarios.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let pool = if let Some(threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("Failed to create thread pool")
    } else {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to create thread pool")
    };

    let pb_clone = pb.clone();
    let reports = pool.install(|| {
        scenarios
            .par_iter()
            .map(|scenario| {
                let report = build_report(
                    &scenario.user_id,
                    &scenario.candidates,
                    &scenario.preferences,
                    now,
                    config,
                );
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                report
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    reports
}
