//! Offline matching-quality analysis for the carpool marketplace.
//!
//! This crate turns rider scenarios (a rider's saved preferences plus the
//! candidate rides fetched for them) into per-rider matching reports, runs
//! large batches of them in parallel, and exports the results for
//! dashboards and spreadsheets.
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::Utc;
//! use ride_core::recommend::RecommendationConfig;
//! use ride_reports::{build_reports, export_to_csv, find_worst_served_index, RiderScenario};
//!
//! let scenarios: Vec<RiderScenario> = load_scenarios();
//! let reports = build_reports(scenarios, Utc::now(), &RecommendationConfig::default());
//!
//! if let Some(idx) = find_worst_served_index(&reports) {
//!     println!("worst served rider: {}", reports[idx].user_id);
//! }
//! export_to_csv(&reports, "matching-report.csv").unwrap();
//! # fn load_scenarios() -> Vec<RiderScenario> { vec![] }
//! ```
//!
//! # Architecture
//!
//! - [`metrics`]: per-rider report extraction
//! - [`runner`]: parallel report generation using rayon
//! - [`export`]: CSV/JSON export and best-/worst-served lookups

pub mod export;
pub mod metrics;
pub mod runner;

pub use export::{export_to_csv, export_to_json, find_best_served_index, find_worst_served_index};
pub use metrics::{build_report, RiderMatchReport};
pub use runner::{build_reports, build_reports_with_progress, RiderScenario};
