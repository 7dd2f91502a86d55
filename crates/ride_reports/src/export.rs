//! Report export and ranking utilities.
//!
//! This module provides functions to export rider matching reports to CSV
//! and JSON, and to find the best- and worst-served riders in a batch.

use std::path::Path;

use crate::metrics::RiderMatchReport;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export rider matching reports to CSV format.
///
/// Creates a CSV file with one column per [`RiderMatchReport`] field and one
/// row per report.
///
/// # Errors
///
/// Returns an error if the report set is empty or file creation/CSV writing
/// fails.
pub fn export_to_csv(
    reports: &[RiderMatchReport],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(reports)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(reports, file)
}

/// Export rider matching reports to JSON format.
///
/// Creates a JSON file with an array of all reports.
///
/// # Errors
///
/// Returns an error if the report set is empty or file creation/JSON
/// serialization fails.
pub fn export_to_json(
    reports: &[RiderMatchReport],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(reports)?;
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(reports, file)
}

/// Index of the best-served rider: highest best-match percentage, ties
/// broken by mean percentage. `None` for an empty batch.
pub fn find_best_served_index(reports: &[RiderMatchReport]) -> Option<usize> {
    ranking::find_best_served_index_impl(reports)
}

/// Index of the worst-served rider: lowest best-match percentage, ties
/// broken by mean percentage. `None` for an empty batch.
pub fn find_worst_served_index(reports: &[RiderMatchReport]) -> Option<usize> {
    ranking::find_worst_served_index_impl(reports)
}
