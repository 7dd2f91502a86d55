use crate::metrics::RiderMatchReport;

pub(crate) fn export_to_csv_impl(
    reports: &[RiderMatchReport],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "user_id",
        "candidate_count",
        "searchable_count",
        "qualifying_count",
        "recommended_count",
        "best_match_percentage",
        "mean_match_percentage",
        "best_ride_id",
    ])?;

    for report in reports {
        wtr.write_record([
            &report.user_id,
            &report.candidate_count.to_string(),
            &report.searchable_count.to_string(),
            &report.qualifying_count.to_string(),
            &report.recommended_count.to_string(),
            &report.best_match_percentage.to_string(),
            &report.mean_match_percentage.to_string(),
            &report.best_ride_id.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
