//! Series export
//!
//! CSV and JSON renderings of a generated sequence.

use thiserror::Error;

use crate::series::DataPoint;

/// Errors raised while serializing a sequence
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// CSV with a header row and one row per point
pub fn to_csv(points: &[DataPoint]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if points.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    for point in points {
        writer.serialize(point)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Pretty-printed JSON array
pub fn to_json(points: &[DataPoint]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(points)?)
}

/// Column names, matching the serialized field names of `DataPoint`
pub const CSV_HEADER: [&str; 5] = [
    "date",
    "day",
    "applicationToInterviewRate",
    "offerAcceptanceRate",
    "rejectionRate",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesGenerator;
    use chrono::NaiveDate;

    fn points(days: usize) -> Vec<DataPoint> {
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        SeriesGenerator::seeded(5).generate_at(days, anchor)
    }

    #[test]
    fn test_csv_layout() {
        let points = points(30);
        let csv = to_csv(&points).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        assert!(lines[1].starts_with("Jun 1,2024-06-01,"));
        assert!(lines[30].starts_with("Jun 30,2024-06-30,"));

        let p = &points[29];
        assert!(lines[30].ends_with(&format!(
            "{},{},{}",
            p.application_to_interview_rate, p.offer_acceptance_rate, p.rejection_rate
        )));
    }

    #[test]
    fn test_csv_empty_has_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), CSV_HEADER.join(","));
    }

    #[test]
    fn test_json_array() {
        let points = points(90);
        let json = to_json(&points).unwrap();

        let parsed: Vec<DataPoint> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, points);
        assert!(json.contains("\"offerAcceptanceRate\""));
    }
}
