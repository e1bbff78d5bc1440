//! CSV export
//!
//! Header row + one record per row; string fields are quoted by the csv
//! writer as needed. Two payloads exist: per-night dashboard records and the
//! filtered sales-report listing.

use shared::models::{DailyNightRecord, SalesReportItem};

/// CSV serialization errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    IntoInner(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Dashboard export: one row per sold room-night in the window.
pub fn dashboard_csv(records: &[DailyNightRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Date", "Room Type", "Revenue ($)", "Occupancy Rate (%)"])?;

    for record in records {
        writer.write_record([
            record.date.as_str(),
            record.room_type.as_str(),
            &format!("{:.2}", record.revenue),
            &format!("{:.2}", record.occupancy_rate),
        ])?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

/// Sales-report export: one row per filtered report item.
pub fn sales_report_csv(items: &[SalesReportItem]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Sales Name",
        "Group / Guest",
        "Unit",
        "Check In",
        "Check Out",
        "Nights",
        "Amount",
        "DP Amount",
        "Status",
    ])?;

    for item in items {
        writer.write_record([
            item.pic_name.as_str(),
            item.group_name.as_str(),
            item.unit_name.as_str(),
            item.check_in.as_str(),
            item.check_out.as_str(),
            &item.duration_nights.to_string(),
            &item.amount.to_string(),
            &item.dp_amount.to_string(),
            item.status.as_str(),
        ])?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}
