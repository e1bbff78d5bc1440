//! Small shared utilities

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC wall-clock time as `YYYY-MM-DD HH:MM:SS`, the format used by
/// the `created_at`/`updated_at` columns of the source tables.
pub fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Today's date as an ISO `YYYY-MM-DD` string (UTC)
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
