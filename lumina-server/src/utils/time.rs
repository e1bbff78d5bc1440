//! Date helpers for report windows
//!
//! Dates are ISO `YYYY-MM-DD` strings throughout the data model; parsing to
//! [`NaiveDate`] happens only where arithmetic is needed. The core is total:
//! malformed dates degrade to the documented degenerate results instead of
//! erroring.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse an ISO date, tolerating malformed input.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Parse an ISO date or reject with a validation error (entry boundary only).
pub fn require_date(date: &str, field: &str) -> AppResult<NaiveDate> {
    parse_date(date)
        .ok_or_else(|| AppError::validation(format!("Invalid {} date: {}", field, date)))
}

/// Inclusive day count of a window: date difference + 1, where the difference
/// clamps to 0 when start > end or either date is malformed. The degenerate
/// result is therefore 1 day, never 0 or negative.
pub fn window_days(start: &str, end: &str) -> i64 {
    let diff = match (parse_date(start), parse_date(end)) {
        (Some(s), Some(e)) if e >= s => (e - s).num_days(),
        _ => 0,
    };
    diff + 1
}

/// Every calendar day of the inclusive window, ascending. Empty when
/// start > end or either date is malformed.
pub fn window_dates(start: &str, end: &str) -> Vec<NaiveDate> {
    match (parse_date(start), parse_date(end)) {
        (Some(s), Some(e)) if s <= e => s.iter_days().take_while(|d| *d <= e).collect(),
        _ => Vec::new(),
    }
}

/// Stay length in nights: check_out - check_in, floored at 1. Equal, inverted
/// or malformed dates clamp to a single night rather than erroring.
pub fn stay_nights(check_in: &str, check_out: &str) -> i64 {
    match (parse_date(check_in), parse_date(check_out)) {
        (Some(ci), Some(co)) => (co - ci).num_days().max(1),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_days_inclusive() {
        assert_eq!(window_days("2025-11-01", "2025-11-30"), 30);
        assert_eq!(window_days("2025-11-01", "2025-11-01"), 1);
    }

    #[test]
    fn test_window_days_degenerate_clamps_to_one() {
        assert_eq!(window_days("2025-11-30", "2025-11-01"), 1);
        assert_eq!(window_days("not-a-date", "2025-11-01"), 1);
    }

    #[test]
    fn test_window_dates_fills_every_day() {
        let days = window_dates("2025-11-01", "2025-11-05");
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].to_string(), "2025-11-01");
        assert_eq!(days[4].to_string(), "2025-11-05");
    }

    #[test]
    fn test_window_dates_empty_when_inverted() {
        assert!(window_dates("2025-11-05", "2025-11-01").is_empty());
        assert!(window_dates("2025-11-05", "garbage").is_empty());
    }

    #[test]
    fn test_stay_nights() {
        assert_eq!(stay_nights("2025-11-26", "2025-11-28"), 2);
        // Equal and inverted dates clamp to one night
        assert_eq!(stay_nights("2025-11-26", "2025-11-26"), 1);
        assert_eq!(stay_nights("2025-11-28", "2025-11-26"), 1);
        assert_eq!(stay_nights("bad", "2025-11-26"), 1);
    }
}
