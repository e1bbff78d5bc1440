//! Daily Expansion
//!
//! Explodes each reservation into one record per sold night, clipped to the
//! query window. Only actually-sold nights are expanded; vacancy never
//! appears here. The checkout day itself is not a sold night.

use shared::models::{DailyNightRecord, SalesReportItem};

use crate::utils::time::parse_date;

/// Occupancy rate carried by every expanded night: one unit fully occupied.
const SOLD_NIGHT_OCCUPANCY: f64 = 100.0;

/// Expand report items into per-night records for the inclusive window
/// `[start, end]`.
///
/// The per-night revenue is the equal split `amount / duration_nights` and is
/// NOT rescaled when the window clips the stay: each in-window night carries
/// its full share. Items whose dates fail to parse contribute nothing.
pub fn expand_daily(items: &[SalesReportItem], start: &str, end: &str) -> Vec<DailyNightRecord> {
    let (Some(win_start), Some(win_end)) = (parse_date(start), parse_date(end)) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for item in items {
        let (Some(check_in), Some(check_out)) =
            (parse_date(&item.check_in), parse_date(&item.check_out))
        else {
            continue;
        };

        let nightly_revenue = item.amount / item.duration_nights as f64;

        // Nights run [check_in, check_out); equal or inverted dates expand to
        // nothing even though duration_nights clamps to 1 elsewhere.
        let mut night = check_in;
        while night < check_out {
            if night >= win_start && night <= win_end {
                records.push(DailyNightRecord {
                    date: night.to_string(),
                    revenue: nightly_revenue,
                    occupancy_rate: SOLD_NIGHT_OCCUPANCY,
                    room_type: item.unit_name.clone(),
                });
            }
            let Some(next) = night.succ_opt() else { break };
            night = next;
        }
    }

    records
}
