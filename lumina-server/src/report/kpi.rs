//! KPI / Variance Calculator
//!
//! Headline figures for the dashboard window and the sales-report page.
//! The two pages compute their day spans differently and BOTH formulas are
//! preserved on purpose: the dashboard window is an inclusive difference
//! (+1), while the unfiltered report page estimates the span from the
//! min/max stay dates WITHOUT the +1. Flagged in DESIGN.md; do not unify.

use shared::models::{AggregatedBucket, DashboardSummary, ReportKpi, SalesReportItem};

use crate::utils::time::{parse_date, window_days};

/// Placeholder shown when there is no bucket to rank
const NO_TOP_PERFORMER: &str = "N/A";

/// Dashboard summary over a sorted room-type breakdown.
///
/// `buckets` must already be revenue-sorted (the aggregator's output order);
/// the top performer is its first entry. Capacity covers the whole inventory.
pub fn dashboard_summary(
    buckets: &[AggregatedBucket],
    total_units: usize,
    window_days: i64,
    daily_target: f64,
) -> DashboardSummary {
    let total_revenue: f64 = buckets.iter().map(|b| b.total_revenue).sum();
    let total_sold_nights: i64 = buckets.iter().map(|b| b.total_bookings).sum();

    let total_capacity = total_units as i64 * window_days;
    let average_occupancy = if total_capacity > 0 {
        total_sold_nights as f64 / total_capacity as f64 * 100.0
    } else {
        0.0
    };

    let total_target_revenue = window_days as f64 * daily_target;

    DashboardSummary {
        total_revenue,
        average_occupancy,
        top_performing_room_type: buckets
            .first()
            .map(|b| b.room_type.clone())
            .unwrap_or_else(|| NO_TOP_PERFORMER.to_string()),
        total_bookings: total_sold_nights,
        total_target_revenue,
        revenue_variance: total_revenue - total_target_revenue,
    }
}

/// Day span for the report page.
///
/// With both filter bounds set this is the inclusive absolute difference +1
/// (inverted filters still yield a positive span). Without a full filter the
/// span is estimated from the min/max of every check-in/check-out in the
/// data, floored at 1 and NOT inclusive. No data and no filter defaults to 1.
fn report_days(
    items: &[SalesReportItem],
    filter_start: Option<&str>,
    filter_end: Option<&str>,
) -> i64 {
    if let (Some(start), Some(end)) = (filter_start, filter_end)
        && let (Some(s), Some(e)) = (parse_date(start), parse_date(end))
    {
        return (e - s).num_days().abs() + 1;
    }

    let dates: Vec<chrono::NaiveDate> = items
        .iter()
        .flat_map(|i| [parse_date(&i.check_in), parse_date(&i.check_out)])
        .flatten()
        .collect();
    match (dates.iter().min(), dates.iter().max()) {
        (Some(min), Some(max)) => (*max - *min).num_days().max(1),
        _ => 1,
    }
}

/// KPI block over an already-filtered item list (report-page variant).
pub fn report_kpi(
    items: &[SalesReportItem],
    filter_start: Option<&str>,
    filter_end: Option<&str>,
    daily_target: f64,
) -> ReportKpi {
    let total_revenue: f64 = items.iter().map(|i| i.amount).sum();
    let total_pax: i64 = items.iter().map(|i| i.pax as i64).sum();
    let total_nights: i64 = items.iter().map(|i| i.duration_nights).sum();
    let count = items.len() as i64;

    let days_diff = report_days(items, filter_start, filter_end);
    let total_target = days_diff as f64 * daily_target;

    ReportKpi {
        total_revenue,
        total_pax,
        count,
        avg_pax: if count > 0 {
            total_pax as f64 / count as f64
        } else {
            0.0
        },
        total_nights,
        total_target,
        variance: total_revenue - total_target,
        days_diff,
    }
}

/// Dashboard-page day span, re-exported for handlers that need the same
/// figure the summary used.
pub fn dashboard_days(start: &str, end: &str) -> i64 {
    window_days(start, end)
}
