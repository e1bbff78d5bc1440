//! Derived report shapes
//!
//! Everything here is a pure function of the base tables and a query window;
//! recomputed per request, never persisted. Chart-facing aggregates use
//! camelCase field names to match the dashboard client.

use serde::{Deserialize, Serialize};

use super::{PicRef, SaleStatus};

/// A sale denormalized against the unit and PIC tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReportItem {
    pub id: i64,
    pub sales_id: i64,
    pub group_name: String,
    pub pic: PicRef,
    /// Resolved PIC name, or the raw `pic` value rendered as text
    pub pic_name: String,
    pub check_in: String,
    pub check_out: String,
    pub pax: i32,
    pub status: SaleStatus,
    pub unit_id: i64,
    /// Resolved unit name, or an "Unknown Unit (<id>)" placeholder
    pub unit_name: String,
    pub amount: f64,
    pub dp_amount: f64,
    /// Stay length in nights, floored at 1
    pub duration_nights: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl SalesReportItem {
    /// Room type the item resolves to (the unit name, placeholder included).
    pub fn room_type(&self) -> &str {
        &self.unit_name
    }
}

/// One sold night of one unit, produced by daily expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNightRecord {
    /// Calendar day (ISO date)
    pub date: String,
    /// Equal per-night share of the reservation amount
    pub revenue: f64,
    /// Always 100 for a sold night; vacancy is never expanded
    pub occupancy_rate: f64,
    pub room_type: String,
}

/// Per-room-type aggregate for a query window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedBucket {
    pub room_type: String,
    pub total_revenue: f64,
    /// soldNights / (unitCount * windowDays) * 100
    pub average_occupancy: f64,
    /// Sold room-nights, NOT reservation count
    pub total_bookings: i64,
}

/// Headline KPIs for the dashboard window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub average_occupancy: f64,
    /// Room type of the top bucket, or "N/A" when there are no buckets
    pub top_performing_room_type: String,
    /// Sold room-nights across all types
    pub total_bookings: i64,
    /// windowDays * daily revenue target
    pub total_target_revenue: f64,
    /// total_revenue - total_target_revenue; sign is surplus/shortfall
    pub revenue_variance: f64,
}

/// One entry of the Top Groups ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopGroup {
    pub name: String,
    pub value: f64,
}

/// One day of the sales trend (reservation amount keyed by check-in date)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesTrendPoint {
    pub date: String,
    pub amount: f64,
}

/// One day of the occupancy trend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyTrendPoint {
    pub date: String,
    pub avg_occ: f64,
}

/// KPI block of the sales-report page, computed over the filtered item list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportKpi {
    pub total_revenue: f64,
    pub total_pax: i64,
    /// Number of transactions in the filtered set
    pub count: i64,
    pub avg_pax: f64,
    pub total_nights: i64,
    pub total_target: f64,
    pub variance: f64,
    pub days_diff: i64,
}
