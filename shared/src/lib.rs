//! Shared types for the Lumina sales-performance dashboard
//!
//! Domain models used across the server and any future clients: room
//! inventory, salesperson directory, raw reservations, and the derived
//! report/aggregate shapes consumed by charts and exports.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AggregatedBucket, DailyNightRecord, DashboardSummary, OccupancyTrendPoint, Pic, PicRef,
    ReportKpi, Sale, SaleStatus, SalesReportItem, SalesTrendPoint, TopGroup, Unit,
};
