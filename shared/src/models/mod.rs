//! Domain models
//!
//! Reference tables (units, PICs), raw reservations, and the derived report
//! shapes. Reference and reservation rows serialize with snake_case fields
//! matching the CSV source; chart-facing aggregates serialize camelCase to
//! match the dashboard client.

mod pic;
mod report;
mod sale;
mod unit;

pub use pic::{Pic, PicRef};
pub use report::{
    AggregatedBucket, DailyNightRecord, DashboardSummary, OccupancyTrendPoint, ReportKpi,
    SalesReportItem, SalesTrendPoint, TopGroup,
};
pub use sale::{Sale, SaleStatus, StatusParseError};
pub use unit::Unit;
