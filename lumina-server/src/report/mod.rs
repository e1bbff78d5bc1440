//! Sales reporting core
//!
//! Pure computation over snapshots of the base tables. Every function here is
//! total: empty inputs, degenerate windows and unresolved references produce
//! the documented defaults, never errors. Data flows one direction:
//!
//! ```text
//! store snapshot
//!   └─ joiner      (Sale -> SalesReportItem)
//!        ├─ expansion   (per-night records, window-clipped)
//!        │    └─ aggregate  (room-type buckets, occupancy trend)
//!        │         └─ kpi   (dashboard summary)
//!        ├─ aggregate  (top groups, sales trend: reservation amounts)
//!        └─ filter     (search / room-type / date filters + sort)
//!             └─ kpi   (report-page KPIs)
//! ```
//!
//! Top Groups and the Sales Trend aggregate the raw reservation amount keyed
//! by check-in date; occupancy figures aggregate per-night expanded records.
//! The two bases are intentionally different and must not be merged.

pub mod aggregate;
pub mod entry;
pub mod expansion;
pub mod filter;
pub mod joiner;
pub mod kpi;

pub use aggregate::{
    aggregate_by_room_type, capacity_by_type, occupancy_trend, room_types, sales_trend, top_groups,
};
pub use entry::{BookingRequest, split_booking};
pub use expansion::expand_daily;
pub use filter::{FilterSpec, SortDirection, SortField, SortSpec, apply_filters};
pub use joiner::join_sales_report;
pub use kpi::{dashboard_summary, report_kpi};
