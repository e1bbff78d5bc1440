//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`units`] - room inventory and room types
//! - [`pics`] - salesperson directory
//! - [`dashboard`] - window aggregates, exports, AI narrative
//! - [`sales_report`] - filtered transaction listing, KPIs, entry flow

pub mod dashboard;
pub mod health;
pub mod pics;
pub mod sales_report;
pub mod units;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(units::router())
        .merge(pics::router())
        .merge(dashboard::router())
        .merge(sales_report::router())
        .with_state(state)
}
