//! Dashboard API Handlers
//!
//! Everything is recomputed per request from a store snapshot; the window
//! defaults to November 2025, where the embedded seed data lives.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use shared::models::{
    AggregatedBucket, DailyNightRecord, DashboardSummary, OccupancyTrendPoint, SalesReportItem,
    SalesTrendPoint, TopGroup,
};

use crate::core::ServerState;
use crate::export::{ReportDocument, build_report_document, dashboard_csv};
use crate::report::{
    aggregate_by_room_type, capacity_by_type, expand_daily, join_sales_report, occupancy_trend,
    sales_trend, top_groups,
};
use crate::report::kpi::{dashboard_days, dashboard_summary};
use crate::services::narrative;
use crate::utils::{AppError, AppResult};

/// The embedded seed snapshot covers this window
const DEFAULT_START: &str = "2025-11-01";
const DEFAULT_END: &str = "2025-11-30";

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// Restricts the occupancy trend to one room type
    #[serde(rename = "roomType")]
    pub room_type: Option<String>,
}

impl DashboardQuery {
    /// Resolve the window, treating empty strings as absent.
    fn window(&self) -> (String, String) {
        let pick = |v: &Option<String>, default: &str| match v.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => default.to_string(),
        };
        (
            pick(&self.start_date, DEFAULT_START),
            pick(&self.end_date, DEFAULT_END),
        )
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Inventory counts backing the occupancy denominators
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityStats {
    pub total: usize,
    pub by_type: HashMap<String, i64>,
}

/// Full dashboard payload for a window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub start_date: String,
    pub end_date: String,
    pub summary: DashboardSummary,
    pub breakdown: Vec<AggregatedBucket>,
    pub top_groups: Vec<TopGroup>,
    pub sales_trend: Vec<SalesTrendPoint>,
    pub occupancy_trend: Vec<OccupancyTrendPoint>,
    /// Per-night records feeding the occupancy charts and the CSV export
    pub daily: Vec<DailyNightRecord>,
    pub capacity: CapacityStats,
}

/// Computed parts shared by the JSON, CSV, document and narrative handlers
struct DashboardData {
    items: Vec<SalesReportItem>,
    daily: Vec<DailyNightRecord>,
    breakdown: Vec<AggregatedBucket>,
    summary: DashboardSummary,
}

fn compute(state: &ServerState, start: &str, end: &str) -> DashboardData {
    let units = state.store.units();
    let items = join_sales_report(&state.store.sales(), &units, &state.store.pics());
    let daily = expand_daily(&items, start, end);

    let days = dashboard_days(start, end);
    let breakdown = aggregate_by_room_type(&daily, &units, days);
    let summary = dashboard_summary(
        &breakdown,
        units.len(),
        days,
        state.config.daily_target_revenue,
    );

    DashboardData {
        items,
        daily,
        breakdown,
        summary,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/dashboard - window aggregates for charts and KPI cards
pub async fn get_dashboard(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    let (start, end) = query.window();
    tracing::debug!(start = %start, end = %end, "Computing dashboard window");

    let units = state.store.units();
    let data = compute(&state, &start, &end);

    let response = DashboardResponse {
        top_groups: top_groups(&data.items, &start, &end),
        sales_trend: sales_trend(&data.items, &start, &end),
        occupancy_trend: occupancy_trend(
            &data.daily,
            &units,
            &start,
            &end,
            query.room_type.as_deref().filter(|t| !t.is_empty()),
        ),
        capacity: CapacityStats {
            total: units.len(),
            by_type: capacity_by_type(&units),
        },
        summary: data.summary,
        breakdown: data.breakdown,
        daily: data.daily,
        start_date: start,
        end_date: end,
    };

    Json(response)
}

/// GET /api/dashboard/export.csv - per-night records as CSV
pub async fn export_csv(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<impl IntoResponse> {
    let (start, end) = query.window();
    let data = compute(&state, &start, &end);

    let body = dashboard_csv(&data.daily).map_err(|e| AppError::internal(e.to_string()))?;
    let filename = format!("lumina_sales_{}_to_{}.csv", start, end);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    ))
}

/// GET /api/dashboard/document - printable report payload (PDF collaborator input)
pub async fn get_document(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> Json<ReportDocument> {
    let (start, end) = query.window();
    let data = compute(&state, &start, &end);
    Json(build_report_document(&data.summary, &data.items, &start, &end))
}

#[derive(Debug, Deserialize)]
pub struct NarrativeRequest {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub narrative: String,
}

/// POST /api/dashboard/narrative - AI analyst text for the window
///
/// Always 200: failures of the external service degrade to a fixed message.
pub async fn narrative(
    State(state): State<ServerState>,
    Json(request): Json<NarrativeRequest>,
) -> Json<NarrativeResponse> {
    let query = DashboardQuery {
        start_date: request.start_date,
        end_date: request.end_date,
        room_type: None,
    };
    let (start, end) = query.window();
    let data = compute(&state, &start, &end);

    let narrative = narrative::analyze_performance(
        &state.config,
        &data.summary,
        &data.breakdown,
        &start,
        &end,
    )
    .await;

    Json(NarrativeResponse { narrative })
}
