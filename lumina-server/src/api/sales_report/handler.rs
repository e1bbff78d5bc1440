//! Sales Report API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use shared::models::{ReportKpi, SalesReportItem};
use shared::util::today_iso;

use crate::core::ServerState;
use crate::export::sales_report_csv;
use crate::report::{
    BookingRequest, FilterSpec, SortDirection, SortField, SortSpec, apply_filters,
    join_sales_report, split_booking,
};
use crate::report::kpi::report_kpi;
use crate::utils::{AppError, AppResult};

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub search: Option<String>,
    /// Comma-separated room type names; empty means no restriction
    #[serde(rename = "roomTypes")]
    pub room_types: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<SortField>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<SortDirection>,
}

impl ReportQuery {
    fn filter_spec(&self) -> FilterSpec {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        FilterSpec {
            search: self.search.clone().unwrap_or_default(),
            room_types: self
                .room_types
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            start_date: non_empty(&self.start_date),
            end_date: non_empty(&self.end_date),
        }
    }

    fn sort_spec(&self) -> Option<SortSpec> {
        self.sort_by.map(|field| SortSpec {
            field,
            direction: self.sort_dir.unwrap_or(SortDirection::Asc),
        })
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub items: Vec<SalesReportItem>,
    pub kpi: ReportKpi,
}

fn filtered_items(state: &ServerState, query: &ReportQuery) -> Vec<SalesReportItem> {
    let items = join_sales_report(
        &state.store.sales(),
        &state.store.units(),
        &state.store.pics(),
    );
    apply_filters(&items, &query.filter_spec(), query.sort_spec())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/sales-report - filtered, sorted items plus the KPI block
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> Json<ReportResponse> {
    let items = filtered_items(&state, &query);
    let spec = query.filter_spec();
    let kpi = report_kpi(
        &items,
        spec.start_date.as_deref(),
        spec.end_date.as_deref(),
        state.config.daily_target_revenue,
    );

    Json(ReportResponse { items, kpi })
}

/// GET /api/sales-report/export.csv - the filtered listing as CSV
pub async fn export_csv(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let items = filtered_items(&state, &query);
    let body = sales_report_csv(&items).map_err(|e| AppError::internal(e.to_string()))?;
    let filename = format!("lumina_sales_report_{}.csv", today_iso());

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

/// POST /api/sales-report - enter a booking, one sale row per selected unit
///
/// Validation failures reject with 400 before any mutation; on success the
/// booking is split evenly across its units under one fresh sales_id.
pub async fn create(
    State(state): State<ServerState>,
    Json(request): Json<BookingRequest>,
) -> AppResult<impl IntoResponse> {
    request.validate()?;

    let drafts = split_booking(&request);
    let stored = state.store.append_booking(drafts);
    tracing::info!(
        sales_id = stored.first().map(|s| s.sales_id).unwrap_or_default(),
        rows = stored.len(),
        group = %request.group_name,
        "Booking recorded"
    );

    // Return the stored rows denormalized, as the report page shows them
    let items = join_sales_report(&stored, &state.store.units(), &state.store.pics());
    Ok((StatusCode::CREATED, Json(items)))
}
