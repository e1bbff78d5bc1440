//! Sales Report API module

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/sales-report",
            get(handler::list).post(handler::create),
        )
        .route("/api/sales-report/export.csv", get(handler::export_csv))
}
