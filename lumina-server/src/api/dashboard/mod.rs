//! Dashboard API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/dashboard", get(handler::get_dashboard))
        .route("/api/dashboard/export.csv", get(handler::export_csv))
        .route("/api/dashboard/document", get(handler::get_document))
        .route("/api/dashboard/narrative", post(handler::narrative))
}
