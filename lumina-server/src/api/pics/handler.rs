//! PIC API Handlers

use axum::{Json, extract::State};
use shared::models::Pic;

use crate::core::ServerState;

/// GET /api/pics - salesperson directory
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Pic>> {
    Json(state.store.pics())
}
