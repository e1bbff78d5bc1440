//! Unit API Handlers

use axum::{Json, extract::State};
use shared::models::Unit;

use crate::core::ServerState;
use crate::report::room_types;

/// GET /api/units - full room inventory
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Unit>> {
    Json(state.store.units())
}

/// GET /api/room-types - distinct unit names, ascending
pub async fn list_room_types(State(state): State<ServerState>) -> Json<Vec<String>> {
    Json(room_types(&state.store.units()))
}
