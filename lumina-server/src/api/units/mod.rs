//! Unit API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/units", get(handler::list))
        .route("/api/room-types", get(handler::list_room_types))
}
