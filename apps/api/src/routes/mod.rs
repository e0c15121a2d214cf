pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::admin;
use crate::layout::handlers as meadow;
use crate::ledger::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ledger API
        .route("/api/v1/ledger", get(handlers::handle_get_ledger))
        .route("/api/v1/ledger/series", get(handlers::handle_get_series))
        .route(
            "/api/v1/ledger/entries",
            post(handlers::handle_insert).delete(handlers::handle_clear),
        )
        .route(
            "/api/v1/ledger/entries/:id",
            get(handlers::handle_get_entry).delete(handlers::handle_delete_entry),
        )
        // Meadow API
        .route("/api/v1/meadow", get(meadow::handle_get_meadow))
        // Admin API
        .route("/api/v1/admin/verify", post(admin::handle_verify))
        .with_state(state)
}
