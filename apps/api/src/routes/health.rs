use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: &'static str,
    pub entries: usize,
}

/// GET /health
/// Liveness plus which blob backend the ledger is persisted to.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = state.ledger.lock().await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: service.backend(),
        entries: service.ledger().len(),
    })
}
