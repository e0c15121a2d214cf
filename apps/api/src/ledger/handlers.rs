use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::admin::AdminGuard;
use crate::errors::AppError;
use crate::ledger::series::{cumulative_series, SeriesPoint};
use crate::ledger::store::LedgerSummary;
use crate::ledger::validation::AmountInput;
use crate::ledger::HISTORY_LIMIT;
use crate::models::entry::Entry;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LedgerResponse {
    #[serde(flatten)]
    pub summary: LedgerSummary,
    /// Most recent first, at most `HISTORY_LIMIT`.
    pub entries: Vec<Entry>,
}

#[derive(Deserialize)]
pub struct InsertRequest {
    pub value: AmountInput,
}

#[derive(Serialize)]
pub struct InsertResponse {
    pub entry: Entry,
    pub persisted: bool,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub removed: bool,
    pub persisted: bool,
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub cleared: usize,
    pub persisted: bool,
}

/// GET /api/v1/ledger
pub async fn handle_get_ledger(State(state): State<AppState>) -> Json<LedgerResponse> {
    let service = state.ledger.lock().await;
    let ledger = service.ledger();
    Json(LedgerResponse {
        summary: ledger.summary(),
        entries: ledger
            .ordered_view(HISTORY_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
    })
}

/// GET /api/v1/ledger/series
pub async fn handle_get_series(State(state): State<AppState>) -> Json<Vec<SeriesPoint>> {
    let service = state.ledger.lock().await;
    Json(cumulative_series(service.ledger().entries()))
}

/// GET /api/v1/ledger/entries/:id
pub async fn handle_get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, AppError> {
    let service = state.ledger.lock().await;
    service
        .ledger()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Entry {id} not found")))
}

/// POST /api/v1/ledger/entries
pub async fn handle_insert(
    State(state): State<AppState>,
    payload: Result<Json<InsertRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertResponse>), AppError> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let value = req.value.validate()?;

    let outcome = state.ledger.lock().await.insert(value).await;
    Ok((
        StatusCode::CREATED,
        Json(InsertResponse {
            entry: outcome.result,
            persisted: outcome.persisted,
        }),
    ))
}

/// DELETE /api/v1/ledger/entries/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    _admin: AdminGuard,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    let outcome = state.ledger.lock().await.delete_by_id(&id).await;
    Json(DeleteResponse {
        removed: outcome.result,
        persisted: outcome.persisted,
    })
}

/// DELETE /api/v1/ledger/entries
pub async fn handle_clear(
    State(state): State<AppState>,
    _admin: AdminGuard,
) -> Json<ClearResponse> {
    let outcome = state.ledger.lock().await.clear_all().await;
    Json(ClearResponse {
        cleared: outcome.result,
        persisted: outcome.persisted,
    })
}
