use axum::{extract::State, Json};

use crate::layout::{generate_meadow, MeadowLayout};
use crate::state::AppState;

/// GET /api/v1/meadow
pub async fn handle_get_meadow(State(state): State<AppState>) -> Json<MeadowLayout> {
    let element_count = state.ledger.lock().await.ledger().element_count();
    Json(generate_meadow(element_count, &state.field_config))
}
