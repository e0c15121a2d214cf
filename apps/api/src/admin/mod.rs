//! Admin gate.
//!
//! Deleting entries and clearing the ledger require the static shared secret,
//! sent in the `x-admin-secret` header. The ledger itself performs no
//! authorization; this extractor is the only check.

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::request::Parts,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Proof that the request carried the admin secret.
pub struct AdminGuard;

#[async_trait]
impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let provided = parts
            .headers
            .get(ADMIN_SECRET_HEADER)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Forbidden)?;

        if matches_secret(provided, &state.config.admin_secret) {
            Ok(AdminGuard)
        } else {
            Err(AppError::Forbidden)
        }
    }
}

fn matches_secret(candidate: &str, secret: &str) -> bool {
    !secret.is_empty() && candidate == secret
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub secret: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub admin: bool,
}

/// POST /api/v1/admin/verify
pub async fn handle_verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Json<VerifyResponse> {
    let admin = matches_secret(&req.secret, &state.config.admin_secret);
    info!("Admin verification attempt: {}", if admin { "accepted" } else { "rejected" });
    Json(VerifyResponse { admin })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_secret() {
        assert!(matches_secret("0987", "0987"));
        assert!(!matches_secret("0988", "0987"));
        assert!(!matches_secret("", "0987"));
        assert!(!matches_secret("", ""));
    }
}
