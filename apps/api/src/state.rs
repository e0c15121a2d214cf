use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::layout::FieldConfig;
use crate::ledger::LedgerService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single ledger. The mutex runs each request's read or mutation
    /// (including its flush) to completion before the next one starts.
    pub ledger: Arc<Mutex<LedgerService>>,
    pub config: Config,
    /// Meadow geometry and render cap.
    pub field_config: FieldConfig,
}

impl AppState {
    pub fn new(ledger: LedgerService, config: Config, field_config: FieldConfig) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            config,
            field_config,
        }
    }
}
