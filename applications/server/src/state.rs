/// Shared application state
use crate::services::AuthService;
use std::sync::Arc;
use tune_deezer::DeezerClient;
use tune_storage::StorageContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageContext>,
    pub auth_service: Arc<AuthService>,
    pub deezer: Arc<DeezerClient>,
}

impl AppState {
    pub fn new(
        storage: Arc<StorageContext>,
        auth_service: Arc<AuthService>,
        deezer: Arc<DeezerClient>,
    ) -> Self {
        Self {
            storage,
            auth_service,
            deezer,
        }
    }
}
