use std::sync::Arc;

use maraton_core::file_store::FileStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the rest
/// sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maraton_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Writes uploads beneath `config.upload_dir`.
    pub file_store: Arc<FileStore>,
}

impl AppState {
    pub fn new(pool: maraton_db::DbPool, config: ServerConfig) -> Self {
        let file_store = Arc::new(FileStore::new(config.upload_dir.clone()));
        Self {
            pool,
            config: Arc::new(config),
            file_store,
        }
    }
}
