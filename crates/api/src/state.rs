use std::sync::Arc;

use reviewgate_db::ReviewStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Business catalogue and interaction/feedback logs.
    pub store: Arc<dyn ReviewStore>,
    /// Server configuration (feedback categories, paths).
    pub config: Arc<ServerConfig>,
}
