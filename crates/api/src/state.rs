use std::sync::Arc;

use crate::authorization::Authorizer;
use crate::config::ServerConfig;
use crate::services::HorseService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Horse Data Service.
    pub horses: Arc<dyn HorseService>,
    /// Authorization Checker for mutating operations.
    pub authorizer: Arc<dyn Authorizer>,
}
