pub mod config;
pub mod storage;
pub mod tasks;
pub mod web;

use std::sync::Arc;

use config::ServerConfig;
use tasks::TaskStore;

/// Shared application state handed to every request handler.
///
/// The store is injected here once at startup — handlers never reach for
/// process-wide globals.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub tasks: TaskStore,
    pub started_at: std::time::Instant,
}
