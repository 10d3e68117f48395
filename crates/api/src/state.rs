use std::sync::Arc;

use dogule_db::Database;

use crate::config::ServerConfig;
use crate::limits::FixedWindowLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Pool returned by the first `db.connect()`, already bootstrapped.
    ///
    /// Repositories and services run on this handle. It is not refreshed:
    /// after `db.disconnect()` it is closed, so the adapter is only
    /// disconnected once the server has stopped serving.
    pub pool: dogule_db::DbPool,
    /// The adapter that owns the pool; used by readiness checks.
    pub db: Arc<Database>,
    pub config: Arc<ServerConfig>,
    pub limiter: Arc<FixedWindowLimiter>,
}

impl AppState {
    pub fn new(pool: dogule_db::DbPool, db: Arc<Database>, config: ServerConfig) -> Self {
        let limiter = Arc::new(FixedWindowLimiter::new(&config.rate_limit));
        Self {
            pool,
            db,
            config: Arc::new(config),
            limiter,
        }
    }
}
