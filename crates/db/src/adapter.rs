//! Dual-mode persistence adapter.
//!
//! [`Database`] owns the connection pool for the process. It picks an
//! external Postgres when `DATABASE_URL` is set (and the process is not in
//! test mode) and otherwise boots an embedded server. The schema script runs
//! once per adapter, on the first [`Database::connect`].

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use tokio::sync::Mutex;

use dogule_core::types::{Date, DbId, Timestamp};

#[cfg(feature = "embedded-db")]
use crate::embedded::EmbeddedDatabase;
use crate::schema::{strip_extensions, SCHEMA, UUID_SHIMS};
use crate::{create_pool, health_check};

/// Default pool size when `DATABASE_MAX_CONNECTIONS` is unset.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection settings for the adapter.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// External connection string. `None` selects the embedded server.
    pub url: Option<String>,
    /// Test mode always uses the embedded server.
    pub test_mode: bool,
    pub max_connections: u32,
}

/// Which backend the adapter talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseMode {
    External { url: String },
    Embedded,
}

impl DatabaseConfig {
    /// Load database settings from the environment.
    ///
    /// | Env Var                    | Default        |
    /// |----------------------------|----------------|
    /// | `DATABASE_URL`             | unset          |
    /// | `DOGULE_ENV`               | `development`  |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`           |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty());

        let test_mode = std::env::var("DOGULE_ENV")
            .map(|v| v.eq_ignore_ascii_case("test"))
            .unwrap_or(false);

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            test_mode,
            max_connections,
        }
    }

    pub fn mode(&self) -> DatabaseMode {
        match &self.url {
            Some(url) if !self.test_mode => DatabaseMode::External { url: url.clone() },
            _ => DatabaseMode::Embedded,
        }
    }
}

/// Failure points of [`Database::connect`] and [`Database::query`].
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database configuration missing: {0}")]
    ConfigMissing(&'static str),

    #[error("failed to connect to database: {0}")]
    ConnectFailed(#[source] sqlx::Error),

    #[error("database liveness check failed: {0}")]
    LivenessFailed(#[source] sqlx::Error),

    #[error("schema bootstrap failed: {0}")]
    BootstrapFailed(#[source] sqlx::Error),

    #[error("embedded database failed to start: {0}")]
    EmbeddedStartFailed(String),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// A positional parameter for [`Database::query`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Bool(bool),
    Uuid(DbId),
    Timestamp(Timestamp),
    Date(Date),
    Null,
}

impl SqlParam {
    fn bind<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Uuid(v) => query.bind(*v),
            SqlParam::Timestamp(v) => query.bind(*v),
            SqlParam::Date(v) => query.bind(*v),
            SqlParam::Null => query.bind(None::<String>),
        }
    }
}

#[derive(Default)]
struct Inner {
    pool: Option<PgPool>,
    bootstrapped: bool,
    /// Whether the current pool points at the embedded server.
    emulated: bool,
    #[cfg(feature = "embedded-db")]
    embedded: Option<EmbeddedDatabase>,
}

/// Process-wide database handle shared through the application state.
pub struct Database {
    config: DatabaseConfig,
    inner: Mutex<Inner>,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Wrap an already-open pool. The schema is still bootstrapped on the
    /// first [`connect`](Self::connect). After [`disconnect`](Self::disconnect)
    /// the adapter falls back to the embedded server.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            config: DatabaseConfig {
                url: None,
                test_mode: false,
                max_connections: DEFAULT_MAX_CONNECTIONS,
            },
            inner: Mutex::new(Inner {
                pool: Some(pool),
                ..Inner::default()
            }),
        }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Return the live pool, opening it and bootstrapping the schema on the
    /// first call. A failed bootstrap leaves the adapter un-bootstrapped so
    /// the next call retries.
    pub async fn connect(&self) -> Result<PgPool, DbError> {
        let mut inner = self.inner.lock().await;

        let pool = match inner.pool.clone() {
            Some(pool) => pool,
            None => {
                let pool = self.open(&mut inner).await?;
                inner.pool = Some(pool.clone());
                pool
            }
        };

        if !inner.bootstrapped {
            if let Err(err) = bootstrap(&pool, inner.emulated).await {
                tracing::error!(error = %err, "Schema bootstrap failed");
                return Err(DbError::BootstrapFailed(err));
            }
            inner.bootstrapped = true;
            tracing::info!(emulated = inner.emulated, "Schema bootstrap complete");
        }

        Ok(pool)
    }

    /// Execute a parameterized statement and return all result rows.
    pub async fn query(&self, text: &str, params: &[SqlParam]) -> Result<Vec<PgRow>, DbError> {
        let pool = self.connect().await?;
        let mut query = sqlx::query(text);
        for param in params {
            query = param.bind(query);
        }
        query.fetch_all(&pool).await.map_err(DbError::Query)
    }

    /// Close the pool, stop the embedded server and reset bootstrap state.
    pub async fn disconnect(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(pool) = inner.pool.take() {
            pool.close().await;
        }
        inner.bootstrapped = false;
        inner.emulated = false;
        stop_embedded(&mut inner).await;
        tracing::info!("Database disconnected");
    }

    pub async fn is_bootstrapped(&self) -> bool {
        self.inner.lock().await.bootstrapped
    }

    async fn open(&self, inner: &mut Inner) -> Result<PgPool, DbError> {
        let url = match self.config.mode() {
            DatabaseMode::External { url } => {
                inner.emulated = false;
                url
            }
            DatabaseMode::Embedded => {
                let url = start_embedded(inner).await?;
                inner.emulated = true;
                url
            }
        };

        let pool = create_pool(&url, self.config.max_connections)
            .await
            .map_err(DbError::ConnectFailed)?;

        if let Err(err) = ensure_live(&pool).await {
            pool.close().await;
            return Err(err);
        }

        tracing::info!(emulated = inner.emulated, "Database connection pool created");
        Ok(pool)
    }
}

async fn ensure_live(pool: &PgPool) -> Result<(), DbError> {
    health_check(pool).await.map_err(DbError::LivenessFailed)
}

async fn bootstrap(pool: &PgPool, emulated: bool) -> Result<(), sqlx::Error> {
    if emulated {
        sqlx::raw_sql(UUID_SHIMS).execute(pool).await?;
        let ddl = strip_extensions(SCHEMA);
        sqlx::raw_sql(&ddl).execute(pool).await?;
    } else {
        sqlx::raw_sql(SCHEMA).execute(pool).await?;
    }
    Ok(())
}

#[cfg(feature = "embedded-db")]
async fn start_embedded(inner: &mut Inner) -> Result<String, DbError> {
    if let Some(embedded) = &inner.embedded {
        return Ok(embedded.connection_string().to_string());
    }
    let embedded = EmbeddedDatabase::start()
        .await
        .map_err(|e| DbError::EmbeddedStartFailed(e.to_string()))?;
    let url = embedded.connection_string().to_string();
    inner.embedded = Some(embedded);
    Ok(url)
}

#[cfg(not(feature = "embedded-db"))]
async fn start_embedded(_inner: &mut Inner) -> Result<String, DbError> {
    Err(DbError::ConfigMissing("DATABASE_URL"))
}

#[cfg(feature = "embedded-db")]
async fn stop_embedded(inner: &mut Inner) {
    if let Some(embedded) = inner.embedded.take() {
        if let Err(err) = embedded.stop().await {
            tracing::warn!(error = %err, "Failed to stop embedded database");
        }
    }
}

#[cfg(not(feature = "embedded-db"))]
async fn stop_embedded(_inner: &mut Inner) {}
