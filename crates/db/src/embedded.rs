//! Ephemeral Postgres server used when no external database is configured.

use postgresql_embedded::{PostgreSQL, Settings};

/// Name of the database created inside the embedded server.
const DATABASE_NAME: &str = "dogule";

/// A running embedded Postgres instance with a throwaway data directory.
pub struct EmbeddedDatabase {
    postgres: PostgreSQL,
    url: String,
}

impl EmbeddedDatabase {
    /// Install (if needed), initialise and start a temporary server, then
    /// create the application database.
    pub async fn start() -> postgresql_embedded::Result<Self> {
        let settings = Settings {
            temporary: true,
            ..Settings::default()
        };
        let mut postgres = PostgreSQL::new(settings);
        postgres.setup().await?;
        postgres.start().await?;

        if !postgres.database_exists(DATABASE_NAME).await? {
            postgres.create_database(DATABASE_NAME).await?;
        }

        let url = postgres.settings().url(DATABASE_NAME);
        tracing::info!(port = postgres.settings().port, "Embedded Postgres started");

        Ok(Self { postgres, url })
    }

    pub fn connection_string(&self) -> &str {
        &self.url
    }

    /// Stop the server. The temporary data directory is removed on drop.
    pub async fn stop(self) -> postgresql_embedded::Result<()> {
        self.postgres.stop().await
    }
}
