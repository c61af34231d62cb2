/// PostgreSQL-backed blacklist store
use crate::config::DbConfig;
use crate::db::blacklist::BlacklistStore;
use crate::error::StoreError;
use crate::models::OAuth2BlacklistedJti;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info};

/// Blacklist store backed by a PostgreSQL connection pool.
///
/// The pool is supplied by the caller; this type owns no lifecycle beyond
/// the one query it knows how to run.
#[derive(Clone)]
pub struct PgBlacklistStore {
    pool: PgPool,
}

impl PgBlacklistStore {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to PostgreSQL using the given settings
    pub async fn connect(config: &DbConfig) -> Result<Self, sqlx::Error> {
        debug!(
            "Connecting blacklist store: connect_timeout={}s",
            config.connect_timeout_secs
        );

        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.database_url)
            .await?;

        info!("Blacklist store connected successfully");

        Ok(Self { pool })
    }
}

#[async_trait]
impl BlacklistStore for PgBlacklistStore {
    async fn select_blacklisted_jti(
        &self,
        signature: &str,
    ) -> Result<Option<OAuth2BlacklistedJti>, StoreError> {
        let jti = sqlx::query_as::<_, OAuth2BlacklistedJti>(
            r#"
            SELECT signature, expires_at FROM oauth2_blacklisted_jti
            WHERE signature = $1
            "#,
        )
        .bind(signature)
        .fetch_optional(&self.pool)
        .await?;

        Ok(jti)
    }
}
