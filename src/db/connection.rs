use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::Mutex;

// ============================================================================
// Cached Lazy Connection
// ============================================================================
//
// The first caller to need a pool establishes it while holding the cache
// lock, so concurrent first callers await that same in-flight attempt
// instead of opening redundant pools. A failed attempt leaves the cache
// empty; the next caller retries from scratch rather than being poisoned.
//
// ============================================================================

const CREATE_ORDERS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS orders (
    order_number     TEXT PRIMARY KEY,
    customer_name    TEXT NOT NULL,
    customer_phone   TEXT NOT NULL,
    customer_email   TEXT,
    delivery_type    TEXT NOT NULL,
    delivery_address TEXT,
    items            JSONB NOT NULL,
    total_amount     BIGINT NOT NULL,
    notes            TEXT,
    status           TEXT NOT NULL,
    created_at       TIMESTAMPTZ NOT NULL
)";

pub struct Database {
    url: Option<String>,
    cached: Mutex<Option<PgPool>>,
}

impl Database {
    /// A handle that will connect on first use. `url: None` means the
    /// database was never configured; every `pool()` call then fails, which
    /// submission tolerates and retrieval reports.
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            cached: Mutex::new(None),
        }
    }

    /// The cached pool, connecting (and creating the schema) on first call.
    pub async fn pool(&self) -> Result<PgPool, sqlx::Error> {
        let mut cached = self.cached.lock().await;

        if let Some(pool) = cached.as_ref() {
            return Ok(pool.clone());
        }

        let url = self.url.as_deref().ok_or_else(|| {
            sqlx::Error::Configuration("DATABASE_URL is not set".into())
        })?;

        tracing::debug!("Establishing Postgres pool");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await?;

        sqlx::query(CREATE_ORDERS_TABLE).execute(&pool).await?;

        *cached = Some(pool.clone());
        tracing::info!("Postgres pool established");
        Ok(pool)
    }

    /// Drop the cached pool so the next call reconnects.
    pub async fn reset(&self) {
        self.cached.lock().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_database_fails_every_call() {
        let db = Database::new(None);
        assert!(db.pool().await.is_err());
        // Not poisoned: the same error again, not a panic or a hang.
        assert!(db.pool().await.is_err());
    }

    #[tokio::test]
    async fn test_reset_clears_nothing_when_empty() {
        let db = Database::new(None);
        db.reset().await;
        assert!(db.pool().await.is_err());
    }
}
