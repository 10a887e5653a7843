//! PostgreSQL implementation of PortalStore.
//!
//! Persists portals in the `portals` table. Expiry crosses the SQL boundary
//! as `YYYY-MM-DD HH:MM:SS` text in both directions.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::config::DatabaseConfig;
use crate::domain::foundation::{PortalId, StoreError, Timestamp};
use crate::domain::portal::{NewPortal, Portal, PortalKey};
use crate::ports::PortalStore;

/// Embedded schema migrations for the portal table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL implementation of PortalStore.
#[derive(Clone)]
pub struct PostgresPortalStore {
    pool: PgPool,
}

impl PostgresPortalStore {
    /// Creates a new PostgresPortalStore over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool sized and timed per `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| StoreError::unavailable("Failed to connect to database", e))?;

        Ok(Self::new(pool))
    }

    /// Applies pending schema migrations. Already-applied ones are skipped.
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable("Failed to run migrations", e))
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PortalStore for PostgresPortalStore {
    async fn add(&self, portal: &NewPortal) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO portals (source, target, size, expires)
            VALUES ($1, $2, $3, $4::timestamp)
            ON CONFLICT (source, target) DO UPDATE SET
                size = EXCLUDED.size,
                expires = EXCLUDED.expires
            "#,
        )
        .bind(&portal.source)
        .bind(&portal.target)
        .bind(portal.size)
        .bind(portal.expires.to_storage_string())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable("Failed to upsert portal", e))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Portal>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, source, target, size,
                   to_char(expires, 'YYYY-MM-DD HH24:MI:SS') AS expires
            FROM portals
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable("Failed to list portals", e))?;

        let now = Timestamp::now();
        rows.iter().map(|row| row_to_portal(row, now)).collect()
    }

    async fn remove(&self, portal: &Portal) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM portals WHERE id = $1")
            .bind(portal.id().as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable("Failed to delete portal", e))?;

        Ok(())
    }

    async fn remove_expired(
        &self,
        key: &PortalKey,
        cutoff: Timestamp,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "DELETE FROM portals WHERE source = $1 AND target = $2 AND expires < $3",
        )
        .bind(&key.source)
        .bind(&key.target)
        .bind(cutoff.as_datetime().naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable("Failed to delete expired portal", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::unavailable("Database health check failed", e))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_portal(row: &PgRow, now: Timestamp) -> Result<Portal, StoreError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| StoreError::InvalidRow(format!("Failed to get id: {}", e)))?;

    let source: String = row
        .try_get("source")
        .map_err(|e| StoreError::InvalidRow(format!("Failed to get source: {}", e)))?;

    let target: String = row
        .try_get("target")
        .map_err(|e| StoreError::InvalidRow(format!("Failed to get target: {}", e)))?;

    let size: i32 = row
        .try_get("size")
        .map_err(|e| StoreError::InvalidRow(format!("Failed to get size: {}", e)))?;

    let expires: String = row
        .try_get("expires")
        .map_err(|e| StoreError::InvalidRow(format!("Failed to get expires: {}", e)))?;

    Ok(Portal::reconstitute(
        PortalId::from_raw(id),
        source,
        target,
        size,
        parse_expires(&expires)?,
        now,
    ))
}

fn parse_expires(value: &str) -> Result<Timestamp, StoreError> {
    Timestamp::parse_storage(value).map_err(|e| StoreError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_expires_accepts_storage_format() {
        let ts = parse_expires("2024-06-01 18:45:00").unwrap();
        assert_eq!(ts.to_storage_string(), "2024-06-01 18:45:00");
    }

    #[test]
    fn parse_expires_rejects_malformed_text() {
        let err = parse_expires("2024-06-01T18:45:00").unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidTimestamp { ref value, .. } if value == "2024-06-01T18:45:00"
        ));
    }

    #[test]
    fn postgres_store_is_a_portal_store() {
        fn _accepts_store<S: PortalStore>() {}
        _accepts_store::<PostgresPortalStore>();
    }

    // The tests below need a running PostgreSQL and are skipped by default.
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn database_store() -> PostgresPortalStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let config = DatabaseConfig {
            url,
            ..Default::default()
        };
        let store = PostgresPortalStore::connect(&config).await.unwrap();
        store.run_migrations().await.unwrap();
        store
    }

    /// A key no other test run touches.
    fn unique_key(label: &str) -> PortalKey {
        PortalKey::new(
            format!("{}-src-{}", label, std::process::id()),
            format!("{}-dst-{}", label, std::process::id()),
        )
    }

    async fn stored(store: &PostgresPortalStore, key: &PortalKey) -> Vec<Portal> {
        store
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|p| &p.key() == key)
            .collect()
    }

    async fn purge(store: &PostgresPortalStore, key: &PortalKey) {
        for portal in stored(store, key).await {
            store.remove(&portal).await.unwrap();
        }
    }

    fn at(text: &str) -> Timestamp {
        Timestamp::parse_storage(text).unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn upsert_replaces_row_for_same_key() {
        let store = database_store().await;
        let key = unique_key("upsert");
        purge(&store, &key).await;

        let first = NewPortal::new(&key.source, &key.target, 20, at("2099-01-01 10:00:00"));
        let second = NewPortal::new(&key.source, &key.target, 7, at("2099-01-01 11:00:00"));
        store.add(&first).await.unwrap();
        store.add(&first).await.unwrap();
        store.add(&second).await.unwrap();

        let portals = stored(&store, &key).await;
        assert_eq!(portals.len(), 1);
        assert_eq!(portals[0].size(), 7);
        assert_eq!(portals[0].expires().to_storage_string(), "2099-01-01 11:00:00");

        purge(&store, &key).await;
    }

    #[tokio::test]
    #[ignore]
    async fn expires_survives_storage_text_round_trip() {
        let store = database_store().await;
        let key = unique_key("roundtrip");
        purge(&store, &key).await;

        store
            .add(&NewPortal::new(&key.source, &key.target, 2, at("2031-12-31 23:59:59")))
            .await
            .unwrap();

        let portals = stored(&store, &key).await;
        assert_eq!(portals[0].expires(), at("2031-12-31 23:59:59"));
        assert!(portals[0].minutes_remaining() > 0.0);

        purge(&store, &key).await;
    }

    #[tokio::test]
    #[ignore]
    async fn remove_expired_only_deletes_stale_rows() {
        let store = database_store().await;
        let key = unique_key("sweep");
        purge(&store, &key).await;
        let cutoff = Timestamp::now();

        store
            .add(&NewPortal::new(&key.source, &key.target, 7, cutoff.plus_minutes(-10)))
            .await
            .unwrap();
        assert!(store.remove_expired(&key, cutoff).await.unwrap());
        assert!(stored(&store, &key).await.is_empty());

        // Renewed before the sweep reached it.
        store
            .add(&NewPortal::new(&key.source, &key.target, 7, cutoff.plus_hours(2)))
            .await
            .unwrap();
        assert!(!store.remove_expired(&key, cutoff).await.unwrap());
        assert_eq!(stored(&store, &key).await.len(), 1);

        purge(&store, &key).await;
    }

    #[tokio::test]
    #[ignore]
    async fn ping_succeeds_against_live_database() {
        let store = database_store().await;
        store.ping().await.unwrap();
        store.close().await;
    }
}
