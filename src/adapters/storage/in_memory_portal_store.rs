//! In-Memory Portal Store Adapter
//!
//! Stores portal rows in memory, mirroring the relational table: rows carry a
//! store-assigned id and the expiry in its literal text form.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{PortalId, StoreError, Timestamp};
use crate::domain::portal::{NewPortal, Portal, PortalKey};
use crate::ports::PortalStore;

#[derive(Debug, Clone)]
struct PortalRow {
    id: i64,
    source: String,
    target: String,
    size: i32,
    expires: String,
}

impl PortalRow {
    fn has_key(&self, key: &PortalKey) -> bool {
        self.source == key.source && self.target == key.target
    }

    fn expires_at(&self) -> Result<Timestamp, StoreError> {
        Timestamp::parse_storage(&self.expires).map_err(|e| StoreError::InvalidTimestamp {
            value: self.expires.clone(),
            reason: e.to_string(),
        })
    }
}

/// In-memory storage for portals
#[derive(Debug, Clone)]
pub struct InMemoryPortalStore {
    rows: Arc<RwLock<Vec<PortalRow>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryPortalStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Clear all stored rows (useful for tests)
    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }

    /// Get the number of stored rows
    pub async fn portal_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

impl Default for InMemoryPortalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortalStore for InMemoryPortalStore {
    async fn add(&self, portal: &NewPortal) -> Result<(), StoreError> {
        let key = portal.key();
        let expires = portal.expires.to_storage_string();

        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.has_key(&key)) {
            Some(existing) => {
                existing.size = portal.size;
                existing.expires = expires;
            }
            None => rows.push(PortalRow {
                id: self.next_id.fetch_add(1, Ordering::Relaxed),
                source: key.source,
                target: key.target,
                size: portal.size,
                expires,
            }),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Portal>, StoreError> {
        let rows = self.rows.read().await;
        let now = Timestamp::now();

        rows.iter()
            .map(|row| -> Result<Portal, StoreError> {
                Ok(Portal::reconstitute(
                    PortalId::from_raw(row.id),
                    row.source.clone(),
                    row.target.clone(),
                    row.size,
                    row.expires_at()?,
                    now,
                ))
            })
            .collect()
    }

    async fn remove(&self, portal: &Portal) -> Result<(), StoreError> {
        let id = portal.id().as_i64();
        self.rows.write().await.retain(|r| r.id != id);
        Ok(())
    }

    async fn remove_expired(
        &self,
        key: &PortalKey,
        cutoff: Timestamp,
    ) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(pos) = rows.iter().position(|r| r.has_key(key)) else {
            return Ok(false);
        };

        if rows[pos].expires_at()?.is_before(&cutoff) {
            rows.remove(pos);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
