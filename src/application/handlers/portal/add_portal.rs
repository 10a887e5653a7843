//! AddPortalHandler - Command handler for reporting a portal.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::application::lifecycle::PortalLifecycleManager;
use crate::domain::foundation::{StoreError, Timestamp, ValidationError};
use crate::domain::portal::{NewPortal, PortalKey};
use crate::ports::PortalStore;

/// Command to set the portal between two zones.
///
/// The portal closes `hours` and `minutes` after the command is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPortalCommand {
    pub source: String,
    pub target: String,
    pub size: i32,
    pub hours: i64,
    pub minutes: i64,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddPortalResult {
    pub portal: NewPortal,
}

#[derive(Debug, Error)]
pub enum AddPortalError {
    #[error("Invalid portal: {key} (size {size})")]
    InvalidPortal { key: PortalKey, size: i32 },

    #[error("Invalid portal duration: {0}")]
    InvalidDuration(ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handler for adding portals.
pub struct AddPortalHandler {
    lifecycle: Arc<PortalLifecycleManager>,
    store: Arc<dyn PortalStore>,
}

impl AddPortalHandler {
    pub fn new(lifecycle: Arc<PortalLifecycleManager>, store: Arc<dyn PortalStore>) -> Self {
        Self { lifecycle, store }
    }

    pub async fn handle(&self, cmd: AddPortalCommand) -> Result<AddPortalResult, AddPortalError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        cmd: AddPortalCommand,
        now: Timestamp,
    ) -> Result<AddPortalResult, AddPortalError> {
        let portal = NewPortal::expiring_in(
            cmd.source,
            cmd.target,
            cmd.size,
            cmd.hours,
            cmd.minutes,
            now,
        )
        .map_err(AddPortalError::InvalidDuration)?;

        if !self.lifecycle.validate(&portal) {
            return Err(AddPortalError::InvalidPortal {
                key: portal.key(),
                size: portal.size,
            });
        }

        self.store.add(&portal).await?;
        debug!(portal = %portal.key(), size = portal.size, "Portal stored");

        Ok(AddPortalResult { portal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPortalStore;
    use crate::domain::zone::{parse_snapshot, ZoneCatalog};

    fn now() -> Timestamp {
        Timestamp::parse_storage("2024-05-10 20:00:00").unwrap()
    }

    fn handler(store: Arc<InMemoryPortalStore>) -> AddPortalHandler {
        let catalog = ZoneCatalog::default();
        catalog.replace_with(
            parse_snapshot(
                br#"[{"name": "X", "type": "TUNNEL_LOW"}, {"name": "Y", "type": "TUNNEL_HIGH"}]"#,
            )
            .unwrap(),
        );
        let lifecycle = Arc::new(PortalLifecycleManager::new(Arc::new(catalog), store.clone()));
        AddPortalHandler::new(lifecycle, store)
    }

    fn cmd(source: &str, target: &str, size: i32, hours: i64, minutes: i64) -> AddPortalCommand {
        AddPortalCommand {
            source: source.to_string(),
            target: target.to_string(),
            size,
            hours,
            minutes,
        }
    }

    #[tokio::test]
    async fn stores_valid_portal_with_computed_expiry() {
        let store = Arc::new(InMemoryPortalStore::new());
        let result = handler(store.clone())
            .handle_at(cmd("X", "Y", 20, 2, 30), now())
            .await
            .unwrap();

        assert_eq!(result.portal.expires.to_storage_string(), "2024-05-10 22:30:00");
        assert_eq!(store.portal_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_invalid_portal_without_storing() {
        let store = Arc::new(InMemoryPortalStore::new());
        let result = handler(store.clone())
            .handle_at(cmd("X", "Y", 5, 1, 0), now())
            .await;

        assert!(matches!(result, Err(AddPortalError::InvalidPortal { size: 5, .. })));
        assert_eq!(store.portal_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_unknown_zone() {
        let store = Arc::new(InMemoryPortalStore::new());
        let result = handler(store.clone())
            .handle_at(cmd("X", "Atlantis", 7, 1, 0), now())
            .await;

        assert!(matches!(result, Err(AddPortalError::InvalidPortal { .. })));
    }

    #[tokio::test]
    async fn rejects_duration_past_the_calendar_without_storing() {
        let store = Arc::new(InMemoryPortalStore::new());
        let result = handler(store.clone())
            .handle_at(cmd("X", "Y", 7, 3_000_000_000, 0), now())
            .await;

        assert!(matches!(
            result,
            Err(AddPortalError::InvalidDuration(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(store.portal_count().await, 0);
    }

    #[tokio::test]
    async fn second_add_replaces_first() {
        let store = Arc::new(InMemoryPortalStore::new());
        let h = handler(store.clone());

        h.handle_at(cmd("X", "Y", 20, 2, 0), now()).await.unwrap();
        h.handle_at(cmd("X", "Y", 7, 3, 0), now()).await.unwrap();

        let portals = store.list().await.unwrap();
        assert_eq!(portals.len(), 1);
        assert_eq!(portals[0].size(), 7);
        assert_eq!(portals[0].expires().to_storage_string(), "2024-05-10 23:00:00");
    }
}
