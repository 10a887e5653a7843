//! PortalLifecycleManager - validation of candidate portals and the
//! expiry sweep.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::foundation::{StoreError, Timestamp};
use crate::domain::portal::{NewPortal, Portal, PortalSize};
use crate::domain::zone::ZoneCatalog;
use crate::ports::PortalStore;

/// Outcome counts of one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Portals returned by the listing.
    pub listed: usize,
    /// Portals whose expiry was strictly before the sweep time.
    pub expired: usize,
    /// Expired portals actually deleted.
    pub removed: usize,
    /// Expired at listing time but renewed before deletion; left in place.
    pub renewed: usize,
    /// Deletions that failed.
    pub failed: usize,
}

/// Checks candidates against the zone catalog and sweeps expired portals.
pub struct PortalLifecycleManager {
    catalog: Arc<ZoneCatalog>,
    store: Arc<dyn PortalStore>,
}

impl PortalLifecycleManager {
    pub fn new(catalog: Arc<ZoneCatalog>, store: Arc<dyn PortalStore>) -> Self {
        Self { catalog, store }
    }

    /// True iff the size is 2, 7 or 20 and both endpoints name loaded zones.
    ///
    /// Both names are checked against the same catalog snapshot. A portal
    /// from a zone to itself passes.
    pub fn validate(&self, candidate: &NewPortal) -> bool {
        if PortalSize::try_from(candidate.size).is_err() {
            return false;
        }

        let zones = self.catalog.list();
        let known = |name: &str| zones.iter().any(|z| z.name() == name);
        known(&candidate.source) && known(&candidate.target)
    }

    /// Sweeps portals that expired before now.
    pub async fn cleanup(&self) -> Result<SweepReport, StoreError> {
        self.cleanup_at(Timestamp::now()).await
    }

    /// Deletes every portal whose expiry is strictly before `now`.
    ///
    /// Deletion goes by `(source, target)` and re-checks the expiry in the
    /// store, so a portal renewed between listing and deletion is kept.
    /// A failed deletion is logged and the sweep carries on.
    ///
    /// # Errors
    ///
    /// - the listing error, if listing fails (nothing is deleted)
    /// - otherwise the last deletion error seen, after every expired portal
    ///   was attempted; which deletions failed is only visible in the logs
    pub async fn cleanup_at(&self, now: Timestamp) -> Result<SweepReport, StoreError> {
        let portals = self.store.list().await?;
        let expired: Vec<&Portal> = portals.iter().filter(|p| p.is_expired_at(&now)).collect();

        let mut report = SweepReport {
            listed: portals.len(),
            expired: expired.len(),
            ..SweepReport::default()
        };
        let mut last_error = None;

        for portal in expired {
            let key = portal.key();
            match self.store.remove_expired(&key, now).await {
                Ok(true) => report.removed += 1,
                Ok(false) => {
                    debug!(portal = %key, "Portal renewed during sweep, keeping it");
                    report.renewed += 1;
                }
                Err(e) => {
                    error!(portal = %key, error = %e, "Unable to delete portal");
                    report.failed += 1;
                    last_error = Some(e);
                }
            }
        }

        info!(
            listed = report.listed,
            expired = report.expired,
            removed = report.removed,
            renewed = report.renewed,
            failed = report.failed,
            "Expired portal sweep finished"
        );

        match last_error {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }
}
