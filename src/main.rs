//! Albion Mapper sweeper
//!
//! Loads the zone catalog, connects to the portal store and removes expired
//! portals on a fixed interval until interrupted.

use std::sync::Arc;

use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use albion_mapper::adapters::{FileSnapshotSource, PostgresPortalStore};
use albion_mapper::application::PortalLifecycleManager;
use albion_mapper::config::{AppConfig, ServiceConfig};
use albion_mapper::domain::zone::ZoneCatalog;
use albion_mapper::ports::PortalStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn init_tracing(service: &ServiceConfig) -> Result<(), BoxError> {
    let builder = tracing_subscriber::fmt().with_env_filter(service.env_filter()?);
    if service.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.service)?;

    info!(environment = ?config.service.environment, "Starting Albion Mapper");

    let catalog = Arc::new(ZoneCatalog::new(config.catalog.marker_names()));
    let source = FileSnapshotSource::new(&config.catalog.snapshot_path);
    catalog.load(&source).await.map_err(|e| {
        error!(path = %source.path().display(), "Zone catalog failed to load: {}", e);
        e
    })?;

    info!("Connecting to database...");
    let store = PostgresPortalStore::connect(&config.database).await?;
    if config.database.run_migrations {
        info!("Running database migrations...");
        store.run_migrations().await?;
    }
    store.ping().await?;
    info!("Database health check passed");

    let lifecycle = PortalLifecycleManager::new(
        Arc::clone(&catalog),
        Arc::new(store.clone()) as Arc<dyn PortalStore>,
    );

    let mut interval = tokio::time::interval(config.lifecycle.sweep_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(
        interval_secs = config.lifecycle.sweep_interval_secs,
        "Expired portal sweep scheduled"
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = lifecycle.cleanup().await {
                    error!("Expired portal sweep failed: {}", e);
                }
            }
            _ = &mut shutdown => {
                info!("Shutting down...");
                break;
            }
        }
    }

    store.close().await;
    info!("Shutdown complete");

    Ok(())
}
