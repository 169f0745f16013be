// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `portafolio serve`: open storage, wire the gateway, and serve until a
//! shutdown signal arrives.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portafolio_config::PortafolioConfig;
use portafolio_core::{PortafolioError, StorageAdapter};
use portafolio_gateway::{AppState, start_server};
use portafolio_storage::SqliteStorage;

use crate::shutdown;

pub async fn run_serve(config: PortafolioConfig) -> Result<(), PortafolioError> {
    init_tracing(&config.site.log_level);

    info!(
        database = %config.storage.database_path,
        "starting portafolio"
    );

    let storage = SqliteStorage::new(config.storage.clone());
    storage.initialize().await?;
    let storage: Arc<dyn StorageAdapter> = Arc::new(storage);

    let state = AppState::new(storage.clone(), &config)?;
    let cancel = shutdown::install_signal_handler();

    let served = start_server(
        &config.server.bind_address,
        config.server.port,
        state,
        cancel,
    )
    .await;

    if let Err(e) = storage.close().await {
        warn!(error = %e, "failed to close storage cleanly");
    }
    served?;

    info!("portafolio stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portafolio={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
