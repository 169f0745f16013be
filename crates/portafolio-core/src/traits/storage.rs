// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage lifecycle trait for persistence backends (SQLite, etc.).

use async_trait::async_trait;

use crate::error::PortafolioError;
use crate::traits::content::ContentStore;
use crate::traits::intake::IntakeStore;
use crate::types::HealthStatus;

/// A backend that holds both the content and the intake stores.
///
/// Storage adapters manage the lifecycle of the database connection; the
/// record operations live on the [`ContentStore`] and [`IntakeStore`]
/// supertraits.
#[async_trait]
pub trait StorageAdapter: ContentStore + IntakeStore {
    /// Name of the backend, used in logs.
    fn name(&self) -> &str;

    /// Initializes the storage backend (connection, PRAGMAs, migrations).
    async fn initialize(&self) -> Result<(), PortafolioError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), PortafolioError>;

    /// Reports whether the backend can serve queries.
    async fn health_check(&self) -> Result<HealthStatus, PortafolioError>;
}
