// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.

use std::path::Path;
use std::time::Duration;

use portafolio_core::PortafolioError;
use tracing::debug;

use crate::migrations;

/// How long a statement waits on a lock held by another process.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// The single SQLite connection every query runs through.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path` in WAL mode and run migrations.
    pub async fn open(path: &str) -> Result<Self, PortafolioError> {
        Self::open_with(path, true).await
    }

    /// Open the database with an explicit journal mode choice.
    ///
    /// Enables foreign keys (required for project-image cascades) and applies
    /// pending migrations before returning.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, PortafolioError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PortafolioError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| PortafolioError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<Result<(), PortafolioError>, rusqlite::Error> {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            if wal_mode {
                // journal_mode reports the resulting mode as a row.
                let mode: String =
                    conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
                debug!(journal_mode = %mode, "journal mode set");
                conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
            }
            Ok(migrations::run_migrations(conn))
        })
        .await
        .map_err(map_tr_err)??;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL into the main database file.
    pub async fn checkpoint(&self) -> Result<(), PortafolioError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint and release the connection.
    pub async fn close(&self) -> Result<(), PortafolioError> {
        self.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the storage error variant.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> PortafolioError {
    PortafolioError::Storage {
        source: Box::new(e),
    }
}

/// True if `err` is a constraint violation (unique, primary key, foreign key, check).
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
