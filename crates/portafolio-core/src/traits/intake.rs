// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intake store trait: persistence for contact messages.

use async_trait::async_trait;

use crate::error::PortafolioError;
use crate::types::{ContactMessage, NewContactMessage};

/// Persistence for messages submitted through the public contact form.
///
/// Messages are inserted once and never edited afterwards, except for the
/// read flag.
#[async_trait]
pub trait IntakeStore: Send + Sync {
    /// Insert a validated message with `read = false`. Returns the new row.
    async fn insert_contact_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, PortafolioError>;

    /// Fetch one message by id.
    async fn get_contact_message(&self, id: i64) -> Result<Option<ContactMessage>, PortafolioError>;

    /// List messages newest first, optionally filtered by the read flag.
    async fn list_contact_messages(
        &self,
        read: Option<bool>,
    ) -> Result<Vec<ContactMessage>, PortafolioError>;

    /// Set the read flag on every message in `ids`.
    ///
    /// Returns the number of rows updated; ids that do not exist are not counted.
    async fn set_contact_messages_read(
        &self,
        ids: &[i64],
        read: bool,
    ) -> Result<usize, PortafolioError>;
}
