// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact form intake.

use std::sync::Arc;

use tracing::{debug, info};

use portafolio_core::types::{ContactMessage, NewContactMessage, now_timestamp};
use portafolio_core::validate;
use portafolio_core::{PortafolioError, StorageAdapter, ValidationErrors};

/// Maximum characters in a sender name.
pub const NAME_MAX_CHARS: usize = 100;

/// Validates contact submissions and records the accepted ones.
#[derive(Clone)]
pub struct ContactIntake {
    storage: Arc<dyn StorageAdapter>,
}

impl ContactIntake {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// Validate and persist a contact message.
    ///
    /// Inputs are trimmed before validation. Every failing field is reported
    /// under `name`, `email` or `message`; on failure nothing is stored.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, PortafolioError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());

        let mut errors = ValidationErrors::new();
        validate::required(&mut errors, "name", name, Some(NAME_MAX_CHARS));
        validate::email(&mut errors, "email", email);
        validate::required(&mut errors, "message", message, None);
        if !errors.is_empty() {
            debug!(fields = ?errors.fields(), "contact submission rejected");
            return Err(PortafolioError::Validation(errors));
        }

        let stored = self
            .storage
            .insert_contact_message(&NewContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
                submitted_at: now_timestamp(),
            })
            .await?;
        info!(message_id = stored.id, "contact message received");
        Ok(stored)
    }
}
