// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind addresses, non-empty paths, and URL prefix shapes.

use crate::diagnostic::ConfigError;
use crate::model::PortafolioConfig;

/// Log levels accepted by `site.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PortafolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let addr = config.server.bind_address.trim();
    if addr.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.bind_address must not be empty".to_string(),
        });
    } else {
        // Accept valid IPv4, IPv6, or hostname patterns
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "server.bind_address `{addr}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if config.server.port == 0 {
        errors.push(ConfigError::Validation {
            message: "server.port must be between 1 and 65535".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    for (key, prefix) in [
        ("media.media_url", &config.media.media_url),
        ("media.static_url", &config.media.static_url),
    ] {
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            errors.push(ConfigError::Validation {
                message: format!("{key} must start and end with `/`, got `{prefix}`"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.site.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "site.log_level `{}` is not one of: {}",
                config.site.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.site.title.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "site.title must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
