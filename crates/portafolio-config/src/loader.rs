// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./portafolio.toml` > `~/.config/portafolio/portafolio.toml`
//! > `/etc/portafolio/portafolio.toml` with environment variable overrides via
//! the `PORTAFOLIO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PortafolioConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/portafolio/portafolio.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "portafolio.toml";

/// Path of the per-user configuration file, if a config directory is known.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("portafolio").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/portafolio/portafolio.toml` (system-wide)
/// 3. `~/.config/portafolio/portafolio.toml` (user XDG config)
/// 4. `./portafolio.toml` (local directory)
/// 5. `PORTAFOLIO_*` environment variables
pub fn load_config() -> Result<PortafolioConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PortafolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PortafolioConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PortafolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PortafolioConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PortafolioConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `PORTAFOLIO_STORAGE_DATABASE_PATH` must map to
/// `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("PORTAFOLIO_").map(|key| {
        // figment hands over the original case, e.g. `SITE_LOG_LEVEL`.
        let key_str = key.as_str().to_ascii_lowercase();
        map_env_key(&key_str).into()
    })
}

const SECTIONS: [&str; 4] = ["site", "server", "storage", "media"];

/// `storage_database_path` -> `storage.database_path`. Keys outside a known
/// section pass through unchanged so `deny_unknown_fields` reports them.
fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
