// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Portafolio.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Portafolio configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PortafolioConfig {
    /// Site identity and logging.
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// URL prefixes for uploaded media and static assets.
    #[serde(default)]
    pub media: MediaConfig,
}

/// Site identity. Read once at startup and never mutated.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Title shown in the browser tab of public pages.
    #[serde(default = "default_title")]
    pub title: String,

    /// Header text for the administration tool. Exposed for an external
    /// admin front end; the public site does not render it.
    #[serde(default = "default_admin_header")]
    pub admin_header: String,

    /// Browser title for the administration tool, read by the same external
    /// admin front end.
    #[serde(default = "default_admin_title")]
    pub admin_title: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            admin_header: default_admin_header(),
            admin_title: default_admin_title(),
            log_level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "Portafolio".to_string()
}

fn default_admin_header() -> String {
    "Administración del Portafolio".to_string()
}

fn default_admin_title() -> String {
    "Portafolio Admin".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port to bind the HTTP server to.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("portafolio").join("portafolio.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("portafolio.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// URL prefixes used when rendering asset references.
///
/// Serving the files themselves is left to the front proxy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MediaConfig {
    /// Prefix prepended to stored image paths.
    #[serde(default = "default_media_url")]
    pub media_url: String,

    /// Prefix for stylesheets and scripts.
    #[serde(default = "default_static_url")]
    pub static_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            media_url: default_media_url(),
            static_url: default_static_url(),
        }
    }
}

fn default_media_url() -> String {
    "/media/".to_string()
}

fn default_static_url() -> String {
    "/static/".to_string()
}
