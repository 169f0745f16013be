// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Portafolio.
//!
//! This crate provides the domain types, the error taxonomy, the field
//! validators used at the service boundary, and the store traits that
//! persistence backends implement.

pub mod error;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export key items at crate root for ergonomic imports.
pub use error::{FieldError, PortafolioError, ValidationErrors};
pub use types::{HealthStatus, SkillCategory};

pub use traits::{ContentStore, IntakeStore, StorageAdapter};
