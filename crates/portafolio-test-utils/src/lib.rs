// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Portafolio integration tests.
//!
//! # Components
//!
//! - [`TestHarness`] - temp SQLite database, services, and the HTTP router
//! - [`fixtures`] - ready-made drafts and profiles

pub mod fixtures;
pub mod harness;

pub use harness::TestHarness;
