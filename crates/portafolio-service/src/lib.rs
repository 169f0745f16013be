// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application services for Portafolio.
//!
//! - [`QueryService`]: read-only views of the public content.
//! - [`ContactIntake`]: validates and records contact form submissions.
//! - [`Moderation`]: the validated write contract used by administration tools.
//!
//! Every service holds an `Arc<dyn StorageAdapter>` and is cheap to clone.

pub mod intake;
pub mod moderation;
pub mod query;

pub use intake::ContactIntake;
pub use moderation::Moderation;
pub use query::{HomePage, QueryService};
