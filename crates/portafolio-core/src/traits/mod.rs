// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store traits implemented by persistence backends.

pub mod content;
pub mod intake;
pub mod storage;

pub use content::ContentStore;
pub use intake::IntakeStore;
pub use storage::StorageAdapter;
