// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for Portafolio.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and typed CRUD operations for the
//! content store (skills, projects, project images, profile) and the intake
//! store (contact messages).
//!
//! All writes are serialized through `tokio-rusqlite`'s single background
//! thread: [`Database`] wraps the one connection, and every query module takes
//! `&Database` and goes through `connection().call()`. Do not open additional
//! connections for writes.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;

pub use adapter::SqliteStorage;
pub use database::Database;
