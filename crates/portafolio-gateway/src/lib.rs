// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP surface of Portafolio.
//!
//! Serves the public home page with its contact form, the full project
//! listing, and a health probe. Pages are rendered server-side from templates
//! compiled into the binary; static and media files are served elsewhere.

pub mod handlers;
pub mod render;
pub mod server;

pub use render::Renderer;
pub use server::{AppState, build_router, start_server};
