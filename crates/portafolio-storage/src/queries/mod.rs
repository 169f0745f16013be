// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for CRUD operations on storage entities.

pub mod contacts;
pub mod profile;
pub mod project_images;
pub mod projects;
pub mod skills;
