// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the full stack over a temp SQLite database: storage,
//! the three services, and the axum router. Drive requests through
//! [`TestHarness::router`] with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;

use portafolio_config::model::{PortafolioConfig, StorageConfig};
use portafolio_core::types::{Profile, Project, ProjectDraft, ProjectImage, Skill, SkillDraft};
use portafolio_core::{PortafolioError, StorageAdapter};
use portafolio_gateway::{AppState, build_router};
use portafolio_service::{ContactIntake, Moderation, QueryService};
use portafolio_storage::SqliteStorage;

use crate::fixtures;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    config: PortafolioConfig,
    profile: Option<Profile>,
    initialize: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: PortafolioConfig::default(),
            profile: None,
            initialize: true,
        }
    }

    /// Set the site title shown on public pages.
    pub fn with_site_title(mut self, title: &str) -> Self {
        self.config.site.title = title.to_string();
        self
    }

    /// Set the prefix prepended to stored image paths.
    pub fn with_media_url(mut self, media_url: &str) -> Self {
        self.config.media.media_url = media_url.to_string();
        self
    }

    /// Create this profile during `build`.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Create the fixture profile during `build`.
    pub fn with_default_profile(self) -> Self {
        self.with_profile(fixtures::profile())
    }

    /// Leave storage uninitialized so every query fails.
    pub fn with_broken_storage(mut self) -> Self {
        self.initialize = false;
        self
    }

    /// Build the test harness, creating all required subsystems.
    pub async fn build(self) -> Result<TestHarness, PortafolioError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| PortafolioError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let mut config = self.config;
        config.storage = StorageConfig {
            database_path: db_path.to_string_lossy().into_owned(),
            wal_mode: true,
        };

        let storage = SqliteStorage::new(config.storage.clone());
        if self.initialize {
            storage.initialize().await?;
        }
        let storage: Arc<dyn StorageAdapter> = Arc::new(storage);

        if let Some(profile) = &self.profile {
            storage.create_profile(profile).await?;
        }

        let state = AppState::new(storage.clone(), &config)?;

        Ok(TestHarness {
            query: QueryService::new(storage.clone()),
            intake: ContactIntake::new(storage.clone()),
            moderation: Moderation::new(storage.clone()),
            storage,
            state,
            config,
            _temp_dir: temp_dir,
        })
    }
}

/// A complete test environment over temp storage.
pub struct TestHarness {
    /// SQLite storage (temp DB, cleaned up on drop).
    pub storage: Arc<dyn StorageAdapter>,
    pub query: QueryService,
    pub intake: ContactIntake,
    pub moderation: Moderation,
    /// Handler state shared with [`Self::router`].
    pub state: AppState,
    pub config: PortafolioConfig,
    /// Temp directory kept alive for cleanup on drop.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// A fresh router over this harness's state.
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Create a project through the moderation service.
    pub async fn seed_project(&self, draft: ProjectDraft) -> Result<Project, PortafolioError> {
        self.moderation.create_project(draft).await
    }

    /// Create an active fixture project with `images` captioned in order.
    pub async fn seed_project_with_images(
        &self,
        title: &str,
        display_order: i32,
        images: &[&str],
    ) -> Result<(Project, Vec<ProjectImage>), PortafolioError> {
        let project = self.seed_project(fixtures::project(title, display_order)).await?;
        let mut stored = Vec::with_capacity(images.len());
        for (i, caption) in images.iter().enumerate() {
            let order = i32::try_from(i).unwrap_or(i32::MAX);
            stored.push(
                self.moderation
                    .add_project_image(project.id, fixtures::image(caption, order))
                    .await?,
            );
        }
        Ok((project, stored))
    }

    /// Create a skill through the moderation service.
    pub async fn seed_skill(&self, draft: SkillDraft) -> Result<Skill, PortafolioError> {
        self.moderation.create_skill(draft).await
    }
}
