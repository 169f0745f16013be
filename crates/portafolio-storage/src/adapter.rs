// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the content and intake stores.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use portafolio_config::model::StorageConfig;
use portafolio_core::types::{
    ContactMessage, NewContactMessage, Profile, Project, ProjectDraft, ProjectImage,
    ProjectImageDraft, ProjectWithImages, Skill, SkillDraft, SkillFilter,
};
use portafolio_core::{ContentStore, HealthStatus, IntakeStore, PortafolioError, StorageAdapter};

use crate::database::{Database, map_tr_err};
use crate::queries;

/// SQLite-backed storage.
///
/// The database is opened by [`StorageAdapter::initialize`]; every other
/// operation fails with a storage error until then.
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a storage handle. No file is touched until `initialize`.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, PortafolioError> {
        self.db.get().ok_or_else(|| PortafolioError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn initialize(&self) -> Result<(), PortafolioError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| PortafolioError::Storage {
            source: "storage already initialized".into(),
        })?;
        info!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), PortafolioError> {
        self.db()?.close().await
    }

    async fn health_check(&self) -> Result<HealthStatus, PortafolioError> {
        let db = self.db()?;
        let result = db
            .connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err);
        match result {
            Ok(()) => Ok(HealthStatus::Healthy),
            Err(e) => {
                debug!(error = %e, "storage health probe failed");
                Ok(HealthStatus::Unhealthy(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl ContentStore for SqliteStorage {
    // --- Skills ---

    async fn create_skill(&self, skill: &SkillDraft) -> Result<Skill, PortafolioError> {
        queries::skills::create_skill(self.db()?, skill).await
    }

    async fn get_skill(&self, id: i64) -> Result<Option<Skill>, PortafolioError> {
        queries::skills::get_skill(self.db()?, id).await
    }

    async fn update_skill(&self, id: i64, skill: &SkillDraft) -> Result<Skill, PortafolioError> {
        queries::skills::update_skill(self.db()?, id, skill).await
    }

    async fn delete_skill(&self, id: i64) -> Result<(), PortafolioError> {
        queries::skills::delete_skill(self.db()?, id).await
    }

    async fn list_skills(&self, filter: SkillFilter) -> Result<Vec<Skill>, PortafolioError> {
        queries::skills::list_skills(self.db()?, filter).await
    }

    // --- Projects ---

    async fn create_project(&self, project: &ProjectDraft) -> Result<Project, PortafolioError> {
        queries::projects::create_project(self.db()?, project).await
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>, PortafolioError> {
        queries::projects::get_project(self.db()?, id).await
    }

    async fn update_project(
        &self,
        id: i64,
        project: &ProjectDraft,
    ) -> Result<Project, PortafolioError> {
        queries::projects::update_project(self.db()?, id, project).await
    }

    async fn delete_project(&self, id: i64) -> Result<(), PortafolioError> {
        queries::projects::delete_project(self.db()?, id).await
    }

    async fn list_projects(&self, active_only: bool) -> Result<Vec<Project>, PortafolioError> {
        queries::projects::list_projects(self.db()?, active_only).await
    }

    async fn list_active_projects_with_images(
        &self,
    ) -> Result<Vec<ProjectWithImages>, PortafolioError> {
        queries::projects::list_active_projects_with_images(self.db()?).await
    }

    // --- Project images ---

    async fn add_project_image(
        &self,
        project_id: i64,
        image: &ProjectImageDraft,
    ) -> Result<ProjectImage, PortafolioError> {
        queries::project_images::add_project_image(self.db()?, project_id, image).await
    }

    async fn update_project_image(
        &self,
        id: i64,
        image: &ProjectImageDraft,
    ) -> Result<ProjectImage, PortafolioError> {
        queries::project_images::update_project_image(self.db()?, id, image).await
    }

    async fn delete_project_image(&self, id: i64) -> Result<(), PortafolioError> {
        queries::project_images::delete_project_image(self.db()?, id).await
    }

    async fn list_project_images(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectImage>, PortafolioError> {
        queries::project_images::list_project_images(self.db()?, project_id).await
    }

    // --- Profile ---

    async fn create_profile(&self, profile: &Profile) -> Result<(), PortafolioError> {
        queries::profile::create_profile(self.db()?, profile).await
    }

    async fn update_profile(&self, profile: &Profile) -> Result<(), PortafolioError> {
        queries::profile::update_profile(self.db()?, profile).await
    }

    async fn get_profile(&self) -> Result<Option<Profile>, PortafolioError> {
        queries::profile::get_profile(self.db()?).await
    }
}

#[async_trait]
impl IntakeStore for SqliteStorage {
    async fn insert_contact_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, PortafolioError> {
        queries::contacts::insert_contact_message(self.db()?, message).await
    }

    async fn get_contact_message(&self, id: i64) -> Result<Option<ContactMessage>, PortafolioError> {
        queries::contacts::get_contact_message(self.db()?, id).await
    }

    async fn list_contact_messages(
        &self,
        read: Option<bool>,
    ) -> Result<Vec<ContactMessage>, PortafolioError> {
        queries::contacts::list_contact_messages(self.db()?, read).await
    }

    async fn set_contact_messages_read(
        &self,
        ids: &[i64],
        read: bool,
    ) -> Result<usize, PortafolioError> {
        queries::contacts::set_contact_messages_read(self.db()?, ids, read).await
    }
}
