// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content store trait: skills, projects, project images, and the profile.

use async_trait::async_trait;

use crate::error::PortafolioError;
use crate::types::{
    Profile, Project, ProjectDraft, ProjectImage, ProjectImageDraft, ProjectWithImages, Skill,
    SkillDraft, SkillFilter,
};

/// Durable storage and referential integrity for the public content.
///
/// Update and delete operations on a missing row fail with
/// [`PortafolioError::NotFound`]. Listings come back in each entity's
/// default ordering.
#[async_trait]
pub trait ContentStore: Send + Sync {
    // --- Skills ---

    async fn create_skill(&self, skill: &SkillDraft) -> Result<Skill, PortafolioError>;

    async fn get_skill(&self, id: i64) -> Result<Option<Skill>, PortafolioError>;

    async fn update_skill(&self, id: i64, skill: &SkillDraft) -> Result<Skill, PortafolioError>;

    async fn delete_skill(&self, id: i64) -> Result<(), PortafolioError>;

    /// Skills matching `filter`, ordered by category, then display order.
    async fn list_skills(&self, filter: SkillFilter) -> Result<Vec<Skill>, PortafolioError>;

    // --- Projects ---

    /// Insert a project, stamping both timestamps with the current time.
    async fn create_project(&self, project: &ProjectDraft) -> Result<Project, PortafolioError>;

    async fn get_project(&self, id: i64) -> Result<Option<Project>, PortafolioError>;

    /// Overwrite a project's attributes, keeping `created_at` and refreshing `updated_at`.
    async fn update_project(
        &self,
        id: i64,
        project: &ProjectDraft,
    ) -> Result<Project, PortafolioError>;

    /// Delete a project and every image it owns.
    async fn delete_project(&self, id: i64) -> Result<(), PortafolioError>;

    /// Projects ordered by display order ascending, then created date descending.
    async fn list_projects(&self, active_only: bool) -> Result<Vec<Project>, PortafolioError>;

    /// Active projects with their ordered images, read as one snapshot.
    async fn list_active_projects_with_images(
        &self,
    ) -> Result<Vec<ProjectWithImages>, PortafolioError>;

    // --- Project images ---

    /// Attach an image to an existing project.
    async fn add_project_image(
        &self,
        project_id: i64,
        image: &ProjectImageDraft,
    ) -> Result<ProjectImage, PortafolioError>;

    async fn update_project_image(
        &self,
        id: i64,
        image: &ProjectImageDraft,
    ) -> Result<ProjectImage, PortafolioError>;

    async fn delete_project_image(&self, id: i64) -> Result<(), PortafolioError>;

    /// Images of one project ordered by display order ascending.
    async fn list_project_images(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectImage>, PortafolioError>;

    // --- Profile ---

    /// Create the profile. Fails with [`PortafolioError::SingletonViolation`]
    /// if one already exists.
    async fn create_profile(&self, profile: &Profile) -> Result<(), PortafolioError>;

    /// Edit the existing profile.
    async fn update_profile(&self, profile: &Profile) -> Result<(), PortafolioError>;

    async fn get_profile(&self) -> Result<Option<Profile>, PortafolioError>;
}
