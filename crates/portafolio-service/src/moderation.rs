// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated write operations for administration tools.
//!
//! Drafts are trimmed and checked here before they reach the store, so the
//! store only ever sees well-formed values. Contact messages can be read and
//! have their read flag toggled, nothing else.

use std::sync::Arc;

use tracing::info;

use portafolio_core::types::{
    ContactMessage, Profile, Project, ProjectDraft, ProjectImage, ProjectImageDraft, Skill,
    SkillDraft, SkillFilter,
};
use portafolio_core::validate::{self, URL_MAX_CHARS};
use portafolio_core::{PortafolioError, StorageAdapter, ValidationErrors};

const SKILL_NAME_MAX: usize = 100;
const SKILL_ICON_MAX: usize = 50;
const PROJECT_TITLE_MAX: usize = 200;
const PROJECT_TECHNOLOGIES_MAX: usize = 300;
const IMAGE_CAPTION_MAX: usize = 200;
const PROFILE_FULL_NAME_MAX: usize = 100;
const PROFILE_NICKNAME_MAX: usize = 50;
const PROFILE_TITLE_MAX: usize = 200;

/// Administration contract over both stores.
#[derive(Clone)]
pub struct Moderation {
    storage: Arc<dyn StorageAdapter>,
}

impl Moderation {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    // --- Skills ---

    pub async fn create_skill(&self, draft: SkillDraft) -> Result<Skill, PortafolioError> {
        let draft = normalize_skill(draft)?;
        let skill = self.storage.create_skill(&draft).await?;
        info!(skill_id = skill.id, category = %skill.category, "skill created");
        Ok(skill)
    }

    pub async fn update_skill(&self, id: i64, draft: SkillDraft) -> Result<Skill, PortafolioError> {
        let draft = normalize_skill(draft)?;
        let skill = self.storage.update_skill(id, &draft).await?;
        info!(skill_id = id, "skill updated");
        Ok(skill)
    }

    pub async fn delete_skill(&self, id: i64) -> Result<(), PortafolioError> {
        self.storage.delete_skill(id).await?;
        info!(skill_id = id, "skill deleted");
        Ok(())
    }

    pub async fn get_skill(&self, id: i64) -> Result<Option<Skill>, PortafolioError> {
        self.storage.get_skill(id).await
    }

    /// Every skill, active or not, optionally narrowed to one category.
    pub async fn list_skills(&self, filter: SkillFilter) -> Result<Vec<Skill>, PortafolioError> {
        self.storage.list_skills(filter).await
    }

    // --- Projects ---

    pub async fn create_project(&self, draft: ProjectDraft) -> Result<Project, PortafolioError> {
        let draft = normalize_project(draft)?;
        let project = self.storage.create_project(&draft).await?;
        info!(project_id = project.id, "project created");
        Ok(project)
    }

    pub async fn update_project(
        &self,
        id: i64,
        draft: ProjectDraft,
    ) -> Result<Project, PortafolioError> {
        let draft = normalize_project(draft)?;
        let project = self.storage.update_project(id, &draft).await?;
        info!(project_id = id, "project updated");
        Ok(project)
    }

    /// Delete a project together with its images.
    pub async fn delete_project(&self, id: i64) -> Result<(), PortafolioError> {
        self.storage.delete_project(id).await?;
        info!(project_id = id, "project deleted");
        Ok(())
    }

    pub async fn get_project(&self, id: i64) -> Result<Option<Project>, PortafolioError> {
        self.storage.get_project(id).await
    }

    pub async fn list_projects(&self, active_only: bool) -> Result<Vec<Project>, PortafolioError> {
        self.storage.list_projects(active_only).await
    }

    // --- Project images ---

    pub async fn add_project_image(
        &self,
        project_id: i64,
        draft: ProjectImageDraft,
    ) -> Result<ProjectImage, PortafolioError> {
        let draft = normalize_image(draft)?;
        let image = self.storage.add_project_image(project_id, &draft).await?;
        info!(project_id, image_id = image.id, "project image added");
        Ok(image)
    }

    pub async fn update_project_image(
        &self,
        id: i64,
        draft: ProjectImageDraft,
    ) -> Result<ProjectImage, PortafolioError> {
        let draft = normalize_image(draft)?;
        self.storage.update_project_image(id, &draft).await
    }

    pub async fn delete_project_image(&self, id: i64) -> Result<(), PortafolioError> {
        self.storage.delete_project_image(id).await?;
        info!(image_id = id, "project image deleted");
        Ok(())
    }

    pub async fn list_project_images(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectImage>, PortafolioError> {
        self.storage.list_project_images(project_id).await
    }

    // --- Profile ---

    /// Create the profile. Once it exists this always fails with
    /// [`PortafolioError::SingletonViolation`]; use [`Self::update_profile`].
    pub async fn create_profile(&self, profile: Profile) -> Result<Profile, PortafolioError> {
        let profile = normalize_profile(profile)?;
        self.storage.create_profile(&profile).await?;
        info!("profile created");
        Ok(profile)
    }

    pub async fn update_profile(&self, profile: Profile) -> Result<Profile, PortafolioError> {
        let profile = normalize_profile(profile)?;
        self.storage.update_profile(&profile).await?;
        info!("profile updated");
        Ok(profile)
    }

    pub async fn get_profile(&self) -> Result<Option<Profile>, PortafolioError> {
        self.storage.get_profile().await
    }

    // --- Contact messages ---

    /// Messages newest first; `read` narrows to read or unread ones.
    pub async fn list_messages(
        &self,
        read: Option<bool>,
    ) -> Result<Vec<ContactMessage>, PortafolioError> {
        self.storage.list_contact_messages(read).await
    }

    pub async fn get_message(&self, id: i64) -> Result<Option<ContactMessage>, PortafolioError> {
        self.storage.get_contact_message(id).await
    }

    /// Mark messages as read. Returns how many existed and were updated.
    pub async fn mark_read(&self, ids: &[i64]) -> Result<usize, PortafolioError> {
        self.set_read(ids, true).await
    }

    /// Mark messages as unread. Returns how many existed and were updated.
    pub async fn mark_unread(&self, ids: &[i64]) -> Result<usize, PortafolioError> {
        self.set_read(ids, false).await
    }

    async fn set_read(&self, ids: &[i64], read: bool) -> Result<usize, PortafolioError> {
        let updated = self.storage.set_contact_messages_read(ids, read).await?;
        info!(requested = ids.len(), updated, read, "contact messages toggled");
        Ok(updated)
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn normalize_skill(mut d: SkillDraft) -> Result<SkillDraft, PortafolioError> {
    trim_in_place(&mut d.name);
    trim_in_place(&mut d.icon);

    let mut errors = ValidationErrors::new();
    validate::required(&mut errors, "name", &d.name, Some(SKILL_NAME_MAX));
    validate::max_length(&mut errors, "icon", &d.icon, Some(SKILL_ICON_MAX));
    errors.into_result()?;
    Ok(d)
}

fn normalize_project(mut d: ProjectDraft) -> Result<ProjectDraft, PortafolioError> {
    trim_in_place(&mut d.title);
    trim_in_place(&mut d.description);
    trim_in_place(&mut d.primary_image);
    trim_in_place(&mut d.source_url);
    trim_in_place(&mut d.technologies);
    d.demo_url = validate::blank_to_none(d.demo_url);

    let mut errors = ValidationErrors::new();
    validate::required(&mut errors, "title", &d.title, Some(PROJECT_TITLE_MAX));
    validate::required(&mut errors, "description", &d.description, None);
    validate::required(&mut errors, "primary_image", &d.primary_image, None);
    validate::url(&mut errors, "source_url", &d.source_url);
    validate::optional_url(&mut errors, "demo_url", d.demo_url.as_deref());
    validate::required(
        &mut errors,
        "technologies",
        &d.technologies,
        Some(PROJECT_TECHNOLOGIES_MAX),
    );
    errors.into_result()?;
    Ok(d)
}

fn normalize_image(mut d: ProjectImageDraft) -> Result<ProjectImageDraft, PortafolioError> {
    trim_in_place(&mut d.image);
    trim_in_place(&mut d.caption);

    let mut errors = ValidationErrors::new();
    validate::required(&mut errors, "image", &d.image, None);
    validate::required(&mut errors, "caption", &d.caption, Some(IMAGE_CAPTION_MAX));
    errors.into_result()?;
    Ok(d)
}

fn normalize_profile(mut p: Profile) -> Result<Profile, PortafolioError> {
    trim_in_place(&mut p.full_name);
    trim_in_place(&mut p.nickname);
    trim_in_place(&mut p.title);
    trim_in_place(&mut p.bio);
    trim_in_place(&mut p.github_url);
    trim_in_place(&mut p.email);
    p.linkedin_url = validate::blank_to_none(p.linkedin_url);
    p.illustration = validate::blank_to_none(p.illustration);

    let mut errors = ValidationErrors::new();
    validate::required(&mut errors, "full_name", &p.full_name, Some(PROFILE_FULL_NAME_MAX));
    validate::required(&mut errors, "nickname", &p.nickname, Some(PROFILE_NICKNAME_MAX));
    validate::required(&mut errors, "title", &p.title, Some(PROFILE_TITLE_MAX));
    validate::required(&mut errors, "bio", &p.bio, None);
    validate::url(&mut errors, "github_url", &p.github_url);
    validate::optional_url(&mut errors, "linkedin_url", p.linkedin_url.as_deref());
    validate::email(&mut errors, "email", &p.email);
    if let Some(illustration) = &p.illustration {
        validate::max_length(&mut errors, "illustration", illustration, Some(URL_MAX_CHARS));
    }
    errors.into_result()?;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::storage;
    use portafolio_core::SkillCategory;

    fn project() -> ProjectDraft {
        ProjectDraft {
            title: "Portafolio".to_string(),
            description: "Mi sitio".to_string(),
            primary_image: "proyectos/portafolio.png".to_string(),
            source_url: "https://github.com/example/portafolio".to_string(),
            demo_url: Some("   ".to_string()),
            technologies: "Rust, axum".to_string(),
            display_order: 0,
            featured: true,
            active: true,
        }
    }

    fn profile() -> Profile {
        Profile {
            full_name: "Sofía Lagos".to_string(),
            nickname: "tori".to_string(),
            title: "desarrolladora full stack".to_string(),
            bio: "Hola".to_string(),
            github_url: "https://github.com/example".to_string(),
            linkedin_url: Some(String::new()),
            email: "sofia@example.com".to_string(),
            illustration: None,
        }
    }

    #[tokio::test]
    async fn project_with_blank_demo_url_stores_none() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);
        let created = moderation.create_project(project()).await.unwrap();
        assert_eq!(created.demo_url, None);
    }

    #[tokio::test]
    async fn project_validation_collects_every_field() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage.clone());

        let bad = ProjectDraft {
            title: "t".repeat(PROJECT_TITLE_MAX + 1),
            source_url: "github.com/sin-esquema".to_string(),
            demo_url: Some("nope".to_string()),
            technologies: String::new(),
            ..project()
        };
        let err = moderation.create_project(bad).await.unwrap_err();
        assert_eq!(
            err.validation().unwrap().fields(),
            vec!["title", "source_url", "demo_url", "technologies"]
        );
        assert!(storage.list_projects(false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn skill_icon_length_is_checked() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);
        let mut draft = SkillDraft::new("Rust", SkillCategory::Technical);
        draft.icon = "i".repeat(SKILL_ICON_MAX + 1);

        let err = moderation.create_skill(draft).await.unwrap_err();
        assert_eq!(err.validation().unwrap().fields(), vec!["icon"]);
    }

    #[tokio::test]
    async fn skill_crud_round_trip() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);

        let skill = moderation
            .create_skill(SkillDraft::new("  Python ", SkillCategory::Technical))
            .await
            .unwrap();
        assert_eq!(skill.name, "Python");

        let mut edit = SkillDraft::new("Python", SkillCategory::Technical);
        edit.active = false;
        moderation.update_skill(skill.id, edit).await.unwrap();
        assert!(!moderation.get_skill(skill.id).await.unwrap().unwrap().active);

        moderation.delete_skill(skill.id).await.unwrap();
        assert!(moderation.list_skills(SkillFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn image_for_missing_project_is_not_found() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);
        let err = moderation
            .add_project_image(
                12,
                ProjectImageDraft {
                    image: "a.png".to_string(),
                    caption: "A".to_string(),
                    display_order: 0,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PortafolioError::NotFound { entity: "project", id: 12 }));
    }

    #[tokio::test]
    async fn deleting_project_removes_only_its_images() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);
        let doomed = moderation.create_project(project()).await.unwrap();
        let kept = moderation.create_project(project()).await.unwrap();
        for p in [doomed.id, kept.id] {
            moderation
                .add_project_image(
                    p,
                    ProjectImageDraft {
                        image: format!("{p}.png"),
                        caption: "captura".to_string(),
                        display_order: 0,
                    },
                )
                .await
                .unwrap();
        }

        moderation.delete_project(doomed.id).await.unwrap();
        assert!(moderation.list_project_images(doomed.id).await.unwrap().is_empty());
        assert_eq!(moderation.list_project_images(kept.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn profile_is_create_once_then_edit() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);

        let created = moderation.create_profile(profile()).await.unwrap();
        assert_eq!(created.linkedin_url, None);

        let err = moderation.create_profile(profile()).await.unwrap_err();
        assert!(matches!(err, PortafolioError::SingletonViolation { .. }));

        let mut edit = profile();
        edit.nickname = "sofi".to_string();
        moderation.update_profile(edit).await.unwrap();
        assert_eq!(moderation.get_profile().await.unwrap().unwrap().nickname, "sofi");
    }

    #[tokio::test]
    async fn profile_validation_checks_urls_and_email() {
        let (storage, _dir) = storage().await;
        let moderation = Moderation::new(storage);
        let bad = Profile {
            github_url: "no es url".to_string(),
            linkedin_url: Some("tampoco".to_string()),
            email: "sin-arroba".to_string(),
            ..profile()
        };
        let err = moderation.create_profile(bad).await.unwrap_err();
        assert_eq!(
            err.validation().unwrap().fields(),
            vec!["github_url", "linkedin_url", "email"]
        );
        assert!(moderation.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bulk_read_toggle_updates_exactly_the_set() {
        let (storage, _dir) = storage().await;
        let intake = crate::ContactIntake::new(storage.clone());
        let moderation = Moderation::new(storage);

        let a = intake.submit("A", "a@example.com", "uno").await.unwrap();
        let b = intake.submit("B", "b@example.com", "dos").await.unwrap();
        let c = intake.submit("C", "c@example.com", "tres").await.unwrap();

        assert_eq!(moderation.mark_read(&[a.id, c.id]).await.unwrap(), 2);
        let unread: Vec<i64> = moderation
            .list_messages(Some(false))
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(unread, vec![b.id]);

        assert_eq!(moderation.mark_unread(&[a.id, 4242]).await.unwrap(), 1);
        assert!(!moderation.get_message(a.id).await.unwrap().unwrap().read);
        assert!(moderation.get_message(c.id).await.unwrap().unwrap().read);
    }
}
