// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only views of the public content.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use portafolio_core::types::{Profile, ProjectWithImages, Skill, SkillFilter};
use portafolio_core::{PortafolioError, SkillCategory, StorageAdapter};

/// Everything the home page shows, read in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub profile: Option<Profile>,
    pub projects: Vec<ProjectWithImages>,
    pub technical_skills: Vec<Skill>,
    pub personal_skills: Vec<Skill>,
}

/// Ordered, filtered reads for the public pages. Never writes.
#[derive(Clone)]
pub struct QueryService {
    storage: Arc<dyn StorageAdapter>,
}

impl QueryService {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// The site owner's profile, or `None` if it has not been created yet.
    pub async fn get_profile(&self) -> Result<Option<Profile>, PortafolioError> {
        self.storage.get_profile().await
    }

    /// Active projects with their images, by display order then newest first.
    pub async fn list_active_projects(&self) -> Result<Vec<ProjectWithImages>, PortafolioError> {
        self.storage.list_active_projects_with_images().await
    }

    /// Active skills of one category, by display order.
    pub async fn list_skills(&self, category: SkillCategory) -> Result<Vec<Skill>, PortafolioError> {
        self.storage
            .list_skills(SkillFilter {
                category: Some(category),
                active_only: true,
            })
            .await
    }

    /// Compose the home page view.
    pub async fn home_page(&self) -> Result<HomePage, PortafolioError> {
        let page = HomePage {
            profile: self.get_profile().await?,
            projects: self.list_active_projects().await?,
            technical_skills: self.list_skills(SkillCategory::Technical).await?,
            personal_skills: self.list_skills(SkillCategory::Personal).await?,
        };
        debug!(
            has_profile = page.profile.is_some(),
            projects = page.projects.len(),
            technical = page.technical_skills.len(),
            personal = page.personal_skills.len(),
            "home page assembled"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::storage;
    use portafolio_core::types::{ProjectDraft, ProjectImageDraft, SkillDraft};

    fn project(title: &str, order: i32, active: bool) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: String::new(),
            primary_image: "proyectos/x.png".to_string(),
            source_url: "https://github.com/example/x".to_string(),
            demo_url: None,
            technologies: "Python, Django, Bootstrap".to_string(),
            display_order: order,
            featured: false,
            active,
        }
    }

    fn skill(name: &str, category: SkillCategory, order: i32, active: bool) -> SkillDraft {
        SkillDraft {
            display_order: order,
            active,
            ..SkillDraft::new(name, category)
        }
    }

    #[tokio::test]
    async fn missing_profile_is_none_not_error() {
        let (storage, _dir) = storage().await;
        let query = QueryService::new(storage);
        assert!(query.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn inactive_projects_never_listed() {
        let (storage, _dir) = storage().await;
        storage.create_project(&project("Visible", 0, true)).await.unwrap();
        storage.create_project(&project("Oculto", 0, false)).await.unwrap();

        let query = QueryService::new(storage);
        let listed = query.list_active_projects().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|p| p.project.active));
    }

    #[tokio::test]
    async fn active_projects_sorted_by_order_then_created_desc() {
        let (storage, _dir) = storage().await;
        let late = storage.create_project(&project("Tarde", 5, true)).await.unwrap();
        let first = storage.create_project(&project("Primero", 0, true)).await.unwrap();
        let newer = storage.create_project(&project("Nuevo", 0, true)).await.unwrap();

        let query = QueryService::new(storage);
        let listed: Vec<i64> = query
            .list_active_projects()
            .await
            .unwrap()
            .iter()
            .map(|p| p.project.id)
            .collect();
        assert_eq!(listed, vec![newer.id, first.id, late.id]);
    }

    #[tokio::test]
    async fn active_projects_carry_images_and_tags() {
        let (storage, _dir) = storage().await;
        let p = storage.create_project(&project("Galería", 0, true)).await.unwrap();
        storage
            .add_project_image(
                p.id,
                &ProjectImageDraft {
                    image: "g/2.png".to_string(),
                    caption: "segunda".to_string(),
                    display_order: 2,
                },
            )
            .await
            .unwrap();
        storage
            .add_project_image(
                p.id,
                &ProjectImageDraft {
                    image: "g/1.png".to_string(),
                    caption: "primera".to_string(),
                    display_order: 1,
                },
            )
            .await
            .unwrap();

        let query = QueryService::new(storage);
        let listed = query.list_active_projects().await.unwrap();
        assert_eq!(listed[0].images[0].caption, "primera");
        assert_eq!(listed[0].technology_list, vec!["Python", "Django", "Bootstrap"]);
    }

    #[tokio::test]
    async fn list_skills_returns_only_active_of_category() {
        let (storage, _dir) = storage().await;
        storage
            .create_skill(&skill("Rust", SkillCategory::Technical, 2, true))
            .await
            .unwrap();
        storage
            .create_skill(&skill("SQL", SkillCategory::Technical, 1, true))
            .await
            .unwrap();
        storage
            .create_skill(&skill("Perl", SkillCategory::Technical, 0, false))
            .await
            .unwrap();
        storage
            .create_skill(&skill("Liderazgo", SkillCategory::Personal, 0, true))
            .await
            .unwrap();

        let query = QueryService::new(storage);
        let technical = query.list_skills(SkillCategory::Technical).await.unwrap();
        assert!(
            technical
                .iter()
                .all(|s| s.active && s.category == SkillCategory::Technical)
        );
        let names: Vec<&str> = technical.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["SQL", "Rust"]);
    }

    #[tokio::test]
    async fn home_page_splits_skills_by_category() {
        let (storage, _dir) = storage().await;
        storage
            .create_skill(&skill("Rust", SkillCategory::Technical, 0, true))
            .await
            .unwrap();
        storage
            .create_skill(&skill("Empatía", SkillCategory::Personal, 0, true))
            .await
            .unwrap();

        let page = QueryService::new(storage).home_page().await.unwrap();
        assert!(page.profile.is_none());
        assert!(page.projects.is_empty());
        assert_eq!(page.technical_skills.len(), 1);
        assert_eq!(page.personal_skills[0].name, "Empatía");
    }
}
