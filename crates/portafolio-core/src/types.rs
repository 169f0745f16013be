// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared by the stores, services, and the gateway.
//!
//! Persisted records carry their row id; the `*Draft` types are the
//! attribute sets accepted by create and update operations.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Current UTC time as stored in timestamp columns (`YYYY-MM-DDTHH:MM:SS.sssZ`).
///
/// The fixed width makes lexicographic order match chronological order.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Health status reported by storage health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Backend is fully operational.
    Healthy,
    /// Backend is operational but experiencing issues.
    Degraded(String),
    /// Backend is not operational.
    Unhealthy(String),
}

/// Which list a skill belongs to on the public page.
///
/// Stored and serialized as the lowercase tag kept in `skills.category`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum SkillCategory {
    #[strum(serialize = "tecnica")]
    #[serde(rename = "tecnica")]
    Technical,
    #[strum(serialize = "personal")]
    #[serde(rename = "personal")]
    Personal,
}

impl SkillCategory {
    /// The value stored in the `skills.category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "tecnica",
            SkillCategory::Personal => "personal",
        }
    }

    /// Heading of the skill list on the public page.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Técnicas",
            SkillCategory::Personal => "Personales",
        }
    }
}

/// A technical or personal skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: SkillCategory,
    /// Icon class or symbol; may be blank.
    pub icon: String,
    pub display_order: i32,
    pub active: bool,
}

/// Attributes of a skill for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl SkillDraft {
    /// A draft with the model defaults: no icon, order 0, active.
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            category,
            icon: String::new(),
            display_order: 0,
            active: true,
        }
    }
}

/// Filter for skill listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillFilter {
    /// Restrict to one category.
    pub category: Option<SkillCategory>,
    /// Exclude inactive skills.
    pub active_only: bool,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Path of the primary image asset, relative to the media root.
    pub primary_image: String,
    pub source_url: String,
    pub demo_url: Option<String>,
    /// Comma-delimited technology tags as entered.
    pub technologies: String,
    pub display_order: i32,
    pub featured: bool,
    pub active: bool,
    /// Set once at creation.
    pub created_at: String,
    /// Refreshed on every update.
    pub updated_at: String,
}

impl Project {
    /// Technology tags as an ordered list of trimmed, non-empty tokens.
    pub fn technology_list(&self) -> Vec<&str> {
        split_technologies(&self.technologies)
    }
}

/// Split comma-delimited technology text into trimmed tokens, dropping empty ones.
pub fn split_technologies(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Attributes of a project for create and update.
///
/// Timestamps are not part of the draft: the store stamps them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub primary_image: String,
    pub source_url: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    pub technologies: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A screenshot in a project's carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub id: i64,
    pub project_id: i64,
    pub image: String,
    pub caption: String,
    pub display_order: i32,
}

/// Attributes of a project image for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImageDraft {
    pub image: String,
    pub caption: String,
    #[serde(default)]
    pub display_order: i32,
}

/// A project together with its ordered images, as shown on the public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectWithImages {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<ProjectImage>,
    /// Derived from `project.technologies`.
    pub technology_list: Vec<String>,
}

impl ProjectWithImages {
    pub fn new(project: Project, images: Vec<ProjectImage>) -> Self {
        let technology_list = project
            .technology_list()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            project,
            images,
            technology_list,
        }
    }
}

/// The single site-owner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub nickname: String,
    pub title: String,
    pub bio: String,
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    pub email: String,
    /// Path of the contact-section illustration asset.
    #[serde(default)]
    pub illustration: Option<String>,
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Set once at creation.
    pub submitted_at: String,
    pub read: bool,
}

/// A validated contact message ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: String,
}

fn default_true() -> bool {
    true
}
