// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample content for tests.

use portafolio_core::SkillCategory;
use portafolio_core::types::{Profile, ProjectDraft, ProjectImageDraft, SkillDraft};

/// A complete, valid profile.
pub fn profile() -> Profile {
    Profile {
        full_name: "Sofía Lagos".to_string(),
        nickname: "tori".to_string(),
        title: "desarrolladora full stack python · artista visual".to_string(),
        bio: "Programo de día e ilustro de noche.".to_string(),
        github_url: "https://github.com/example".to_string(),
        linkedin_url: Some("https://www.linkedin.com/in/example".to_string()),
        email: "sofia@example.com".to_string(),
        illustration: Some("perfil/contacto.png".to_string()),
    }
}

/// A valid active project draft with the given title and display order.
pub fn project(title: &str, display_order: i32) -> ProjectDraft {
    let slug = title.to_lowercase().replace(' ', "-");
    ProjectDraft {
        title: title.to_string(),
        description: format!("Descripción de {title}"),
        primary_image: format!("proyectos/{slug}.png"),
        source_url: format!("https://github.com/example/{slug}"),
        demo_url: None,
        technologies: "Python, Django, Bootstrap".to_string(),
        display_order,
        featured: false,
        active: true,
    }
}

/// A valid image draft.
pub fn image(caption: &str, display_order: i32) -> ProjectImageDraft {
    ProjectImageDraft {
        image: format!("proyectos/capturas/{}.png", caption.to_lowercase()),
        caption: caption.to_string(),
        display_order,
    }
}

/// An active skill draft.
pub fn skill(name: &str, category: SkillCategory, display_order: i32) -> SkillDraft {
    SkillDraft {
        display_order,
        ..SkillDraft::new(name, category)
    }
}
