// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML page rendering with embedded minijinja templates.

use std::collections::BTreeMap;

use minijinja::{Environment, Value, context};
use serde::{Deserialize, Serialize};

use portafolio_config::model::{MediaConfig, SiteConfig};
use portafolio_core::types::ProjectWithImages;
use portafolio_core::{PortafolioError, SkillCategory, ValidationErrors};
use portafolio_service::HomePage;

/// Contact form values as posted by the browser. Missing fields are empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

/// Field errors keyed by the form input they belong to.
pub type FormErrors = BTreeMap<&'static str, Vec<String>>;

/// Map service field names onto the contact form's input names.
pub fn form_errors(errors: &ValidationErrors) -> FormErrors {
    let mut out = FormErrors::new();
    for e in errors.iter() {
        let input = match e.field {
            "name" => "nombre",
            "message" => "mensaje",
            other => other,
        };
        out.entry(input).or_default().push(e.message.clone());
    }
    out
}

/// State of the contact section when rendering the home page.
#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FormErrors,
    /// Show the "message sent" acknowledgment.
    pub sent: bool,
}

/// Template environment shared by every request.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(site: &SiteConfig, media: &MediaConfig) -> Result<Self, PortafolioError> {
        let mut env = Environment::new();
        for (name, source) in [
            ("base.html", include_str!("../templates/base.html")),
            ("_project.html", include_str!("../templates/_project.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("proyectos.html", include_str!("../templates/proyectos.html")),
        ] {
            env.add_template(name, source).map_err(template_err)?;
        }

        env.add_global("site_title", Value::from(site.title.clone()));
        env.add_global("static_url", Value::from(media.static_url.clone()));
        let media_url = media.media_url.clone();
        env.add_filter("media", move |path: &str| {
            format!("{media_url}{}", path.trim_start_matches('/'))
        });

        Ok(Self { env })
    }

    /// Render `GET /` (and the `POST /` re-render on validation failure).
    pub fn home(&self, page: &HomePage, contact: &ContactState) -> Result<String, PortafolioError> {
        let tmpl = self.env.get_template("index.html").map_err(template_err)?;
        tmpl.render(context! {
            profile => &page.profile,
            projects => &page.projects,
            technical_skills => &page.technical_skills,
            personal_skills => &page.personal_skills,
            technical_label => SkillCategory::Technical.label(),
            personal_label => SkillCategory::Personal.label(),
            form => &contact.form,
            errors => &contact.errors,
            sent => contact.sent,
        })
        .map_err(template_err)
    }

    /// Render `GET /proyectos/`.
    pub fn projects(&self, projects: &[ProjectWithImages]) -> Result<String, PortafolioError> {
        let tmpl = self.env.get_template("proyectos.html").map_err(template_err)?;
        tmpl.render(context! { projects => projects })
            .map_err(template_err)
    }
}

fn template_err(e: minijinja::Error) -> PortafolioError {
    PortafolioError::Internal(format!("template error: {e}"))
}
