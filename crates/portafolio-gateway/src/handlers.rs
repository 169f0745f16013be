// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the public pages.

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use portafolio_core::{HealthStatus, PortafolioError};

use crate::render::{ContactForm, ContactState, form_errors};
use crate::server::AppState;

/// Location the browser lands on after a successful contact submission.
pub const CONTACT_SENT_LOCATION: &str = "/?enviado=1";

/// Query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// `1` right after a successful submission.
    pub enviado: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy`, `degraded`, or `unhealthy`.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// Error returned by page handlers. Always a bare 500; the cause is only logged.
#[derive(Debug)]
pub struct PageError(PortafolioError);

impl From<PortafolioError> for PageError {
    fn from(e: PortafolioError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response()
    }
}

/// GET /
pub async fn get_index(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, PageError> {
    let contact = ContactState {
        sent: query.enviado.as_deref() == Some("1"),
        ..ContactState::default()
    };
    let page = state.query.home_page().await?;
    Ok(Html(state.renderer.home(&page, &contact)?))
}

/// POST /
///
/// Accepted submissions redirect (303) to the acknowledgment; rejected ones
/// re-render the page with the submitted values and a 422.
pub async fn post_index(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, PageError> {
    let submitted = state
        .intake
        .submit(&form.nombre, &form.email, &form.mensaje)
        .await;
    match submitted {
        Ok(_) => Ok(Redirect::to(CONTACT_SENT_LOCATION).into_response()),
        Err(PortafolioError::Validation(errors)) => {
            debug!(fields = ?errors.fields(), "re-rendering contact form");
            let contact = ContactState {
                form,
                errors: form_errors(&errors),
                sent: false,
            };
            let page = state.query.home_page().await?;
            let html = state.renderer.home(&page, &contact)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /proyectos/
pub async fn get_projects(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let projects = state.query.list_active_projects().await?;
    Ok(Html(state.renderer.projects(&projects)?))
}

/// GET /health
///
/// Unauthenticated liveness probe for process supervisors.
pub async fn get_health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match state.storage.health_check().await {
        Ok(HealthStatus::Healthy) => (StatusCode::OK, "healthy"),
        Ok(HealthStatus::Degraded(reason)) => {
            debug!(%reason, "storage degraded");
            (StatusCode::OK, "degraded")
        }
        Ok(HealthStatus::Unhealthy(reason)) => {
            error!(%reason, "storage unhealthy");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
        Err(e) => {
            error!(error = %e, "storage health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: state.start_time.elapsed().as_secs(),
        }),
    )
}
