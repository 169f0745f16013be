// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests through the full HTTP stack over a temp database.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use portafolio_core::SkillCategory;
use portafolio_core::types::ProjectDraft;
use portafolio_test_utils::fixtures;
use portafolio_test_utils::harness::TestHarness;

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap().replace("&#x2f;", "/")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn contact_post(body: &'static str) -> Request<Body> {
    Request::post("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn home_page_shows_seeded_content() {
    let harness = TestHarness::builder()
        .with_default_profile()
        .with_site_title("Sofía Lagos · Portafolio")
        .build()
        .await
        .unwrap();
    let project = harness
        .seed_project(ProjectDraft {
            featured: true,
            ..fixtures::project("Tienda Online", 0)
        })
        .await
        .unwrap();
    harness
        .moderation
        .add_project_image(project.id, fixtures::image("Carrito", 0))
        .await
        .unwrap();
    harness
        .seed_skill(fixtures::skill("Python", SkillCategory::Technical, 0))
        .await
        .unwrap();
    harness
        .seed_skill(fixtures::skill("Paciencia", SkillCategory::Personal, 0))
        .await
        .unwrap();

    let response = harness.router().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert!(html.contains("Sofía Lagos · Portafolio"));
    assert!(html.contains("Tienda Online"));
    assert!(html.contains("/media/proyectos/capturas/carrito.png"));
    assert!(html.contains("Python"));
    assert!(html.contains("Paciencia"));
    assert!(html.contains("<li>Bootstrap</li>"));
}

#[tokio::test]
async fn home_lists_featured_subset_and_full_list_has_all() {
    let harness = TestHarness::builder().build().await.unwrap();
    harness
        .seed_project(ProjectDraft {
            featured: true,
            ..fixtures::project("Destacadisimo", 0)
        })
        .await
        .unwrap();
    harness
        .seed_project(fixtures::project("Comunisimo", 1))
        .await
        .unwrap();

    let home = body_string(harness.router().oneshot(get("/")).await.unwrap()).await;
    assert!(home.contains("Destacadisimo"));
    assert!(!home.contains("Comunisimo"));

    let all = body_string(harness.router().oneshot(get("/proyectos/")).await.unwrap()).await;
    assert!(all.contains("Destacadisimo"));
    assert!(all.contains("Comunisimo"));
}

#[tokio::test]
async fn custom_media_prefix_is_applied_to_images() {
    let harness = TestHarness::builder()
        .with_media_url("/archivos/")
        .build()
        .await
        .unwrap();
    harness
        .seed_project_with_images("Galeria", 0, &["Portada"])
        .await
        .unwrap();

    let html = body_string(harness.router().oneshot(get("/proyectos/")).await.unwrap()).await;
    assert!(html.contains("src=\"/archivos/proyectos/galeria.png\""));
    assert!(html.contains("src=\"/archivos/proyectos/capturas/portada.png\""));
    assert!(!html.contains("/media/"));
}

#[tokio::test]
async fn contact_submission_round_trip() {
    let harness = TestHarness::builder().build().await.unwrap();

    let response = harness
        .router()
        .oneshot(contact_post(
            "nombre=Ana+P%C3%A9rez&email=ana%40example.com&mensaje=Hola%2C+me+interesa",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

    let messages = harness.moderation.list_messages(None).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Ana Pérez");
    assert_eq!(messages[0].message, "Hola, me interesa");
    assert!(!messages[0].read);

    let ack = harness.router().oneshot(get(&location)).await.unwrap();
    assert_eq!(ack.status(), StatusCode::OK);
    assert!(body_string(ack).await.contains("¡Mensaje enviado correctamente!"));
}

#[tokio::test]
async fn rejected_submission_keeps_values_and_stores_nothing() {
    let harness = TestHarness::builder().build().await.unwrap();

    let response = harness
        .router()
        .oneshot(contact_post("nombre=Ana&email=no-es-correo&mensaje=Hola"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("value=\"Ana\""));
    assert!(html.contains("Hubo un error al enviar el mensaje."));

    assert!(harness.moderation.list_messages(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn projects_page_orders_and_hides_inactive() {
    let harness = TestHarness::builder().build().await.unwrap();
    harness.seed_project(fixtures::project("Segundo", 2)).await.unwrap();
    harness.seed_project(fixtures::project("Primero", 1)).await.unwrap();
    harness
        .seed_project(ProjectDraft {
            active: false,
            ..fixtures::project("Oculto", 0)
        })
        .await
        .unwrap();

    let response = harness.router().oneshot(get("/proyectos/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    let first = html.find("Primero").unwrap();
    let second = html.find("Segundo").unwrap();
    assert!(first < second);
    assert!(!html.contains("Oculto"));
}

#[tokio::test]
async fn marking_messages_read_is_visible_to_moderation() {
    let harness = TestHarness::builder().build().await.unwrap();
    for body in [
        "nombre=Uno&email=uno%40example.com&mensaje=a",
        "nombre=Dos&email=dos%40example.com&mensaje=b",
    ] {
        let response = harness.router().oneshot(contact_post(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let all = harness.moderation.list_messages(None).await.unwrap();
    let changed = harness.moderation.mark_read(&[all[0].id]).await.unwrap();
    assert_eq!(changed, 1);
    assert_eq!(harness.moderation.list_messages(Some(false)).await.unwrap().len(), 1);
    assert_eq!(harness.moderation.list_messages(Some(true)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn storage_failure_is_an_opaque_500() {
    let harness = TestHarness::builder()
        .with_broken_storage()
        .build()
        .await
        .unwrap();

    let response = harness.router().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_string(response).await.contains("initialized"));

    let health = harness.router().oneshot(get("/health")).await.unwrap();
    assert_eq!(health.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json: serde_json::Value = serde_json::from_str(&body_string(health).await).unwrap();
    assert_eq!(json["status"], "unhealthy");
}
