// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project CRUD operations and the public project listing.

use portafolio_core::PortafolioError;
use portafolio_core::types::{Project, ProjectDraft, ProjectImage, ProjectWithImages, now_timestamp};
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::queries::project_images::{IMAGE_COLUMNS, row_to_image};

const PROJECT_COLUMNS: &str = "id, title, description, primary_image, source_url, demo_url, \
     technologies, display_order, featured, active, created_at, updated_at";

const PROJECT_ORDER: &str = "ORDER BY display_order ASC, created_at DESC, id DESC";

pub(crate) fn row_to_project(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        primary_image: row.get(3)?,
        source_url: row.get(4)?,
        demo_url: row.get(5)?,
        technologies: row.get(6)?,
        display_order: row.get(7)?,
        featured: row.get(8)?,
        active: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn select_project(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<Project>> {
    let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
    match conn.query_row(&sql, params![id], row_to_project) {
        Ok(project) => Ok(Some(project)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Insert a project with `created_at` and `updated_at` set to now.
pub async fn create_project(
    db: &Database,
    project: &ProjectDraft,
) -> Result<Project, PortafolioError> {
    let p = project.clone();
    let now = now_timestamp();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO projects (title, description, primary_image, source_url, demo_url,
                     technologies, display_order, featured, active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
                params![
                    p.title,
                    p.description,
                    p.primary_image,
                    p.source_url,
                    p.demo_url,
                    p.technologies,
                    p.display_order,
                    p.featured,
                    p.active,
                    now,
                ],
            )?;
            Ok(Project {
                id: conn.last_insert_rowid(),
                title: p.title,
                description: p.description,
                primary_image: p.primary_image,
                source_url: p.source_url,
                demo_url: p.demo_url,
                technologies: p.technologies,
                display_order: p.display_order,
                featured: p.featured,
                active: p.active,
                created_at: now.clone(),
                updated_at: now,
            })
        })
        .await
        .map_err(map_tr_err)
}

/// Get a project by ID.
pub async fn get_project(db: &Database, id: i64) -> Result<Option<Project>, PortafolioError> {
    db.connection()
        .call(move |conn| select_project(conn, id))
        .await
        .map_err(map_tr_err)
}

/// Overwrite a project's attributes. `created_at` is never touched.
pub async fn update_project(
    db: &Database,
    id: i64,
    project: &ProjectDraft,
) -> Result<Project, PortafolioError> {
    let p = project.clone();
    let now = now_timestamp();
    let updated = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE projects
                 SET title = ?1, description = ?2, primary_image = ?3, source_url = ?4,
                     demo_url = ?5, technologies = ?6, display_order = ?7, featured = ?8,
                     active = ?9, updated_at = ?10
                 WHERE id = ?11",
                params![
                    p.title,
                    p.description,
                    p.primary_image,
                    p.source_url,
                    p.demo_url,
                    p.technologies,
                    p.display_order,
                    p.featured,
                    p.active,
                    now,
                    id,
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            select_project(conn, id)
        })
        .await
        .map_err(map_tr_err)?;
    updated.ok_or(PortafolioError::NotFound {
        entity: "project",
        id,
    })
}

/// Delete a project. Its images go with it via `ON DELETE CASCADE`.
pub async fn delete_project(db: &Database, id: i64) -> Result<(), PortafolioError> {
    let deleted = db
        .connection()
        .call(move |conn| conn.execute("DELETE FROM projects WHERE id = ?1", params![id]))
        .await
        .map_err(map_tr_err)?;
    if deleted == 0 {
        return Err(PortafolioError::NotFound {
            entity: "project",
            id,
        });
    }
    Ok(())
}

/// List projects, optionally only active ones.
pub async fn list_projects(
    db: &Database,
    active_only: bool,
) -> Result<Vec<Project>, PortafolioError> {
    db.connection()
        .call(move |conn| {
            let sql = format!(
                "SELECT {PROJECT_COLUMNS} FROM projects WHERE (?1 = 0 OR active = 1) {PROJECT_ORDER}"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![active_only], row_to_project)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// Active projects with their images, read inside one transaction.
///
/// Two queries regardless of project count: the projects, then every image
/// belonging to an active project, grouped in memory.
pub async fn list_active_projects_with_images(
    db: &Database,
) -> Result<Vec<ProjectWithImages>, PortafolioError> {
    db.connection()
        .call(|conn| {
            let tx = conn.transaction()?;
            let projects: Vec<Project> = {
                let sql = format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects WHERE active = 1 {PROJECT_ORDER}"
                );
                let mut stmt = tx.prepare(&sql)?;
                let rows = stmt.query_map([], row_to_project)?;
                rows.collect::<rusqlite::Result<_>>()?
            };
            let images: Vec<ProjectImage> = {
                let sql = format!(
                    "SELECT {IMAGE_COLUMNS} FROM project_images
                     WHERE project_id IN (SELECT id FROM projects WHERE active = 1)
                     ORDER BY project_id, display_order ASC, id ASC"
                );
                let mut stmt = tx.prepare(&sql)?;
                let rows = stmt.query_map([], row_to_image)?;
                rows.collect::<rusqlite::Result<_>>()?
            };
            tx.commit()?;
            Ok(group_images(projects, images))
        })
        .await
        .map_err(map_tr_err)
}

fn group_images(projects: Vec<Project>, images: Vec<ProjectImage>) -> Vec<ProjectWithImages> {
    let mut by_project: std::collections::HashMap<i64, Vec<ProjectImage>> =
        std::collections::HashMap::new();
    for image in images {
        by_project.entry(image.project_id).or_default().push(image);
    }
    projects
        .into_iter()
        .map(|project| {
            let images = by_project.remove(&project.id).unwrap_or_default();
            ProjectWithImages::new(project, images)
        })
        .collect()
}
