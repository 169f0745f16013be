// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project image (carousel) operations.

use portafolio_core::PortafolioError;
use portafolio_core::types::{ProjectImage, ProjectImageDraft};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

pub(crate) const IMAGE_COLUMNS: &str = "id, project_id, image, caption, display_order";

pub(crate) fn row_to_image(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProjectImage> {
    Ok(ProjectImage {
        id: row.get(0)?,
        project_id: row.get(1)?,
        image: row.get(2)?,
        caption: row.get(3)?,
        display_order: row.get(4)?,
    })
}

/// Attach an image to a project.
///
/// Fails with `NotFound` if the project does not exist.
pub async fn add_project_image(
    db: &Database,
    project_id: i64,
    image: &ProjectImageDraft,
) -> Result<ProjectImage, PortafolioError> {
    let img = image.clone();
    let inserted = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let exists: bool = tx.query_row(
                "SELECT EXISTS (SELECT 1 FROM projects WHERE id = ?1)",
                params![project_id],
                |row| row.get(0),
            )?;
            if !exists {
                return Ok(None);
            }
            tx.execute(
                "INSERT INTO project_images (project_id, image, caption, display_order)
                 VALUES (?1, ?2, ?3, ?4)",
                params![project_id, img.image, img.caption, img.display_order],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(Some(ProjectImage {
                id,
                project_id,
                image: img.image,
                caption: img.caption,
                display_order: img.display_order,
            }))
        })
        .await
        .map_err(map_tr_err)?;
    inserted.ok_or(PortafolioError::NotFound {
        entity: "project",
        id: project_id,
    })
}

/// Overwrite an image's attributes. The owning project never changes.
pub async fn update_project_image(
    db: &Database,
    id: i64,
    image: &ProjectImageDraft,
) -> Result<ProjectImage, PortafolioError> {
    let img = image.clone();
    let updated = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE project_images SET image = ?1, caption = ?2, display_order = ?3
                 WHERE id = ?4",
                params![img.image, img.caption, img.display_order, id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let sql = format!("SELECT {IMAGE_COLUMNS} FROM project_images WHERE id = ?1");
            conn.query_row(&sql, params![id], row_to_image).map(Some)
        })
        .await
        .map_err(map_tr_err)?;
    updated.ok_or(PortafolioError::NotFound {
        entity: "project image",
        id,
    })
}

/// Delete one image.
pub async fn delete_project_image(db: &Database, id: i64) -> Result<(), PortafolioError> {
    let deleted = db
        .connection()
        .call(move |conn| conn.execute("DELETE FROM project_images WHERE id = ?1", params![id]))
        .await
        .map_err(map_tr_err)?;
    if deleted == 0 {
        return Err(PortafolioError::NotFound {
            entity: "project image",
            id,
        });
    }
    Ok(())
}

/// Images of a project, by display order then id.
pub async fn list_project_images(
    db: &Database,
    project_id: i64,
) -> Result<Vec<ProjectImage>, PortafolioError> {
    db.connection()
        .call(move |conn| {
            let sql = format!(
                "SELECT {IMAGE_COLUMNS} FROM project_images WHERE project_id = ?1
                 ORDER BY display_order ASC, id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![project_id], row_to_image)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}
