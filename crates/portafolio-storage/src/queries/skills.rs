// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Skill CRUD operations.

use std::str::FromStr;

use portafolio_core::PortafolioError;
use portafolio_core::types::{Skill, SkillCategory, SkillDraft, SkillFilter};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

const SKILL_COLUMNS: &str = "id, name, category, icon, display_order, active";

fn row_to_skill(row: &rusqlite::Row<'_>) -> rusqlite::Result<Skill> {
    let category: String = row.get(2)?;
    let category = SkillCategory::from_str(&category).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        category,
        icon: row.get(3)?,
        display_order: row.get(4)?,
        active: row.get(5)?,
    })
}

/// Insert a skill and return the stored row.
pub async fn create_skill(db: &Database, skill: &SkillDraft) -> Result<Skill, PortafolioError> {
    let skill = skill.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO skills (name, category, icon, display_order, active)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    skill.name,
                    skill.category.as_str(),
                    skill.icon,
                    skill.display_order,
                    skill.active,
                ],
            )?;
            Ok(Skill {
                id: conn.last_insert_rowid(),
                name: skill.name,
                category: skill.category,
                icon: skill.icon,
                display_order: skill.display_order,
                active: skill.active,
            })
        })
        .await
        .map_err(map_tr_err)
}

/// Get a skill by ID.
pub async fn get_skill(db: &Database, id: i64) -> Result<Option<Skill>, PortafolioError> {
    db.connection()
        .call(move |conn| {
            let sql = format!("SELECT {SKILL_COLUMNS} FROM skills WHERE id = ?1");
            match conn.query_row(&sql, params![id], row_to_skill) {
                Ok(skill) => Ok(Some(skill)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Overwrite a skill's attributes.
pub async fn update_skill(
    db: &Database,
    id: i64,
    skill: &SkillDraft,
) -> Result<Skill, PortafolioError> {
    let skill = skill.clone();
    let changed = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE skills
                 SET name = ?1, category = ?2, icon = ?3, display_order = ?4, active = ?5
                 WHERE id = ?6",
                params![
                    skill.name,
                    skill.category.as_str(),
                    skill.icon,
                    skill.display_order,
                    skill.active,
                    id,
                ],
            )?;
            Ok((changed > 0).then_some(Skill {
                id,
                name: skill.name,
                category: skill.category,
                icon: skill.icon,
                display_order: skill.display_order,
                active: skill.active,
            }))
        })
        .await
        .map_err(map_tr_err)?;
    changed.ok_or(PortafolioError::NotFound { entity: "skill", id })
}

/// Delete a skill.
pub async fn delete_skill(db: &Database, id: i64) -> Result<(), PortafolioError> {
    let deleted = db
        .connection()
        .call(move |conn| conn.execute("DELETE FROM skills WHERE id = ?1", params![id]))
        .await
        .map_err(map_tr_err)?;
    if deleted == 0 {
        return Err(PortafolioError::NotFound { entity: "skill", id });
    }
    Ok(())
}

/// List skills matching the filter, ordered by category, display order, then id.
pub async fn list_skills(db: &Database, filter: SkillFilter) -> Result<Vec<Skill>, PortafolioError> {
    let category = filter.category.map(|c| c.as_str());
    let active_only = filter.active_only;
    db.connection()
        .call(move |conn| {
            let sql = format!(
                "SELECT {SKILL_COLUMNS} FROM skills
                 WHERE (?1 IS NULL OR category = ?1) AND (?2 = 0 OR active = 1)
                 ORDER BY category ASC, display_order ASC, id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![category, active_only], row_to_skill)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::setup_db;

    fn draft(name: &str, category: SkillCategory, order: i32, active: bool) -> SkillDraft {
        SkillDraft {
            name: name.to_string(),
            category,
            icon: String::new(),
            display_order: order,
            active,
        }
    }

    #[tokio::test]
    async fn create_and_get_skill_roundtrips() {
        let (db, _dir) = setup_db().await;
        let mut d = draft("Rust", SkillCategory::Technical, 2, true);
        d.icon = "fa-brands fa-rust".to_string();

        let created = create_skill(&db, &d).await.unwrap();
        let fetched = get_skill(&db, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.icon, "fa-brands fa-rust");
        assert_eq!(fetched.category, SkillCategory::Technical);
    }

    #[tokio::test]
    async fn get_missing_skill_returns_none() {
        let (db, _dir) = setup_db().await;
        assert!(get_skill(&db, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_skills_filters_by_category_and_active() {
        let (db, _dir) = setup_db().await;
        create_skill(&db, &draft("Python", SkillCategory::Technical, 1, true)).await.unwrap();
        create_skill(&db, &draft("Cobol", SkillCategory::Technical, 0, false)).await.unwrap();
        create_skill(&db, &draft("Empatía", SkillCategory::Personal, 0, true)).await.unwrap();

        let technical = list_skills(
            &db,
            SkillFilter {
                category: Some(SkillCategory::Technical),
                active_only: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(technical.len(), 1);
        assert_eq!(technical[0].name, "Python");

        let all = list_skills(&db, SkillFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        // personal sorts before tecnica
        assert_eq!(all[0].category, SkillCategory::Personal);
    }

    #[tokio::test]
    async fn list_skills_orders_by_display_order_then_id() {
        let (db, _dir) = setup_db().await;
        let c = create_skill(&db, &draft("C", SkillCategory::Technical, 5, true)).await.unwrap();
        let a = create_skill(&db, &draft("A", SkillCategory::Technical, 1, true)).await.unwrap();
        let b = create_skill(&db, &draft("B", SkillCategory::Technical, 1, true)).await.unwrap();

        let ids: Vec<i64> = list_skills(
            &db,
            SkillFilter {
                category: Some(SkillCategory::Technical),
                active_only: true,
            },
        )
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn update_skill_overwrites_and_keeps_order_verbatim() {
        let (db, _dir) = setup_db().await;
        let s = create_skill(&db, &draft("Git", SkillCategory::Technical, 0, true)).await.unwrap();

        let updated = update_skill(&db, s.id, &draft("Git", SkillCategory::Technical, 99, false))
            .await
            .unwrap();
        assert_eq!(updated.display_order, 99);
        assert!(!updated.active);

        let fetched = get_skill(&db, s.id).await.unwrap().unwrap();
        assert_eq!(fetched.display_order, 99);
        assert!(!fetched.active);
    }

    #[tokio::test]
    async fn update_and_delete_missing_skill_are_not_found() {
        let (db, _dir) = setup_db().await;
        let d = draft("X", SkillCategory::Personal, 0, true);
        assert!(matches!(
            update_skill(&db, 7, &d).await,
            Err(PortafolioError::NotFound { entity: "skill", id: 7 })
        ));
        assert!(matches!(
            delete_skill(&db, 7).await,
            Err(PortafolioError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_skill_removes_row() {
        let (db, _dir) = setup_db().await;
        let s = create_skill(&db, &draft("Go", SkillCategory::Technical, 0, true)).await.unwrap();
        delete_skill(&db, s.id).await.unwrap();
        assert!(get_skill(&db, s.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn category_check_constraint_rejects_unknown_values() {
        let (db, _dir) = setup_db().await;
        let result = db
            .connection()
            .call(|conn| {
                conn.execute(
                    "INSERT INTO skills (name, category) VALUES ('Óleo', 'artistica')",
                    [],
                )
            })
            .await;
        assert!(result.is_err());
    }
}
