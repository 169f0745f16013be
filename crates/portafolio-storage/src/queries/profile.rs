// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The singleton profile row.
//!
//! The table's primary key is pinned to 1, so the database itself refuses a
//! second profile no matter how many writers race to create one.

use portafolio_core::PortafolioError;
use portafolio_core::types::Profile;
use rusqlite::params;
use tracing::warn;

use crate::database::{Database, is_constraint_violation, map_tr_err};

const PROFILE_ID: i64 = 1;

/// Create the profile. A second create fails with `SingletonViolation`.
pub async fn create_profile(db: &Database, profile: &Profile) -> Result<(), PortafolioError> {
    let p = profile.clone();
    let created = db
        .connection()
        .call(move |conn| {
            let result = conn.execute(
                "INSERT INTO profile (id, full_name, nickname, title, bio, github_url,
                     linkedin_url, email, illustration)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    PROFILE_ID,
                    p.full_name,
                    p.nickname,
                    p.title,
                    p.bio,
                    p.github_url,
                    p.linkedin_url,
                    p.email,
                    p.illustration,
                ],
            );
            match result {
                Ok(_) => Ok(true),
                Err(e) if is_constraint_violation(&e) => Ok(false),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)?;

    if !created {
        warn!("rejected second profile create");
        return Err(PortafolioError::SingletonViolation { entity: "profile" });
    }
    Ok(())
}

/// Edit the existing profile. Fails with `NotFound` if none was created yet.
pub async fn update_profile(db: &Database, profile: &Profile) -> Result<(), PortafolioError> {
    let p = profile.clone();
    let changed = db
        .connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE profile
                 SET full_name = ?1, nickname = ?2, title = ?3, bio = ?4, github_url = ?5,
                     linkedin_url = ?6, email = ?7, illustration = ?8
                 WHERE id = ?9",
                params![
                    p.full_name,
                    p.nickname,
                    p.title,
                    p.bio,
                    p.github_url,
                    p.linkedin_url,
                    p.email,
                    p.illustration,
                    PROFILE_ID,
                ],
            )
        })
        .await
        .map_err(map_tr_err)?;
    if changed == 0 {
        return Err(PortafolioError::NotFound {
            entity: "profile",
            id: PROFILE_ID,
        });
    }
    Ok(())
}

/// The profile, or `None` before it has been created.
pub async fn get_profile(db: &Database) -> Result<Option<Profile>, PortafolioError> {
    db.connection()
        .call(|conn| {
            let result = conn.query_row(
                "SELECT full_name, nickname, title, bio, github_url, linkedin_url, email,
                        illustration
                 FROM profile WHERE id = ?1",
                params![PROFILE_ID],
                |row| {
                    Ok(Profile {
                        full_name: row.get(0)?,
                        nickname: row.get(1)?,
                        title: row.get(2)?,
                        bio: row.get(3)?,
                        github_url: row.get(4)?,
                        linkedin_url: row.get(5)?,
                        email: row.get(6)?,
                        illustration: row.get(7)?,
                    })
                },
            );
            match result {
                Ok(profile) => Ok(Some(profile)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}
