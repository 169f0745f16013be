// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact message intake and moderation queries.

use std::collections::BTreeSet;

use portafolio_core::PortafolioError;
use portafolio_core::types::{ContactMessage, NewContactMessage};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

const CONTACT_COLUMNS: &str = "id, name, email, message, submitted_at, is_read";

fn row_to_message(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContactMessage> {
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        message: row.get(3)?,
        submitted_at: row.get(4)?,
        read: row.get(5)?,
    })
}

/// Insert a new, unread message.
pub async fn insert_contact_message(
    db: &Database,
    message: &NewContactMessage,
) -> Result<ContactMessage, PortafolioError> {
    let m = message.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO contact_messages (name, email, message, submitted_at, is_read)
                 VALUES (?1, ?2, ?3, ?4, 0)",
                params![m.name, m.email, m.message, m.submitted_at],
            )?;
            Ok(ContactMessage {
                id: conn.last_insert_rowid(),
                name: m.name,
                email: m.email,
                message: m.message,
                submitted_at: m.submitted_at,
                read: false,
            })
        })
        .await
        .map_err(map_tr_err)
}

/// Get a message by ID.
pub async fn get_contact_message(
    db: &Database,
    id: i64,
) -> Result<Option<ContactMessage>, PortafolioError> {
    db.connection()
        .call(move |conn| {
            let sql = format!("SELECT {CONTACT_COLUMNS} FROM contact_messages WHERE id = ?1");
            match conn.query_row(&sql, params![id], row_to_message) {
                Ok(m) => Ok(Some(m)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List messages newest first, optionally filtered by read state.
pub async fn list_contact_messages(
    db: &Database,
    read: Option<bool>,
) -> Result<Vec<ContactMessage>, PortafolioError> {
    db.connection()
        .call(move |conn| {
            let sql = format!(
                "SELECT {CONTACT_COLUMNS} FROM contact_messages
                 WHERE (?1 IS NULL OR is_read = ?1)
                 ORDER BY submitted_at DESC, id DESC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![read], row_to_message)?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// Set the read flag on a batch of messages in one transaction.
///
/// Duplicate ids count once; missing ids are skipped.
pub async fn set_contact_messages_read(
    db: &Database,
    ids: &[i64],
    read: bool,
) -> Result<usize, PortafolioError> {
    let ids: BTreeSet<i64> = ids.iter().copied().collect();
    if ids.is_empty() {
        return Ok(0);
    }
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let mut updated = 0;
            {
                let mut stmt = tx.prepare("UPDATE contact_messages SET is_read = ?1 WHERE id = ?2")?;
                for id in &ids {
                    updated += stmt.execute(params![read, id])?;
                }
            }
            tx.commit()?;
            Ok(updated)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::setup_db;

    fn new_message(name: &str, submitted_at: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: format!("Hola, soy {name}"),
            submitted_at: submitted_at.to_string(),
        }
    }

    #[tokio::test]
    async fn inserted_message_is_unread() {
        let (db, _dir) = setup_db().await;
        let m = insert_contact_message(&db, &new_message("Luis", "2026-03-01T10:00:00.000Z"))
            .await
            .unwrap();
        assert!(!m.read);

        let fetched = get_contact_message(&db, m.id).await.unwrap().unwrap();
        assert_eq!(fetched, m);
    }

    #[tokio::test]
    async fn list_is_newest_first_and_filters_by_read() {
        let (db, _dir) = setup_db().await;
        let old = insert_contact_message(&db, &new_message("Old", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();
        let new = insert_contact_message(&db, &new_message("New", "2026-02-01T00:00:00.000Z"))
            .await
            .unwrap();

        let all = list_contact_messages(&db, None).await.unwrap();
        assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![new.id, old.id]);

        set_contact_messages_read(&db, &[old.id], true).await.unwrap();
        let unread = list_contact_messages(&db, Some(false)).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, new.id);
        let read = list_contact_messages(&db, Some(true)).await.unwrap();
        assert_eq!(read[0].id, old.id);
    }

    #[tokio::test]
    async fn bulk_toggle_counts_existing_distinct_ids() {
        let (db, _dir) = setup_db().await;
        let a = insert_contact_message(&db, &new_message("A", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();
        let b = insert_contact_message(&db, &new_message("B", "2026-01-02T00:00:00.000Z"))
            .await
            .unwrap();

        let n = set_contact_messages_read(&db, &[a.id, b.id, a.id, 9999], true)
            .await
            .unwrap();
        assert_eq!(n, 2);
        assert!(get_contact_message(&db, a.id).await.unwrap().unwrap().read);

        let n = set_contact_messages_read(&db, &[b.id], false).await.unwrap();
        assert_eq!(n, 1);
        assert!(!get_contact_message(&db, b.id).await.unwrap().unwrap().read);
        assert!(get_contact_message(&db, a.id).await.unwrap().unwrap().read);
    }

    #[tokio::test]
    async fn bulk_toggle_with_no_ids_is_noop() {
        let (db, _dir) = setup_db().await;
        assert_eq!(set_contact_messages_read(&db, &[], true).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn toggle_leaves_content_untouched() {
        let (db, _dir) = setup_db().await;
        let m = insert_contact_message(&db, &new_message("Eva", "2026-05-05T05:05:05.000Z"))
            .await
            .unwrap();
        set_contact_messages_read(&db, &[m.id], true).await.unwrap();

        let after = get_contact_message(&db, m.id).await.unwrap().unwrap();
        assert_eq!(after.name, m.name);
        assert_eq!(after.message, m.message);
        assert_eq!(after.submitted_at, m.submitted_at);
    }
}
