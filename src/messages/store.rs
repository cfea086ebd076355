//! Message Store
//! Mission: Message persistence with resolved participant profiles

use crate::errors::ApiError;
use crate::messages::models::{Message, MessageDetail, ReadReceipt};
use crate::users::store::user_summary;
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::sync::Arc;

/// Message operations over the credential store.
///
/// Authorization lives at the route layer; this store answers for any
/// id it is asked about.
pub struct MessageStore {
    conn: Arc<Mutex<Connection>>,
}

impl MessageStore {
    pub fn new(db: &crate::db::Database) -> Self {
        Self {
            conn: db.connection(),
        }
    }

    /// Fetch a message with sender and recipient profiles resolved.
    pub fn get(&self, id: i64) -> Result<MessageDetail, ApiError> {
        let conn = self.conn.lock();

        let (id, body, sent_at, read_at, from_username, to_username) = conn.query_row(
            "SELECT id, body, sent_at, read_at, from_username, to_username
             FROM messages WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            },
        )?;

        let from_user = user_summary(&conn, &from_username)?;
        let to_user = user_summary(&conn, &to_username)?;

        Ok(MessageDetail {
            id,
            body,
            sent_at,
            read_at,
            from_user,
            to_user,
        })
    }

    /// Insert a new message. Recipient existence is the caller's pre-check;
    /// nothing is persisted when it fails there.
    pub fn create(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
    ) -> Result<Message, ApiError> {
        let sent_at = Utc::now();

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO messages (from_username, to_username, body, sent_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![from_username, to_username, body, sent_at],
        )?;

        Ok(Message {
            id: conn.last_insert_rowid(),
            from_username: from_username.to_string(),
            to_username: to_username.to_string(),
            body: body.to_string(),
            sent_at,
            read_at: None,
        })
    }

    /// Set `read_at`, once.
    ///
    /// COALESCE keeps the first timestamp: a repeat call returns the
    /// original receipt and never moves `read_at`.
    pub fn mark_read(&self, id: i64) -> Result<ReadReceipt, ApiError> {
        let now = Utc::now();

        let conn = self.conn.lock();
        let updated = conn.execute(
            "UPDATE messages SET read_at = COALESCE(read_at, ?1) WHERE id = ?2",
            params![now, id],
        )?;

        if updated == 0 {
            return Err(ApiError::NotFound);
        }

        conn.query_row(
            "SELECT id, read_at FROM messages WHERE id = ?1",
            params![id],
            |row| {
                Ok(ReadReceipt {
                    id: row.get(0)?,
                    read_at: row.get(1)?,
                })
            },
        )
        .map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::PasswordHasher;
    use crate::db::Database;
    use crate::users::models::NewUser;
    use crate::users::store::UserStore;
    use tempfile::NamedTempFile;

    fn test_stores() -> (UserStore, MessageStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db = Database::new(temp_file.path().to_str().unwrap()).unwrap();
        let users = UserStore::new(&db, PasswordHasher::new(4));
        let messages = MessageStore::new(&db);
        (users, messages, temp_file)
    }

    fn seed_users(users: &UserStore) {
        for (username, first) in [("bob", "Bob"), ("alice", "Alice")] {
            users
                .register(NewUser {
                    username: username.to_string(),
                    password: "pw".to_string(),
                    first_name: first.to_string(),
                    last_name: "Test".to_string(),
                    phone: "+14155550000".to_string(),
                })
                .unwrap();
        }
    }

    #[test]
    fn test_create_and_get_roundtrip() {
        let (users, messages, _tmp) = test_stores();
        seed_users(&users);

        let created = messages.create("bob", "alice", "hello").unwrap();
        assert!(created.id > 0);
        assert!(created.read_at.is_none());

        let detail = messages.get(created.id).unwrap();
        assert_eq!(detail.body, "hello");
        assert_eq!(detail.from_user.username, "bob");
        assert_eq!(detail.to_user.username, "alice");
        assert_eq!(detail.sent_at.timestamp(), created.sent_at.timestamp());
        assert!(detail.read_at.is_none());
    }

    #[test]
    fn test_get_missing_message_is_not_found() {
        let (_users, messages, _tmp) = test_stores();
        assert!(matches!(messages.get(9999), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_mark_read_sets_timestamp_once() {
        let (users, messages, _tmp) = test_stores();
        seed_users(&users);
        let created = messages.create("bob", "alice", "hello").unwrap();

        let first = messages.mark_read(created.id).unwrap();
        assert_eq!(first.id, created.id);

        // The second call must not regress the original timestamp.
        let second = messages.mark_read(created.id).unwrap();
        assert_eq!(second.read_at, first.read_at);

        let detail = messages.get(created.id).unwrap();
        assert_eq!(detail.read_at, Some(first.read_at));
    }

    #[test]
    fn test_mark_read_missing_message_is_not_found() {
        let (_users, messages, _tmp) = test_stores();
        assert!(matches!(messages.mark_read(9999), Err(ApiError::NotFound)));
    }
}
