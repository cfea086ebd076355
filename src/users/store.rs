//! User Directory
//! Mission: Registration, authentication, and per-user message listings

use crate::auth::password::PasswordHasher;
use crate::errors::ApiError;
use crate::users::models::{NewUser, ReceivedMessage, SentMessage, User, UserSummary};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tracing::info;

const SELECT_USER: &str = "SELECT username, password, first_name, last_name, phone, \
     join_at, last_login_at FROM users WHERE username = ?1";

/// User-facing operations over the credential store.
pub struct UserStore {
    conn: Arc<Mutex<Connection>>,
    hasher: PasswordHasher,
}

impl UserStore {
    pub fn new(db: &crate::db::Database, hasher: PasswordHasher) -> Self {
        Self {
            conn: db.connection(),
            hasher,
        }
    }

    /// Register a new user.
    ///
    /// No duplicate pre-check: the username PRIMARY KEY is the single
    /// point of uniqueness enforcement, and concurrent registrations race
    /// there. The loser sees a registration failure.
    pub fn register(&self, new_user: NewUser) -> Result<User, ApiError> {
        let hashed = self.hasher.hash(&new_user.password)?;
        let now = Utc::now();

        let user = User {
            username: new_user.username,
            password: hashed,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            phone: new_user.phone,
            join_at: now,
            last_login_at: now,
        };

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO users (username, password, first_name, last_name, phone, join_at, last_login_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                user.username,
                user.password,
                user.first_name,
                user.last_name,
                user.phone,
                user.join_at,
                user.last_login_at,
            ],
        )
        .map_err(|e| ApiError::Registration(e.to_string()))?;

        info!("✅ Registered user: {}", user.username);

        Ok(user)
    }

    /// Check credentials.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller: both return `None`. A hit bumps `last_login_at`.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, ApiError> {
        let user = {
            let conn = self.conn.lock();
            match conn.query_row(SELECT_USER, params![username], Self::map_user) {
                Ok(user) => user,
                Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        };

        // bcrypt runs outside the store lock.
        if !self.hasher.verify(password, &user.password)? {
            return Ok(None);
        }

        let last_login_at = self.update_login_timestamp(username)?;

        Ok(Some(User {
            last_login_at,
            ..user
        }))
    }

    /// Set `last_login_at` to now. Errors only on store failure.
    pub fn update_login_timestamp(&self, username: &str) -> Result<DateTime<Utc>, ApiError> {
        let now = Utc::now();
        let conn = self.conn.lock();
        conn.execute(
            "UPDATE users SET last_login_at = ?1 WHERE username = ?2",
            params![now, username],
        )?;
        Ok(now)
    }

    /// Public profiles of every user.
    ///
    /// An empty directory is an error, not an empty list. That is the
    /// contract this service inherits, and callers rely on it.
    pub fn all(&self) -> Result<Vec<UserSummary>, ApiError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT username, first_name, last_name, phone FROM users ORDER BY username",
        )?;

        let users = stmt
            .query_map([], Self::map_summary)?
            .collect::<Result<Vec<_>, _>>()?;

        if users.is_empty() {
            return Err(ApiError::NotFound);
        }

        Ok(users)
    }

    /// Full profile by username.
    pub fn get(&self, username: &str) -> Result<User, ApiError> {
        let conn = self.conn.lock();
        conn.query_row(SELECT_USER, params![username], Self::map_user)
            .map_err(ApiError::from)
    }

    /// Messages sent by `username`, each with the recipient profile
    /// resolved by a second lookup. Order follows the message query.
    /// Zero messages is an error (same contract as `all`).
    pub fn messages_from(&self, username: &str) -> Result<Vec<SentMessage>, ApiError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, body, sent_at, read_at, to_username
             FROM messages WHERE from_username = ?1 ORDER BY id",
        )?;

        let rows = stmt
            .query_map(params![username], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, DateTime<Utc>>(2)?,
                    row.get::<_, Option<DateTime<Utc>>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(ApiError::NotFound);
        }

        let mut messages = Vec::with_capacity(rows.len());
        for (id, body, sent_at, read_at, to_username) in rows {
            let to_user = user_summary(&conn, &to_username)?;
            messages.push(SentMessage {
                id,
                body,
                sent_at,
                read_at,
                to_user,
            });
        }

        Ok(messages)
    }

    /// Messages received by `username`, symmetric to `messages_from`.
    pub fn messages_to(&self, username: &str) -> Result<Vec<ReceivedMessage>, ApiError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, body, sent_at, read_at, from_username
             FROM messages WHERE to_username = ?1 ORDER BY id",
        )?;

        let rows = stmt
            .query_map(params![username], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, DateTime<Utc>>(2)?,
                    row.get::<_, Option<DateTime<Utc>>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(ApiError::NotFound);
        }

        let mut messages = Vec::with_capacity(rows.len());
        for (id, body, sent_at, read_at, from_username) in rows {
            let from_user = user_summary(&conn, &from_username)?;
            messages.push(ReceivedMessage {
                id,
                body,
                sent_at,
                read_at,
                from_user,
            });
        }

        Ok(messages)
    }

    fn map_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            username: row.get(0)?,
            password: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            phone: row.get(4)?,
            join_at: row.get(5)?,
            last_login_at: row.get(6)?,
        })
    }

    fn map_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserSummary> {
        Ok(UserSummary {
            username: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            phone: row.get(3)?,
        })
    }
}

/// Resolve a public profile on an already-held connection.
///
/// Shared with the message store so detail views resolve sender and
/// recipient the same way the directory does.
pub(crate) fn user_summary(conn: &Connection, username: &str) -> Result<UserSummary, ApiError> {
    conn.query_row(
        "SELECT username, first_name, last_name, phone FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(UserSummary {
                username: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                phone: row.get(3)?,
            })
        },
    )
    .map_err(ApiError::from)
}
