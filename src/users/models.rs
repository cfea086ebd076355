//! User Models
//! Mission: Profile shapes for storage and for the wire

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user record.
///
/// `username` is the identifier and never changes; `join_at` is fixed at
/// registration and `last_login_at` moves on every successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String, // bcrypt hash - never serialize
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

/// Public profile fields, the shape every listing and resolution returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl UserSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Registration input. The plaintext password never outlives the insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// A message this user sent, with the recipient profile resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SentMessage {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub to_user: UserSummary,
}

/// A message this user received, with the sender profile resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ReceivedMessage {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_skips_password() {
        let user = User {
            username: "bob".to_string(),
            password: "$2b$12$hash".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Smith".to_string(),
            phone: "+14150000000".to_string(),
            join_at: Utc::now(),
            last_login_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "bob");
    }

    #[test]
    fn test_summary_from_user() {
        let user = User {
            username: "bob".to_string(),
            password: "hash".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Smith".to_string(),
            phone: "+14150000000".to_string(),
            join_at: Utc::now(),
            last_login_at: Utc::now(),
        };

        let summary = UserSummary::from_user(&user);
        assert_eq!(summary.username, "bob");
        assert_eq!(summary.phone, "+14150000000");
    }
}
