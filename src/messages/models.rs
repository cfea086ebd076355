//! Message Models

use crate::users::models::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored message row, as returned from a send.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Detail view with both participant profiles resolved.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDetail {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserSummary,
    pub to_user: UserSummary,
}

/// Minimal record returned by a mark-read.
#[derive(Debug, Clone, Serialize)]
pub struct ReadReceipt {
    pub id: i64,
    pub read_at: DateTime<Utc>,
}

/// Send request body
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub to_username: String,
    pub body: String,
}
