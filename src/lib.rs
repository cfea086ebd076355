//! Messagely Backend Library
//!
//! Exposes the service modules for the binary and for tests.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod messages;
pub mod middleware;
pub mod routes;
pub mod users;

use crate::auth::{PasswordHasher, TokenService};
use crate::config::Config;
use crate::db::Database;
use crate::messages::MessageStore;
use crate::users::UserStore;
use anyhow::Result;
use std::sync::Arc;

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub messages: Arc<MessageStore>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Wire the stores and token service up from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let db = Database::new(&config.database_path)?;
        let hasher = PasswordHasher::new(config.bcrypt_work_factor);

        Ok(Self {
            users: Arc::new(UserStore::new(&db, hasher)),
            messages: Arc::new(MessageStore::new(&db)),
            tokens: Arc::new(TokenService::new(config.secret_key.clone())),
        })
    }
}
