//! Runtime configuration.
//!
//! All settings are read once at startup from the environment (a `.env`
//! file is honored) and held in an explicit `Config` passed to each
//! component. Nothing in the service reads ambient globals after this.

use std::env;

/// Default bcrypt cost. Raising it makes every login/register slower.
pub const DEFAULT_WORK_FACTOR: u32 = 12;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub port: u16,
    pub secret_key: String,
    pub bcrypt_work_factor: u32,
}

impl Config {
    /// Build the configuration from environment variables, with development
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "messagely.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let secret_key = env::var("SECRET_KEY")
            .unwrap_or_else(|_| "dev-secret-change-in-production-minimum-32-characters".to_string());

        // bcrypt accepts costs 4..=31; anything else falls back to the default.
        let bcrypt_work_factor = env::var("BCRYPT_WORK_FACTOR")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&v| (4..=31).contains(&v))
            .unwrap_or(DEFAULT_WORK_FACTOR);

        Self {
            database_path,
            port,
            secret_key,
            bcrypt_work_factor,
        }
    }
}
