use serde::Deserialize;

use userbase_core::config::Config;

/// Users service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct UsersConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3113). Env var: `USERS_PORT`.
    #[serde(default = "default_users_port")]
    pub users_port: u16,
    /// bcrypt work factor (default 12). Env var: `BCRYPT_COST`.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_users_port() -> u16 {
    3113
}

fn default_bcrypt_cost() -> u32 {
    12
}

impl Config for UsersConfig {}
