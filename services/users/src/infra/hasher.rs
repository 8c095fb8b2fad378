use anyhow::Context as _;

use crate::domain::repository::PasswordHasher;
use crate::error::UsersServiceError;

/// bcrypt accepts costs in this range.
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// bcrypt hasher. Hashing runs on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    async fn hash(&self, plain: &str) -> Result<String, UsersServiceError> {
        let plain = plain.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .context("join password hashing task")?
            .context("hash password")?;
        Ok(hashed)
    }
}
