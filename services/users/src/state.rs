use sea_orm::DatabaseConnection;

use crate::infra::db::DbUserRepository;
use crate::infra::hasher::BcryptHasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn password_hasher(&self) -> BcryptHasher {
        BcryptHasher::new(self.bcrypt_cost)
    }
}
