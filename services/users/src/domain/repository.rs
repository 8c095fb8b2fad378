#![allow(async_fn_in_trait)]

use crate::domain::types::{NewUser, User};
use crate::error::UsersServiceError;

/// Repository for user accounts.
///
/// Store failures surface as `Persistence`; a duplicate login on write surfaces
/// as `LoginTaken`.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UsersServiceError>;
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UsersServiceError>;
    /// Insert and return the generated id.
    async fn create(&self, user: &NewUser) -> Result<i32, UsersServiceError>;
    /// Overwrite login, phone and pass of an existing record.
    async fn update(&self, user: &User) -> Result<(), UsersServiceError>;
    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, UsersServiceError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, UsersServiceError>;
}
