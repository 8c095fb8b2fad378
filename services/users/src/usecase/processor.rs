//! Write path: create, update and delete.

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::{NewUser, PASSWORD_PLACEHOLDER, UserData};
use crate::domain::validator::{
    parse_id, validate_id, validate_login, validate_pass, validate_phone,
};
use crate::error::UsersServiceError;

// ── Create ───────────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub login: Option<String>,
    pub phone: Option<String>,
    pub pass: Option<String>,
}

pub struct CreateProcessor<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> CreateProcessor<R, H> {
    /// Returns `{id}` of the new user.
    pub async fn execute(&self, input: CreateUserInput) -> Result<UserData, UsersServiceError> {
        let login = validate_login(input.login.as_deref())?;
        let phone = validate_phone(input.phone.as_deref())?;
        let pass = validate_pass(input.pass.as_deref())?;

        if self.repo.find_by_login(login).await?.is_some() {
            return Err(UsersServiceError::LoginTaken);
        }
        let pass_hash = self.hasher.hash(pass).await?;
        let id = self
            .repo
            .create(&NewUser {
                login: login.to_owned(),
                phone: phone.to_owned(),
                pass_hash,
                roles: Vec::new(),
            })
            .await?;

        tracing::info!(user_id = id, "user created");
        Ok(UserData {
            id: Some(id),
            ..Default::default()
        })
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub id: Option<i64>,
    pub login: Option<String>,
    pub phone: Option<String>,
    pub pass: Option<String>,
}

pub struct UpdateProcessor<R: UserRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> UpdateProcessor<R, H> {
    /// Replaces login, phone and password. The stored hash is never echoed back.
    pub async fn execute(&self, input: UpdateUserInput) -> Result<UserData, UsersServiceError> {
        let id = validate_id(input.id)?;
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(UsersServiceError::UserNotFound)?;

        let login = validate_login(input.login.as_deref())?;
        let phone = validate_phone(input.phone.as_deref())?;
        let pass = validate_pass(input.pass.as_deref())?;

        // The unique index still guards against a concurrent writer.
        let holder = self.repo.find_by_login(login).await?;
        if holder.is_some_and(|other| other.id != user.id) {
            return Err(UsersServiceError::LoginTaken);
        }

        user.login = login.to_owned();
        user.phone = phone.to_owned();
        user.pass = self.hasher.hash(pass).await?;
        self.repo.update(&user).await?;

        Ok(UserData {
            id: Some(user.id),
            login: Some(user.login),
            phone: Some(user.phone),
            pass: Some(PASSWORD_PLACEHOLDER.to_owned()),
        })
    }
}

// ── Delete ───────────────────────────────────────────────────────────────────

pub struct DeleteProcessor<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteProcessor<R> {
    /// `raw_id` is the unparsed `id` query parameter. Returns the confirmation text.
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<String, UsersServiceError> {
        let id = parse_id(raw_id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(UsersServiceError::UserNotFound);
        }
        // A concurrent delete may win between the lookup and here.
        if !self.repo.delete(id).await? {
            return Err(UsersServiceError::UserNotFound);
        }

        tracing::info!(user_id = id, "user deleted");
        Ok(format!(
            "The user with ID:\"{id}\" has been successfully removed."
        ))
    }
}
