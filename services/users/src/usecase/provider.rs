//! Read path.

use serde::Deserialize;

use crate::domain::repository::UserRepository;
use crate::domain::types::UserData;
use crate::domain::validator::{parse_id, validate_id};
use crate::error::UsersServiceError;

// ── By query parameter ───────────────────────────────────────────────────────

pub struct QueryProvider<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> QueryProvider<R> {
    /// Load the user named by the `id` query parameter, password masked.
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<UserData, UsersServiceError> {
        let id = parse_id(raw_id)?;
        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(UsersServiceError::into_internal)?
            .ok_or(UsersServiceError::UserNotFound)?;
        Ok(user.masked())
    }
}

// ── By request body ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProbeBody {
    id: Option<i64>,
}

pub struct BodyProvider<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> BodyProvider<R> {
    /// Look up the user whose id is in a JSON body.
    ///
    /// Never fails: unreadable body, bad id, missing user and store errors all
    /// yield `None`.
    pub async fn execute(&self, body: &[u8]) -> Option<UserData> {
        let probe: ProbeBody = serde_json::from_slice(body).ok()?;
        let id = validate_id(probe.id).ok()?;
        match self.repo.find_by_id(id).await {
            Ok(user) => user.map(|u| UserData {
                id: Some(u.id),
                login: Some(u.login),
                phone: Some(u.phone),
                pass: None,
            }),
            Err(e) => {
                tracing::warn!(error = ?e, user_id = id, "probe read failed");
                None
            }
        }
    }
}
