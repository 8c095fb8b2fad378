use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use userbase_auth_types::identity::IdentityHeaders;

use crate::domain::policy::{UserOperation, authorize};
use crate::domain::types::Caller;
use crate::domain::validator::parse_id;
use crate::error::UsersServiceError;
use crate::state::AppState;
use crate::usecase::caller::ResolveCallerUseCase;
use crate::usecase::processor::{
    CreateProcessor, CreateUserInput, DeleteProcessor, UpdateProcessor, UpdateUserInput,
};
use crate::usecase::provider::{BodyProvider, QueryProvider};

impl TryFrom<&Method> for UserOperation {
    type Error = UsersServiceError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(Self::Read),
            Method::POST => Ok(Self::Update),
            Method::PUT => Ok(Self::Create),
            Method::DELETE => Ok(Self::Delete),
            _ => Err(UsersServiceError::BadRequest),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// JSON body of `PUT /users`. A stray `id` is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 3, max = 8))]
    pub login: Option<String>,
    #[validate(length(min = 5, max = 8))]
    pub phone: Option<String>,
    #[validate(length(min = 4, max = 8))]
    pub pass: Option<String>,
}

/// JSON body of `POST /users`.
///
/// These bounds are checked at the boundary; the processors check them again.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(range(min = 1, max = 2147483647))]
    pub id: Option<i64>,
    #[validate(length(min = 3, max = 8))]
    pub login: Option<String>,
    #[validate(length(min = 5, max = 8))]
    pub phone: Option<String>,
    #[validate(length(min = 4, max = 8))]
    pub pass: Option<String>,
}

fn parse_payload<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, UsersServiceError> {
    let payload: T = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "unreadable user payload");
        UsersServiceError::BadRequest
    })?;
    payload.validate()?;
    Ok(payload)
}

// ── /users ───────────────────────────────────────────────────────────────────

/// Single entry point for `/users`; routes on the HTTP method.
pub async fn users(
    method: Method,
    identity: Option<IdentityHeaders>,
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, UsersServiceError> {
    let operation = UserOperation::try_from(&method)?;
    let Query(query) = query.map_err(|_| UsersServiceError::BadRequest)?;
    if matches!(operation, UserOperation::Read | UserOperation::Delete) {
        parse_id(query.id.as_deref())?;
    }

    // Create is public, so it never needs the caller's roles.
    let caller = match operation {
        UserOperation::Create => None,
        _ => {
            ResolveCallerUseCase {
                repo: state.user_repo(),
            }
            .execute(identity.as_ref().map(|i| i.login.as_str()))
            .await?
        }
    };

    match operation {
        UserOperation::Read => read_user(&state, caller.as_ref(), query.id.as_deref())
            .await
            .map(IntoResponse::into_response),
        UserOperation::Update => update_user(&state, caller.as_ref(), &body)
            .await
            .map(IntoResponse::into_response),
        UserOperation::Create => create_user(&state, caller.as_ref(), &body)
            .await
            .map(IntoResponse::into_response),
        UserOperation::Delete => delete_user(&state, caller.as_ref(), query.id.as_deref())
            .await
            .map(IntoResponse::into_response),
    }
}

// ── GET /users?id= ───────────────────────────────────────────────────────────

async fn read_user(
    state: &AppState,
    caller: Option<&Caller>,
    raw_id: Option<&str>,
) -> Result<impl IntoResponse, UsersServiceError> {
    let user = QueryProvider {
        repo: state.user_repo(),
    }
    .execute(raw_id)
    .await?;
    authorize(caller, UserOperation::Read, Some(&user))?;
    Ok(Json(user))
}

// ── POST /users ──────────────────────────────────────────────────────────────

async fn update_user(
    state: &AppState,
    caller: Option<&Caller>,
    body: &[u8],
) -> Result<impl IntoResponse, UsersServiceError> {
    let target = BodyProvider {
        repo: state.user_repo(),
    }
    .execute(body)
    .await;
    authorize(caller, UserOperation::Update, target.as_ref())?;

    let payload: UpdateUserPayload = parse_payload(body)?;
    let processor = UpdateProcessor {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let user = processor
        .execute(UpdateUserInput {
            id: payload.id,
            login: payload.login,
            phone: payload.phone,
            pass: payload.pass,
        })
        .await?;
    Ok(Json(user))
}

// ── PUT /users ───────────────────────────────────────────────────────────────

async fn create_user(
    state: &AppState,
    caller: Option<&Caller>,
    body: &[u8],
) -> Result<impl IntoResponse, UsersServiceError> {
    authorize(caller, UserOperation::Create, None)?;

    let payload: CreateUserPayload = parse_payload(body)?;
    let processor = CreateProcessor {
        repo: state.user_repo(),
        hasher: state.password_hasher(),
    };
    let created = processor
        .execute(CreateUserInput {
            login: payload.login,
            phone: payload.phone,
            pass: payload.pass,
        })
        .await?;
    Ok(Json(created))
}

// ── DELETE /users?id= ────────────────────────────────────────────────────────

async fn delete_user(
    state: &AppState,
    caller: Option<&Caller>,
    raw_id: Option<&str>,
) -> Result<impl IntoResponse, UsersServiceError> {
    authorize(caller, UserOperation::Delete, None)?;

    let message = DeleteProcessor {
        repo: state.user_repo(),
    }
    .execute(raw_id)
    .await?;
    Ok((StatusCode::OK, message))
}
