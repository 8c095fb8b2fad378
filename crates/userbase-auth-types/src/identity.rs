//! Gateway-injected identity header extractor.

use std::convert::Infallible;

use axum::extract::OptionalFromRequestParts;
use http::request::Parts;

pub const USER_LOGIN_HEADER: &str = "x-userbase-user-login";

/// Caller identity injected by the gateway via the `x-userbase-user-login` header.
///
/// Only usable as `Option<IdentityHeaders>`: a missing, empty or non-UTF-8 header
/// yields `None` (anonymous caller). Role resolution and enforcement (403) happen
/// in the service after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub login: String,
}

impl IdentityHeaders {
    pub fn from_parts(parts: &Parts) -> Option<Self> {
        parts
            .headers
            .get(USER_LOGIN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|login| Self {
                login: login.to_owned(),
            })
    }
}

impl<S> OptionalFromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    // Extract synchronously and hand back a 'static future; `async fn` here would
    // capture the `parts` lifetime.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let identity = Self::from_parts(parts);
        async move { Ok(identity) }
    }
}
