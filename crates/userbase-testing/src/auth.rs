//! Mock gateway identity for integration tests.
//!
//! Services behind the gateway receive an `x-userbase-user-login` header injected by
//! the gateway. In tests, `MockAuth` produces that header directly so no real
//! gateway is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use userbase_auth_types::identity::USER_LOGIN_HEADER;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub login: String,
}

impl MockAuth {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    pub fn header_name() -> HeaderName {
        HeaderName::from_static(USER_LOGIN_HEADER)
    }

    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_str(&self.login).unwrap()
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(Self::header_name(), self.header_value());
        map
    }
}
