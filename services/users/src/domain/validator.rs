//! Field validators for user payloads.
//!
//! Each check rejects missing and blank values, then applies its bound. Lengths are
//! counted in characters, not bytes.

pub const LOGIN_LEN: (usize, usize) = (3, 8);
pub const PHONE_LEN: (usize, usize) = (5, 8);
pub const PASS_LEN: (usize, usize) = (4, 8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("The user ID is invalid.")]
    Id,
    #[error("The user login is invalid.")]
    Login,
    #[error("The user phone is invalid.")]
    Phone,
    #[error("The user password is invalid.")]
    Pass,
}

/// Id must be present, positive and fit the store's integer key.
pub fn validate_id(id: Option<i64>) -> Result<i32, FieldError> {
    let id = id.ok_or(FieldError::Id)?;
    if id <= 0 {
        return Err(FieldError::Id);
    }
    i32::try_from(id).map_err(|_| FieldError::Id)
}

/// Parse and validate an id taken from the query string.
pub fn parse_id(raw: Option<&str>) -> Result<i32, FieldError> {
    let raw = non_blank(raw).ok_or(FieldError::Id)?;
    let id = raw.trim().parse::<i64>().map_err(|_| FieldError::Id)?;
    validate_id(Some(id))
}

pub fn validate_login(login: Option<&str>) -> Result<&str, FieldError> {
    bounded(login, LOGIN_LEN).ok_or(FieldError::Login)
}

pub fn validate_phone(phone: Option<&str>) -> Result<&str, FieldError> {
    bounded(phone, PHONE_LEN).ok_or(FieldError::Phone)
}

/// Checks the plaintext before hashing.
pub fn validate_pass(pass: Option<&str>) -> Result<&str, FieldError> {
    bounded(pass, PASS_LEN).ok_or(FieldError::Pass)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn bounded(value: Option<&str>, (min, max): (usize, usize)) -> Option<&str> {
    let value = non_blank(value)?;
    let len = value.chars().count();
    (min..=max).contains(&len).then_some(value)
}
