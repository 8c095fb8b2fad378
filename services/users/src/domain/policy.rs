//! Access policy for `/users` operations.

use crate::domain::types::{Caller, UserData};
use crate::error::UsersServiceError;

/// The operations exposed on the users resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOperation {
    Read,
    Update,
    Create,
    Delete,
}

/// Decide whether `caller` may run `operation` against `target`.
///
/// Create is public. Delete requires `ROLE_ADMIN`. Read and Update are allowed
/// for admins and for a caller acting on their own record; Update denies a
/// non-admin whose target could not be loaded.
pub fn authorize(
    caller: Option<&Caller>,
    operation: UserOperation,
    target: Option<&UserData>,
) -> Result<(), UsersServiceError> {
    let allowed = match operation {
        UserOperation::Create => true,
        UserOperation::Delete => caller.is_some_and(Caller::is_admin),
        UserOperation::Read | UserOperation::Update => match caller {
            Some(caller) if caller.is_admin() => true,
            Some(caller) => target
                .and_then(|t| t.login.as_deref())
                .is_some_and(|login| login == caller.login),
            None => false,
        },
    };
    if allowed {
        Ok(())
    } else {
        Err(UsersServiceError::Forbidden)
    }
}
