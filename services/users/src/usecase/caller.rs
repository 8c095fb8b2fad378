use crate::domain::repository::UserRepository;
use crate::domain::types::Caller;
use crate::error::UsersServiceError;

/// Turns the gateway-supplied login into a [`Caller`] with roles from the store.
pub struct ResolveCallerUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ResolveCallerUseCase<R> {
    /// `None` login or an unknown login means an anonymous caller.
    pub async fn execute(&self, login: Option<&str>) -> Result<Option<Caller>, UsersServiceError> {
        let Some(login) = login else {
            return Ok(None);
        };
        let user = self
            .repo
            .find_by_login(login)
            .await
            .map_err(UsersServiceError::into_internal)?;
        Ok(user.as_ref().map(Caller::from_user))
    }
}
