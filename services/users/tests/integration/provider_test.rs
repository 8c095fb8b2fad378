use userbase_users::domain::policy::{UserOperation, authorize};
use userbase_users::domain::types::Caller;
use userbase_users::error::UsersServiceError;
use userbase_users::usecase::caller::ResolveCallerUseCase;
use userbase_users::usecase::provider::BodyProvider;

use crate::helpers::{MockUserRepo, test_admin, test_user};

#[tokio::test]
async fn owner_may_update_own_record() {
    let repo = MockUserRepo::new(vec![test_user(), test_admin()]);

    let caller = ResolveCallerUseCase { repo: repo.clone() }
        .execute(Some("john"))
        .await
        .unwrap();
    let target = BodyProvider { repo }
        .execute(br#"{"id": 1, "login": "johnny"}"#)
        .await;

    assert!(authorize(caller.as_ref(), UserOperation::Update, target.as_ref()).is_ok());
}

#[tokio::test]
async fn stranger_may_not_update_other_record() {
    let mut stranger = test_user();
    stranger.id = 3;
    stranger.login = "mallory".to_owned();
    let repo = MockUserRepo::new(vec![test_user(), stranger]);

    let caller = ResolveCallerUseCase { repo: repo.clone() }
        .execute(Some("mallory"))
        .await
        .unwrap();
    let target = BodyProvider { repo }.execute(br#"{"id": 1}"#).await;

    let result = authorize(caller.as_ref(), UserOperation::Update, target.as_ref());
    assert!(matches!(result, Err(UsersServiceError::Forbidden)));
}

#[tokio::test]
async fn admin_may_delete_anyone() {
    let repo = MockUserRepo::new(vec![test_user(), test_admin()]);

    let caller: Option<Caller> = ResolveCallerUseCase { repo }
        .execute(Some("root"))
        .await
        .unwrap();

    assert!(caller.as_ref().is_some_and(Caller::is_admin));
    assert!(authorize(caller.as_ref(), UserOperation::Delete, None).is_ok());
}

#[tokio::test]
async fn unknown_login_is_anonymous() {
    let caller = ResolveCallerUseCase {
        repo: MockUserRepo::new(vec![test_user()]),
    }
    .execute(Some("ghost"))
    .await
    .unwrap();

    assert!(caller.is_none());
    assert!(authorize(None, UserOperation::Create, None).is_ok());
    assert!(matches!(
        authorize(None, UserOperation::Delete, None),
        Err(UsersServiceError::Forbidden)
    ));
}
