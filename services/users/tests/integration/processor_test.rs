use userbase_users::domain::types::PASSWORD_PLACEHOLDER;
use userbase_users::domain::validator::FieldError;
use userbase_users::error::UsersServiceError;
use userbase_users::usecase::processor::{
    CreateProcessor, CreateUserInput, DeleteProcessor, UpdateProcessor, UpdateUserInput,
};
use userbase_users::usecase::provider::QueryProvider;

use crate::helpers::{FakeHasher, MockUserRepo, test_user};

fn create_input(login: &str, phone: &str, pass: &str) -> CreateUserInput {
    CreateUserInput {
        login: Some(login.to_owned()),
        phone: Some(phone.to_owned()),
        pass: Some(pass.to_owned()),
    }
}

#[tokio::test]
async fn should_reject_duplicate_login() {
    let uc = CreateProcessor {
        repo: MockUserRepo::new(vec![test_user()]),
        hasher: FakeHasher,
    };

    let result = uc.execute(create_input("john", "5559999", "other1")).await;

    assert!(
        matches!(result, Err(UsersServiceError::LoginTaken)),
        "expected LoginTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_store_hash_instead_of_plaintext() {
    let repo = MockUserRepo::empty();
    let uc = CreateProcessor {
        repo: repo.clone(),
        hasher: FakeHasher,
    };

    uc.execute(create_input("jane", "5551111", "pw12")).await.unwrap();

    let stored = repo.snapshot();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].pass, "pw12");
    assert_eq!(stored[0].pass, "hashed:pw12");
}

#[tokio::test]
async fn should_stop_at_first_invalid_field() {
    let repo = MockUserRepo::empty();
    let uc = CreateProcessor {
        repo: repo.clone(),
        hasher: FakeHasher,
    };

    let result = uc.execute(create_input("jo", "1", "x")).await;

    assert!(matches!(
        result,
        Err(UsersServiceError::InvalidField(FieldError::Login))
    ));
    assert!(repo.snapshot().is_empty(), "nothing should be written");
}

#[tokio::test]
async fn update_should_return_placeholder_password() {
    let uc = UpdateProcessor {
        repo: MockUserRepo::new(vec![test_user()]),
        hasher: FakeHasher,
    };

    let updated = uc
        .execute(UpdateUserInput {
            id: Some(1),
            login: Some("johnny".to_owned()),
            phone: Some("5552222".to_owned()),
            pass: Some("newpw".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.login.as_deref(), Some("johnny"));
    assert_eq!(updated.pass.as_deref(), Some(PASSWORD_PLACEHOLDER));
}

#[tokio::test]
async fn update_should_report_unknown_id() {
    let uc = UpdateProcessor {
        repo: MockUserRepo::empty(),
        hasher: FakeHasher,
    };

    let result = uc
        .execute(UpdateUserInput {
            id: Some(42),
            login: Some("john".to_owned()),
            phone: Some("5551234".to_owned()),
            pass: Some("secret".to_owned()),
        })
        .await;

    assert!(matches!(result, Err(UsersServiceError::UserNotFound)));
}

#[tokio::test]
async fn read_after_delete_should_report_not_found() {
    let repo = MockUserRepo::new(vec![test_user()]);

    DeleteProcessor { repo: repo.clone() }
        .execute(Some("1"))
        .await
        .unwrap();
    let result = QueryProvider { repo }.execute(Some("1")).await;

    assert!(matches!(result, Err(UsersServiceError::UserNotFound)));
}

#[tokio::test]
async fn create_get_delete_get_flow() {
    let repo = MockUserRepo::empty();

    let created = CreateProcessor {
        repo: repo.clone(),
        hasher: FakeHasher,
    }
    .execute(create_input("john", "5551234", "secret"))
    .await
    .unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(created.login, None);

    let read = QueryProvider { repo: repo.clone() }
        .execute(Some("1"))
        .await
        .unwrap();
    assert_eq!(read.id, None);
    assert_eq!(read.login.as_deref(), Some("john"));
    assert_eq!(read.phone.as_deref(), Some("5551234"));
    assert_eq!(read.pass.as_deref(), Some(PASSWORD_PLACEHOLDER));

    let message = DeleteProcessor { repo: repo.clone() }
        .execute(Some("1"))
        .await
        .unwrap();
    assert_eq!(message, "The user with ID:\"1\" has been successfully removed.");

    let result = QueryProvider { repo }.execute(Some("1")).await;
    assert!(matches!(result, Err(UsersServiceError::UserNotFound)));
}

#[tokio::test]
async fn update_should_reject_login_of_another_user() {
    let mut other = test_user();
    other.id = 7;
    other.login = "jane".to_owned();
    let uc = UpdateProcessor {
        repo: MockUserRepo::new(vec![test_user(), other]),
        hasher: FakeHasher,
    };

    let result = uc
        .execute(UpdateUserInput {
            id: Some(1),
            login: Some("jane".to_owned()),
            phone: Some("5551234".to_owned()),
            pass: Some("secret".to_owned()),
        })
        .await;

    assert!(
        matches!(result, Err(UsersServiceError::LoginTaken)),
        "expected LoginTaken, got {result:?}"
    );
}

#[tokio::test]
async fn update_should_allow_keeping_own_login() {
    let uc = UpdateProcessor {
        repo: MockUserRepo::new(vec![test_user()]),
        hasher: FakeHasher,
    };

    let updated = uc
        .execute(UpdateUserInput {
            id: Some(1),
            login: Some("john".to_owned()),
            phone: Some("5550001".to_owned()),
            pass: Some("secret".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(updated.phone.as_deref(), Some("5550001"));
}
