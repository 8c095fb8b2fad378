use std::sync::{Arc, Mutex};

use userbase_users::domain::repository::{PasswordHasher, UserRepository};
use userbase_users::domain::types::{NewUser, ROLE_ADMIN, User};
use userbase_users::error::UsersServiceError;
use userbase_users_schema::users;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

/// In-memory store shared between clones, so several processors can act on
/// the same data within one test.
#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UsersServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UsersServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.login == login)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<i32, UsersServiceError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.login == user.login) {
            return Err(UsersServiceError::LoginTaken);
        }
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(User {
            id,
            login: user.login.clone(),
            phone: user.phone.clone(),
            pass: user.pass_hash.clone(),
            roles: user.roles.clone(),
        });
        Ok(id)
    }

    async fn update(&self, user: &User) -> Result<(), UsersServiceError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.login == user.login && u.id != user.id) {
            return Err(UsersServiceError::LoginTaken);
        }
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, UsersServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() != before)
    }
}

// ── FakeHasher ───────────────────────────────────────────────────────────────

/// Cheap stand-in for bcrypt.
pub struct FakeHasher;

impl PasswordHasher for FakeHasher {
    async fn hash(&self, plain: &str) -> Result<String, UsersServiceError> {
        Ok(format!("hashed:{plain}"))
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user() -> User {
    User {
        id: 1,
        login: "john".to_owned(),
        phone: "5551234".to_owned(),
        pass: "hashed:secret".to_owned(),
        roles: vec![],
    }
}

pub fn test_admin() -> User {
    User {
        id: 2,
        login: "root".to_owned(),
        phone: "5550000".to_owned(),
        pass: "hashed:toor".to_owned(),
        roles: vec![ROLE_ADMIN.to_owned()],
    }
}

// ── Mock store rows ──────────────────────────────────────────────────────────

pub fn user_row(id: i32, login: &str, roles: &[&str]) -> users::Model {
    users::Model {
        id,
        login: login.to_owned(),
        phone: "5551234".to_owned(),
        pass: "$2b$04$hash".to_owned(),
        roles: serde_json::json!(roles),
    }
}

/// Rows returned by a lookup that matched nothing.
pub fn no_rows() -> Vec<users::Model> {
    Vec::new()
}
