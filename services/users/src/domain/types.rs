use serde::Serialize;

pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Returned in place of the stored hash whenever a projection carries `pass`.
pub const PASSWORD_PLACEHOLDER: &str = "The password is hashed and will not be able to show.";

/// User account as stored. `pass` is the bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub phone: String,
    pub pass: String,
    /// Roles as persisted, without the implicit `ROLE_USER`.
    pub roles: Vec<String>,
}

impl User {
    /// Stored roles plus `ROLE_USER`, deduplicated, first occurrence wins.
    pub fn effective_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = Vec::with_capacity(self.roles.len() + 1);
        for role in self
            .roles
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(ROLE_USER))
        {
            if !roles.iter().any(|r| r == role) {
                roles.push(role.to_owned());
            }
        }
        roles
    }

    /// Read projection: login and phone, password masked.
    pub fn masked(&self) -> UserData {
        UserData {
            id: None,
            login: Some(self.login.clone()),
            phone: Some(self.phone.clone()),
            pass: Some(PASSWORD_PLACEHOLDER.to_owned()),
        }
    }
}

/// A user about to be inserted; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub phone: String,
    pub pass_hash: String,
    pub roles: Vec<String>,
}

/// Partial, transport-shaped view of a user. Absent fields are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
}

/// The authenticated caller with roles resolved from their own record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub login: String,
    pub roles: Vec<String>,
}

impl Caller {
    pub fn from_user(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            roles: user.effective_roles(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}
