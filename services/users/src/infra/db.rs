use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, SqlErr,
};
use serde_json::Value;

use userbase_users_schema::users;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::UsersServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_error(e, "find user by id"))?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .one(&self.db)
            .await
            .map_err(|e| store_error(e, "find user by login"))?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<i32, UsersServiceError> {
        let model = users::ActiveModel {
            id: NotSet,
            login: Set(user.login.clone()),
            phone: Set(user.phone.clone()),
            pass: Set(user.pass_hash.clone()),
            roles: Set(roles_to_json(&user.roles)),
        }
        .insert(&self.db)
        .await
        .map_err(|e| store_error(e, "create user"))?;
        Ok(model.id)
    }

    async fn update(&self, user: &User) -> Result<(), UsersServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            login: Set(user.login.clone()),
            phone: Set(user.phone.clone()),
            pass: Set(user.pass.clone()),
            roles: NotSet,
        }
        .update(&self.db)
        .await
        .map_err(|e| store_error(e, "update user"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, UsersServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| store_error(e, "delete user"))?;
        Ok(result.rows_affected > 0)
    }
}

/// Unique-index violations mean the login is taken; everything else is a store failure.
fn store_error(err: DbErr, action: &'static str) -> UsersServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return UsersServiceError::LoginTaken;
    }
    UsersServiceError::Persistence(anyhow::Error::new(err).context(action))
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        login: model.login,
        phone: model.phone,
        pass: model.pass,
        roles: roles_from_json(&model.roles),
    }
}

/// Non-string entries are skipped.
fn roles_from_json(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|roles| {
            roles
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn roles_to_json(roles: &[String]) -> Value {
    Value::Array(roles.iter().cloned().map(Value::String).collect())
}
