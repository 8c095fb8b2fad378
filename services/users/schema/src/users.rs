use sea_orm::entity::prelude::*;

/// User account record.
///
/// `pass` holds the bcrypt hash, never the plaintext. `roles` is a JSON array of
/// role names; `ROLE_USER` is implied and not stored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub login: String,
    pub phone: String,
    pub pass: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub roles: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
