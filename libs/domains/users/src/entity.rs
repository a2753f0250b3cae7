use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{NewUser, User, UserChanges};

/// SeaORM entity for the `users` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag
    pub const TAG: &'static str = "users";
    /// Mount point of the users router under `/api`
    pub const URL: &'static str = "/user";
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<NewUser> for ActiveModel {
    fn from(input: NewUser) -> Self {
        let now = chrono::Utc::now();

        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            email: Set(input.email),
            password: Set(input.password),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

/// Only the provided fields are set; `updated_at` is always refreshed.
impl From<UserChanges> for ActiveModel {
    fn from(changes: UserChanges) -> Self {
        let mut model = ActiveModel {
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(email) = changes.email {
            model.email = Set(email);
        }
        if let Some(password) = changes.password {
            model.password = Set(password);
        }

        model
    }
}
