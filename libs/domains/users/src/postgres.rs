use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::UserResult,
    models::{NewUser, User, UserChanges},
    repository::UserRepository,
};

/// SeaORM-backed [`UserRepository`]
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> UserResult<u64> {
        let active_model: entity::ActiveModel = changes.into();

        let result = entity::Entity::update_many()
            .set(active_model)
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> UserResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn model(email: &str) -> entity::Model {
        let now = Utc::now().into();
        entity::Model {
            id: Uuid::now_v7(),
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let row = model("ada@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();

        let repo = PgUserRepository::new(db);
        let user = repo
            .create(NewUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, row.id);
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_find_all_and_find_by_email() {
        let a = model("a@example.com");
        let b = model("b@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![a.clone(), b.clone()], vec![b.clone()]])
            .into_connection();

        let repo = PgUserRepository::new(db);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let found = repo.find_by_email("b@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(b.id));
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let repo = PgUserRepository::new(db);
        assert!(repo.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_report_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PgUserRepository::new(db);
        let changes = UserChanges {
            name: Some("Grace".to_string()),
            ..Default::default()
        };

        assert_eq!(repo.update(Uuid::now_v7(), changes).await.unwrap(), 1);
        assert_eq!(repo.delete(Uuid::now_v7()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_error_is_passed_through() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "connection reset".to_string(),
            ))])
            .into_connection();

        let repo = PgUserRepository::new(db);
        let err = repo.find_all().await.unwrap_err();

        assert!(matches!(err, UserError::Store(DbErr::Query(_))));
    }
}
