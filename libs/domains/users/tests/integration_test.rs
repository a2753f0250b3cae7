//! PostgreSQL-backed tests for the users domain
//!
//! Each test starts its own container, so they are ignored by default:
//!
//! ```bash
//! cargo test -p domain_users --test integration_test -- --ignored
//! ```

use domain_users::*;
use sea_orm::DbErr;
use test_utils::{TestDataBuilder, TestDatabase, assertions::assert_some};

fn create_input(builder: &TestDataBuilder, local: &str) -> CreateUser {
    CreateUser {
        name: builder.name("user", local).into(),
        email: builder.email(local).into(),
        password: "password123".into(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_crud_lifecycle() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_crud_lifecycle");
    let service = UserService::new(PgUserRepository::new(db.connection()));

    let created = service
        .create(create_input(&builder, "ada"))
        .await
        .expect("create");
    assert_eq!(created.email, builder.email("ada"));

    let fetched = service.find_one(created.id).await.expect("find_one");
    assert_eq!(fetched.id, created.id);

    let updated = service
        .update(
            created.id,
            UpdateUser {
                name: Some("Countess".into()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.name, "Countess");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password, created.password);
    assert!(updated.updated_at >= created.updated_at);

    let by_email = service
        .find_by_email(&created.email)
        .await
        .expect("find_by_email");
    assert_eq!(by_email.id, created.id);

    service.remove(created.id).await.expect("remove");
    assert!(matches!(
        service.find_one(created.id).await,
        Err(UserError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_returns_users_in_creation_order() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_find_all");
    let service = UserService::new(PgUserRepository::new(db.connection()));

    let first = service.create(create_input(&builder, "first")).await.unwrap();
    let second = service.create(create_input(&builder, "second")).await.unwrap();

    let users = service.find_all().await.unwrap();
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_email_is_a_store_error() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_duplicate_email");
    let service = UserService::new(PgUserRepository::new(db.connection()));

    service.create(create_input(&builder, "dup")).await.unwrap();
    let result = service.create(create_input(&builder, "dup")).await;

    assert!(matches!(
        result,
        Err(UserError::Store(DbErr::Exec(_) | DbErr::Query(_)))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_repository_reports_affected_rows() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_affected_rows");
    let repository = PgUserRepository::new(db.connection());

    let user = repository
        .create(NewUser {
            name: builder.name("user", "rows"),
            email: builder.email("rows"),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    let found = assert_some(
        repository.find_by_email(&user.email).await.unwrap(),
        "user by email",
    );
    assert_eq!(found.id, user.id);

    assert_eq!(repository.delete(user.id).await.unwrap(), 1);
    assert_eq!(repository.delete(user.id).await.unwrap(), 0);

    db.truncate_users().await;
}
