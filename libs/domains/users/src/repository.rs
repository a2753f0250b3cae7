use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{NewUser, User, UserChanges};

/// Persistence for users.
///
/// The repository reports facts (`None`, affected row counts); turning those
/// into `NotFound` is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with a generated id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Overwrite the provided fields; returns the number of rows affected
    async fn update(&self, id: Uuid, changes: UserChanges) -> UserResult<u64>;

    /// Returns the number of rows deleted
    async fn delete(&self, id: Uuid) -> UserResult<u64>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password: input.password,
            created_at: now,
            updated_at: now,
        };

        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by_key(|u| u.id);
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> UserResult<u64> {
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) => {
                user.apply(changes);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> UserResult<u64> {
        let removed = self.users.write().await.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
