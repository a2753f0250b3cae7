use axum_helpers::StringField;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, User, UserChanges};
use crate::password::PasswordStorage;
use crate::repository::UserRepository;

/// User lifecycle: validation, existence checks, logging.
///
/// Store failures are logged and returned unchanged; nothing is retried.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    password_storage: PasswordStorage,
}

impl<R: UserRepository> UserService<R> {
    /// Service with the default [`PasswordStorage::Plaintext`].
    pub fn new(repository: R) -> Self {
        Self::with_password_storage(repository, PasswordStorage::default())
    }

    pub fn with_password_storage(repository: R, password_storage: PasswordStorage) -> Self {
        if password_storage == PasswordStorage::Plaintext {
            warn!("User passwords are stored as plaintext; set USER_PASSWORD_STORAGE=argon2 to hash them");
        }

        Self {
            repository: Arc::new(repository),
            password_storage,
        }
    }

    #[instrument(skip(self, input), fields(email = input.email.as_str().unwrap_or_default()))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        info!("Creating new user");
        input.validate()?;

        let new_user = NewUser {
            password: self.password_storage.prepare(&input.password.into_string())?,
            name: input.name.into_string(),
            email: input.email.into_string(),
        };

        let user = self
            .repository
            .create(new_user)
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to create user"))?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> UserResult<Vec<User>> {
        info!("Fetching all users");

        let users = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to fetch users"))?;

        info!(count = users.len(), "Retrieved users");
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: Uuid) -> UserResult<User> {
        info!("Fetching user");

        let user = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to fetch user"))?;

        match user {
            Some(user) => {
                info!("Retrieved user");
                Ok(user)
            }
            None => {
                warn!("User not found");
                Err(UserError::not_found_by_id(id))
            }
        }
    }

    /// Validate, check existence, apply the provided fields and re-read.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        info!("Updating user");
        input.validate()?;

        let existing = self.find_one(id).await?;

        let changes = UserChanges {
            name: input.name.map(StringField::into_string),
            email: input.email.map(StringField::into_string),
            password: input
                .password
                .map(|p| self.password_storage.prepare(&p.into_string()))
                .transpose()?,
        };

        if changes.is_empty() {
            info!("No fields to update");
            return Ok(existing);
        }

        self.repository
            .update(id, changes)
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to update user"))?;

        // Deleted between the existence check and the re-read
        let updated = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to re-read updated user"))?
            .ok_or_else(|| {
                warn!("User disappeared during update");
                UserError::not_found_by_id(id)
            })?;

        info!("User updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> UserResult<()> {
        info!("Removing user");

        self.find_one(id).await?;

        self.repository
            .delete(id)
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to remove user"))?;

        info!("User removed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> UserResult<User> {
        info!("Fetching user by email");

        let user = self
            .repository
            .find_by_email(email)
            .await
            .inspect_err(|e| error!(error = ?e, "Failed to fetch user by email"))?;

        match user {
            Some(user) => {
                info!(user_id = %user.id, "Retrieved user by email");
                Ok(user)
            }
            None => {
                warn!("User not found by email");
                Err(UserError::not_found_by_email(email))
            }
        }
    }
}
