use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use std::str::FromStr;

use crate::error::{UserError, UserResult};

/// How a submitted password is written to the store.
///
/// `Plaintext` keeps the value as submitted; `Argon2` replaces it with an
/// Argon2id PHC string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordStorage {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordStorage {
    /// Read `USER_PASSWORD_STORAGE` (default `plaintext`).
    pub fn from_env() -> Result<Self, core_config::ConfigError> {
        core_config::env_parse("USER_PASSWORD_STORAGE", "plaintext")
    }

    /// The value to persist for `password`
    pub fn prepare(&self, password: &str) -> UserResult<String> {
        match self {
            Self::Plaintext => Ok(password.to_string()),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| UserError::PasswordHash(e.to_string()))
            }
        }
    }
}

impl FromStr for PasswordStorage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plaintext" => Ok(Self::Plaintext),
            "argon2" => Ok(Self::Argon2),
            other => Err(format!(
                "unknown password storage '{}', expected 'plaintext' or 'argon2'",
                other
            )),
        }
    }
}

impl std::fmt::Display for PasswordStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plaintext => write!(f, "plaintext"),
            Self::Argon2 => write!(f, "argon2"),
        }
    }
}
