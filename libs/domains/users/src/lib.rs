//! Users domain: CRUD over a single `users` table.
//!
//! ```text
//! Handlers   → HTTP routes, response shaping
//! Service    → validation, existence checks, logging
//! Repository → persistence (SeaORM or in-memory)
//! ```
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, NewUser, UpdateUser, User, UserChanges, UserResponse};
pub use password::PasswordStorage;
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
