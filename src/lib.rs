//! Clinic Users - user registration and management service
//!
//! Stores clinic users (admins, doctors, patients, receptionists) in
//! PostgreSQL and exposes create, read, update and delete over HTTP.
//! Only patients may self-register; passwords are stored as bcrypt hashes
//! and never returned.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation rules
//! - **services**: The user service
//! - **infra**: Database, migrations and the user repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{CreateUser, Password, UpdateUser, User, UserResponse, UserRole};
pub use errors::{AppError, AppResult};
pub use services::{UserManager, UserService};
