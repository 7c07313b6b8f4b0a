//! User domain entity and related types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{
    EMAIL_PATTERN, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, ROLE_ADMIN, ROLE_DOCTOR, ROLE_PATIENT,
    ROLE_RECEPTIONIST,
};
use crate::errors::AppError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Doctor,
    Patient,
    Receptionist,
}

impl UserRole {
    /// Whether an unauthenticated caller may register with this role
    pub fn can_self_register(&self) -> bool {
        matches!(self, UserRole::Patient)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Doctor => ROLE_DOCTOR,
            UserRole::Patient => ROLE_PATIENT,
            UserRole::Receptionist => ROLE_RECEPTIONIST,
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_DOCTOR => Ok(UserRole::Doctor),
            ROLE_PATIENT => Ok(UserRole::Patient),
            ROLE_RECEPTIONIST => Ok(UserRole::Receptionist),
            other => Err(AppError::validation(format!("Unknown role: {}", other))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Self-registration payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Display name (minimum 2 characters)
    #[validate(length(min = MIN_NAME_LENGTH))]
    #[schema(example = "Test User", min_length = 2)]
    pub name: String,
    /// Unique email address
    #[validate(regex(path = *EMAIL_REGEX))]
    #[schema(example = "test@example.com")]
    pub email: String,
    /// Plain text password (minimum 8 characters), hashed before storage
    #[validate(length(min = MIN_PASSWORD_LENGTH))]
    #[schema(example = "testpass123", min_length = 8)]
    pub password: String,
    /// Requested role; only PATIENT is accepted
    #[schema(example = "PATIENT")]
    pub role: UserRole,
}

/// Partial update payload. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = MIN_NAME_LENGTH))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[validate(regex(path = *EMAIL_REGEX))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[validate(length(min = MIN_PASSWORD_LENGTH))]
    pub password: Option<String>,
    #[schema(example = "DOCTOR")]
    pub role: Option<UserRole>,
}

/// Public projection of a user (no password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Test User")]
    pub name: String,
    #[schema(example = "test@example.com")]
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
