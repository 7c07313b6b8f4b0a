//! User service - validation, uniqueness, hashing and projection for users.
//!
//! Every operation returns the public projection; the password hash never
//! leaves this layer. Missing users are reported as `None` / `false` so the
//! caller decides how to surface them.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CreateUser, Password, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::{NewUser, UserChanges, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;

    /// Get user by ID, `None` if unknown
    async fn get_user(&self, id: Uuid) -> AppResult<Option<UserResponse>>;

    /// Self-registration. Only the PATIENT role is accepted.
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse>;

    /// Partial update of the fields present in `input`, `None` if unknown
    async fn update_user(&self, id: Uuid, input: UpdateUser) -> AppResult<Option<UserResponse>>;

    /// Hard delete, `false` if unknown
    async fn delete_user(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl UserManager {
    /// Create new user service with repository and bcrypt cost
    pub fn new(repo: Arc<dyn UserRepository>, hash_cost: u32) -> Self {
        Self { repo, hash_cost }
    }

    /// Reject `email` if any user other than `owner` already holds it.
    async fn ensure_email_available(&self, email: &str, owner: Option<Uuid>) -> AppResult<()> {
        match self.repo.find_by_email(email).await? {
            Some(holder) if Some(holder.id) != owner => {
                tracing::warn!(holder_id = %holder.id, "Email already registered");
                Err(AppError::conflict("Email"))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<UserResponse>> {
        Ok(self.repo.find_by_id(id).await?.map(UserResponse::from))
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        input.validate()?;

        self.ensure_email_available(&input.email, None).await?;

        if !input.role.can_self_register() {
            tracing::warn!(role = %input.role, "Self-registration rejected");
            return Err(AppError::method_not_allowed(format!(
                "Self-registration is not allowed for role {}",
                input.role
            )));
        }

        let password = Password::new(&input.password, self.hash_cost)?;

        let user = self
            .repo
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash: password.into_string(),
                role: input.role,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user.into())
    }

    async fn update_user(&self, id: Uuid, input: UpdateUser) -> AppResult<Option<UserResponse>> {
        input.validate()?;

        if let Some(email) = input.email.as_deref() {
            self.ensure_email_available(email, Some(id)).await?;
        }

        let password_hash = input
            .password
            .as_deref()
            .map(|plain| Password::new(plain, self.hash_cost).map(Password::into_string))
            .transpose()?;

        let changes = UserChanges {
            name: input.name,
            email: input.email,
            password_hash,
            role: input.role,
        };

        let updated = self.repo.update(id, changes).await?;
        match &updated {
            Some(user) => tracing::info!(user_id = %user.id, "User updated"),
            None => tracing::debug!(user_id = %id, "Update skipped, user not found"),
        }

        Ok(updated.map(UserResponse::from))
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::info!(user_id = %id, "User deleted");
        }
        Ok(removed)
    }
}
