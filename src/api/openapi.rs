//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, UserResponse, UserRole};
use crate::types::MessageResponse;

/// OpenAPI documentation for the clinic user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic Users",
        version = "0.1.0",
        description = "User registration and management for the clinic platform"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::get_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            CreateUser,
            UpdateUser,
            MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
