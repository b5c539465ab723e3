use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, UserRequest, UserResponse};

/// OpenAPI documentation for the User CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "Create, read, update and delete users stored in a relational table."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD operations")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::health_check
    ),
    components(
        schemas(UserRequest, UserResponse, ErrorResponse, HealthResponse)
    )
)]
pub struct ApiDoc;
