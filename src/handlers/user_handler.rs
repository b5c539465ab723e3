//! User handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{UserRequest, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 204, description = "No users stored"),
        (status = 500, description = "Database failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all_users().await?;

    if users.is_empty() {
        debug!("No users stored");
        return Ok(HttpResponse::NoContent().finish());
    }

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user_by_id(user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error or email already registered", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for create user: {}", err);
        err
    })?;

    let user = user_service.create_user(body.into_inner().into()).await?;

    info!("Successfully created user: {:?}", user.id);
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Replace a user's name, email and age
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error or email already registered", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    body.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for update user {}: {}", user_id, err);
        err
    })?;

    let user = user_service
        .update_user(user_id, body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    user_service.delete_user(user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
