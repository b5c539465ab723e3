use actix_web::{error, web, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{ERR_INVALID_JSON, ERR_INVALID_USER_ID};
use crate::errors::ApiError;
use crate::handlers;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/users")
                .route("", web::get().to(handlers::get_users))
                .route("", web::post().to(handlers::create_user))
                .route("/{id}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Malformed bodies answer with the same JSON error shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        let message = match &err {
            error::JsonPayloadError::Deserialize(e) => format!("{}: {}", ERR_INVALID_JSON, e),
            _ => ERR_INVALID_JSON.to_string(),
        };
        ApiError::BadRequest(message).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        warn!("Rejected path parameter: {}", err);
        ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()).into()
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
