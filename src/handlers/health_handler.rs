//! Liveness endpoint.

use actix_web::{web, HttpResponse};
use log::error;

use crate::constants::{MSG_DATABASE_UNAVAILABLE, MSG_SERVER_RUNNING};
use crate::models::HealthResponse;
use crate::services::UserService;

/// Report whether the server and its database are reachable
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server and database are up", body = HealthResponse),
        (status = 500, description = "Database is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(user_service: web::Data<UserService>) -> HttpResponse {
    match user_service.check_database().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "OK".to_string(),
            message: MSG_SERVER_RUNNING.to_string(),
        }),
        Err(e) => {
            error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(HealthResponse {
                status: "ERROR".to_string(),
                message: MSG_DATABASE_UNAVAILABLE.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::repositories::SqliteUserRepository;
    use crate::routes::configure_routes;

    #[actix_web::test]
    async fn test_health_check_reports_ok() {
        let repository = SqliteUserRepository::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory database");
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(UserService::new(Arc::new(repository))))
                .configure(configure_routes),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/health").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({ "status": "OK", "message": "Server is running" }));
    }
}
