use actix_web::{http::StatusCode, web, HttpResponse};

use crate::dto::{ApiResponse, ResponseData};
use crate::routes::AppState;

/// Health check endpoint handler
///
/// Reports the database as `unavailable` (with 503) when a configured pool
/// fails its round trip.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (database, healthy) = match &state.database {
        None => ("not configured".to_string(), true),
        Some(pool) => match pool.health_check().await {
            Ok(true) => (pool.statistics().to_string(), true),
            Ok(false) | Err(_) => ("unavailable".to_string(), false),
        },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        log::error!("Health check failed: database unavailable");
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status).json(serde_json::json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "service": "aging-api",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handler for GET /api/v1
pub async fn hello() -> HttpResponse {
    ApiResponse::success(StatusCode::OK, ResponseData::message("Hello world")).to_response()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ApiResponse::new(
        StatusCode::NOT_FOUND,
        "error",
        ResponseData::message("The requested resource was not found"),
    )
    .to_response()
}
