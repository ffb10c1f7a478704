//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin; production only allows the origins listed
//! in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::CorsConfig;

/// Creates a CORS middleware instance for the configured environment.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors(config.max_age)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

/// Permissive configuration for local tools and front-end dev servers.
fn create_development_cors(max_age: usize) -> Cors {
    log::debug!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_production_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if config.allowed_origins.is_empty() {
        log::warn!("ALLOWED_ORIGINS is empty; cross-origin requests will be rejected");
    }

    cors
}
