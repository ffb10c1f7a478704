//! Application factory
//!
//! Builds the Actix-web application from an already wired `AppState`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};
use aging_core::domain::entities::{Batch, Document, Measurement, Spirit, Vessel};

use crate::config::CorsConfig;
use crate::dto::{BatchRequest, MeasurementRequest, SpiritRequest, VesselRequest};
use crate::handlers::error::{json_error_handler, path_error_handler};
use crate::middleware::{auth::BearerAuth, cors::create_cors};
use crate::routes::{entities, login, system, users, AppState};

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Add middleware (CORS runs before logging sees the response)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(system::health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route("", web::get().to(system::hello))
                .route("/", web::get().to(system::hello))
                .route("/login", web::post().to(login::login))
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create_user))
                        .route("", web::get().to(users::list_users).wrap(BearerAuth::new()))
                        .route("/{id}", web::get().to(users::get_user))
                        .route("/{id}", web::put().to(users::update_user))
                        .route("/{id}", web::delete().to(users::delete_user)),
                )
                .service(entities::scope::<SpiritRequest>(&collection_path::<Spirit>()))
                .service(entities::scope::<BatchRequest>(&collection_path::<Batch>()))
                .service(entities::scope::<VesselRequest>(&collection_path::<Vessel>()))
                .service(entities::scope::<MeasurementRequest>(
                    &collection_path::<Measurement>(),
                )),
        )
        // Default 404 handler
        .default_service(web::route().to(system::not_found))
}

fn collection_path<E: Document>() -> String {
    format!("/{}", E::COLLECTION)
}
