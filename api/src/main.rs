use std::sync::Arc;

use actix_web::{web, HttpServer};
use aging_api::{
    app::create_app,
    config::Config,
    routes::{AppState, Stores},
};
use aging_core::services::{PasswordHasher, TokenService, TokenServiceConfig};
use aging_infra::database::{ensure_schema, DatabasePool};
use aging_shared::config::Environment;
use anyhow::Context;
use log::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    let environment = Environment::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(environment.default_log_filter()),
    );

    info!("Starting aging API server ({})", environment);

    // Missing secrets or an unusable port are fatal
    let config = Config::from_env()
        .map_err(|e| {
            error!("Invalid configuration: {}", e);
            e
        })
        .context("invalid configuration")?;

    let pool = DatabasePool::new(&config.app.database)
        .await
        .context("failed to connect to the database")?;
    ensure_schema(pool.pool())
        .await
        .context("failed to prepare the database schema")?;

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.app.auth)));
    let state = web::Data::new(
        AppState::new(
            Stores::mysql(&pool),
            token_service,
            PasswordHasher::new(),
            config.app.database.request_deadline(),
        )
        .with_database(pool.clone()),
    );

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
