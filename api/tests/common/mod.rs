//! Shared helpers for API integration tests

use std::sync::Arc;

use actix_web::web;
use aging_api::routes::{AppState, Stores};
use aging_core::services::{
    PasswordHasher, TokenService, TokenServiceConfig, DEFAULT_STORE_DEADLINE,
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory state with a cheap bcrypt cost
pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        Stores::in_memory(),
        Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET))),
        PasswordHasher::with_cost(4),
        DEFAULT_STORE_DEADLINE,
    ))
}
