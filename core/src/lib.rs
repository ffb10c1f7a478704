//! # Aging Core
//!
//! Core business logic and domain layer for the spirits aging API.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that the infrastructure and API crates build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Batch, BatchFields, Document, Measurement, MeasurementFields, Spirit, SpiritFields, User,
    UserFields, Vessel, VesselFields,
};
pub use domain::value_objects::HashedCredential;
pub use errors::{AuthError, DomainError, ErrorKind, TokenError};
pub use repositories::{EntityRepository, InMemoryStore, UserRepository};
pub use services::{
    AccountService, AuthDecision, EntityService, PasswordHasher, RequestAuthenticator,
    TokenService, TokenServiceConfig, UnauthorizedReason, DEFAULT_STORE_DEADLINE,
};
