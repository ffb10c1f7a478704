//! Bearer authentication middleware for protecting API endpoints.
//!
//! The middleware reads the `Authorization` header, asks the
//! `RequestAuthenticator` held in `AppState` for a decision, and either
//! short-circuits with a 401 envelope or injects an `AuthContext` into the
//! request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use aging_core::errors::DomainError;
use aging_core::services::auth::{AuthDecision, UnauthorizedReason};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject id carried by the bearer token
    pub subject_id: String,
}

/// Run the authenticator against the request headers
///
/// A header that is not valid visible ASCII counts as malformed.
fn authenticate(state: &AppState, headers: &HeaderMap) -> AuthDecision {
    match headers.get(AUTHORIZATION) {
        None => state.authenticator.authenticate(None),
        Some(value) => match value.to_str() {
            Ok(value) => state.authenticator.authenticate(Some(value)),
            Err(_) => AuthDecision::Unauthorized(UnauthorizedReason::MalformedHeader),
        },
    }
}

fn missing_state() -> ApiError {
    ApiError::Domain(DomainError::internal("application state is not configured"))
}

/// Bearer authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuth;

impl BearerAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer authentication middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let decision = match req.app_data::<web::Data<AppState>>() {
                Some(state) => authenticate(state, req.headers()),
                None => {
                    let response = missing_state().error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            match decision.into_result() {
                Ok(subject_id) => {
                    req.extensions_mut().insert(AuthContext { subject_id });
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(error) => {
                    let response = ApiError::Domain(error).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extractor for required authentication
///
/// Uses the context injected by `BearerAuth` when present and authenticates
/// the request itself otherwise.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        if let Some(context) = req.extensions().get::<AuthContext>().cloned() {
            return ready(Ok(context));
        }

        let result = match req.app_data::<web::Data<AppState>>() {
            Some(state) => authenticate(state, req.headers())
                .into_result()
                .map(|subject_id| AuthContext { subject_id })
                .map_err(|e| ApiError::Domain(e).into()),
            None => Err(missing_state().into()),
        };

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Stores;
    use actix_web::test as actix_test;
    use aging_core::services::{
        PasswordHasher, TokenService, TokenServiceConfig, DEFAULT_STORE_DEADLINE,
    };
    use std::sync::Arc;

    #[test]
    fn test_non_ascii_header_is_malformed() {
        let req = actix_test::TestRequest::default()
            .insert_header((
                AUTHORIZATION,
                actix_web::http::header::HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
            ))
            .to_http_request();

        let state = AppState::new(
            Stores::in_memory(),
            Arc::new(TokenService::new(TokenServiceConfig::new("middleware-secret"))),
            PasswordHasher::with_cost(4),
            DEFAULT_STORE_DEADLINE,
        );
        assert_eq!(
            authenticate(&state, req.headers()),
            AuthDecision::Unauthorized(UnauthorizedReason::MalformedHeader)
        );
    }
}
