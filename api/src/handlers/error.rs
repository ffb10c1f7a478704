//! Mapping of errors onto the response envelope

use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use aging_core::errors::{AuthError, DomainError, ErrorKind};
use validator::ValidationErrors;

use crate::dto::{ApiResponse, ResponseData};

/// Error type returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Unreadable request: malformed JSON, wrong types, bad path parameters
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error.kind()),
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::BadRequest(detail) => {
                log::warn!("Bad request: {}", detail);
                envelope(StatusCode::BAD_REQUEST, "request error", detail.clone())
            }
            ApiError::Validation(errors) => {
                let detail = validation_detail(errors);
                log::warn!("Validation failed: {}", detail);
                envelope(StatusCode::BAD_REQUEST, "validation error", detail)
            }
            ApiError::Serialization(error) => {
                log::error!("Response serialization failed: {}", error);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "error", error.to_string())
            }
        }
    }
}

/// HTTP status for each error category
///
/// Duplicate accounts are reported as 400 rather than 409.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ValidationFailure => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to envelope responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let kind = error.kind();
    let status = status_for(kind);

    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::warn!("Domain Error: {}", error);
    }

    let message = match error {
        DomainError::Auth(AuthError::AccountNotFound) => "Account not found",
        DomainError::Auth(AuthError::AccountAlreadyExists) => "User account already exists",
        _ => match kind {
            ErrorKind::ValidationFailure => "validation error",
            ErrorKind::Unauthorized => "Not authorized",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound | ErrorKind::InternalFailure => "error",
        },
    };

    envelope(status, message, detail(error))
}

/// Human readable text placed in the envelope's `data`
fn detail(error: &DomainError) -> String {
    match error {
        DomainError::Validation { message }
        | DomainError::Conflict { message }
        | DomainError::Internal { message } => message.clone(),
        DomainError::Unauthorized { reason } => reason.clone(),
        DomainError::NotFound { .. } | DomainError::Auth(_) | DomainError::Token(_) => {
            error.to_string()
        }
    }
}

fn validation_detail(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid ({})", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

fn envelope(status: StatusCode, message: &str, detail: String) -> HttpResponse {
    ApiResponse::new(status, message, ResponseData::message(detail)).to_response()
}

/// `JsonConfig` hook so body errors use the envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(error.to_string()).into()
}

/// `PathConfig` hook so unparsable ids use the envelope
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("invalid id: {}", error)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aging_core::errors::TokenError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::ValidationFailure), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::InternalFailure),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_error_responses() {
        let duplicate = ApiError::from(DomainError::from(AuthError::AccountAlreadyExists));
        assert_eq!(duplicate.error_response().status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from(DomainError::not_found("vessel"));
        assert_eq!(missing.error_response().status(), StatusCode::NOT_FOUND);

        let token = ApiError::from(DomainError::from(TokenError::SigningKeyMissing));
        assert_eq!(token.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_detail_text() {
        assert_eq!(detail(&DomainError::not_found("batch")), "batch not found");
        assert_eq!(
            detail(&DomainError::Unauthorized {
                reason: "token not valid".to_string()
            }),
            "token not valid"
        );
        assert_eq!(
            detail(&DomainError::from(AuthError::IncorrectPassword)),
            "Incorrect password"
        );
    }
}
