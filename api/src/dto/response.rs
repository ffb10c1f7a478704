//! Response envelope shared by every endpoint
//!
//! ```json
//! { "status": 200, "message": "success", "data": { "data": ... } }
//! ```

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use super::auth::UserView;

/// Payload carried in the envelope's `data` field
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    /// Human readable message, also used for error details
    Message { data: String },
    /// Id of a newly created record
    Id { data: Uuid },
    /// Bearer token issued by login
    Token { token: String },
    /// A single record
    Entity { data: serde_json::Value },
    /// A whole collection
    Entities { data: Vec<serde_json::Value> },
    /// All user accounts
    Users { users: Vec<UserView> },
}

impl ResponseData {
    pub fn message(data: impl Into<String>) -> Self {
        ResponseData::Message { data: data.into() }
    }

    /// Serialize a record into the `Entity` variant
    pub fn entity<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        Ok(ResponseData::Entity {
            data: serde_json::to_value(record)?,
        })
    }

    pub fn entities<T: Serialize>(records: &[T]) -> Result<Self, serde_json::Error> {
        let data = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ResponseData::Entities { data })
    }
}

/// `{status, message, data}` envelope; `status` mirrors the HTTP status
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub message: String,
    pub data: ResponseData,
}

impl ApiResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, data: ResponseData) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    pub fn success(status: StatusCode, data: ResponseData) -> Self {
        Self::new(status, "success", data)
    }

    pub fn to_response(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shapes() {
        let hello = ApiResponse::success(StatusCode::OK, ResponseData::message("Hello world"));
        assert_eq!(
            serde_json::to_value(&hello).unwrap(),
            json!({ "status": 200, "message": "success", "data": { "data": "Hello world" } })
        );

        let token = ApiResponse::success(
            StatusCode::OK,
            ResponseData::Token {
                token: "abc".to_string(),
            },
        );
        assert_eq!(serde_json::to_value(&token).unwrap()["data"], json!({ "token": "abc" }));

        let users = ApiResponse::success(StatusCode::OK, ResponseData::Users { users: vec![] });
        assert_eq!(serde_json::to_value(&users).unwrap()["data"], json!({ "users": [] }));
    }

    #[test]
    fn test_to_response_uses_envelope_status() {
        let created = ApiResponse::success(
            StatusCode::CREATED,
            ResponseData::Id {
                data: Uuid::new_v4(),
            },
        );
        assert_eq!(created.to_response().status(), StatusCode::CREATED);
    }
}
