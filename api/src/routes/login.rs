use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use crate::dto::{ApiResponse, LoginRequest, ResponseData};
use crate::handlers::error::ApiError;
use crate::routes::AppState;

/// Handler for POST /api/v1/login
///
/// # Request Body
///
/// ```json
/// { "email": "a@b.com", "password": "secret1" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "status": 200, "message": "success", "data": { "token": "<jwt>" } }
/// ```
///
/// ## Errors
/// 400 on an unreadable body, 404 for an unknown email, 401 for a wrong
/// password, 500 when no token can be signed.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let token = state.accounts.login(&request.email, &request.password).await?;

    Ok(ApiResponse::success(StatusCode::OK, ResponseData::Token { token }).to_response())
}
