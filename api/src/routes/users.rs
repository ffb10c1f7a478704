//! User account handlers

use actix_web::{http::StatusCode, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{ApiResponse, CreateUserRequest, ResponseData, UpdateUserRequest, UserView};
use crate::handlers::error::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/users
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let id = state.accounts.register(&request.email, &request.password).await?;

    Ok(ApiResponse::success(StatusCode::CREATED, ResponseData::Id { data: id }).to_response())
}

/// Handler for GET /api/v1/users; requires a bearer token
pub async fn list_users(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    log::debug!("Listing users for subject {}", auth.subject_id);

    let users = state
        .users
        .list()
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(ApiResponse::success(StatusCode::OK, ResponseData::Users { users }).to_response())
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = state.users.get(id.into_inner()).await?;
    let data = ResponseData::entity(&UserView::from(user))?;

    Ok(ApiResponse::success(StatusCode::OK, data).to_response())
}

/// Handler for PUT /api/v1/users/{id}
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .accounts
        .update_email(id.into_inner(), &request.email)
        .await?;
    let data = ResponseData::entity(&UserView::from(user))?;

    Ok(ApiResponse::success(StatusCode::OK, data).to_response())
}

/// Handler for DELETE /api/v1/users/{id}
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state.users.delete(id.into_inner()).await?;

    Ok(ApiResponse::success(StatusCode::OK, ResponseData::message("user deleted")).to_response())
}
