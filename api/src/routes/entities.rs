//! CRUD handlers shared by every aging entity
//!
//! Handlers are generic over the request body type; the collection served
//! is picked by `Collection::service`.

use actix_web::{http::StatusCode, web, HttpResponse, Scope};
use aging_core::domain::entities::Document;
use uuid::Uuid;

use crate::dto::{ApiResponse, EntityRequest, ResponseData};
use crate::handlers::error::ApiError;
use crate::routes::{AppState, Collection};

/// Routes for one collection: `POST /`, `GET /`, `GET|PUT|DELETE /{id}`
pub fn scope<R: EntityRequest>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::post().to(create::<R>))
        .route("", web::get().to(list::<R::Entity>))
        .route("/{id}", web::get().to(get::<R::Entity>))
        .route("/{id}", web::put().to(update::<R>))
        .route("/{id}", web::delete().to(delete::<R::Entity>))
}

pub async fn create<R: EntityRequest>(
    state: web::Data<AppState>,
    request: web::Json<R>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let id = <R::Entity as Collection>::service(&state)
        .create(request.into_entity())
        .await?;

    Ok(ApiResponse::success(StatusCode::CREATED, ResponseData::Id { data: id }).to_response())
}

pub async fn list<E: Collection>(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = E::service(&state).list().await?;

    Ok(ApiResponse::success(StatusCode::OK, ResponseData::entities(&records)?).to_response())
}

pub async fn get<E: Collection>(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let record = E::service(&state).get(id.into_inner()).await?;

    Ok(ApiResponse::success(StatusCode::OK, ResponseData::entity(&record)?).to_response())
}

/// Overwrite every field, responding with the re-read record
pub async fn update<R: EntityRequest>(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<R>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let record = <R::Entity as Collection>::service(&state)
        .update(id.into_inner(), request.into_fields())
        .await?;

    Ok(ApiResponse::success(StatusCode::OK, ResponseData::entity(&record)?).to_response())
}

pub async fn delete<E: Collection>(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    E::service(&state).delete(id.into_inner()).await?;

    let message = format!("{} deleted", E::NAME);
    Ok(ApiResponse::success(StatusCode::OK, ResponseData::message(message)).to_response())
}
