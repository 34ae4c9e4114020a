//! JSON REST handlers for posts.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use postboard_app::ports::{IdGenerator, PostRepository};
use postboard_domain::error::{ExpectedType, FieldError, FieldErrorKind, PostboardError};
use postboard_domain::id::PostId;
use postboard_domain::post::{Post, PostDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// `{"data": ..}` envelope.
#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

/// `{"post_detail": ..}` envelope.
#[derive(Serialize)]
pub struct PostDetail {
    pub post_detail: Post,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Data<Vec<Post>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<PostDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Data<Post>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Data<Post>>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<PostId, ApiError> {
    let Path(raw) = path?;
    PostId::from_str(&raw).map_err(|_| {
        ApiError::from(FieldError::path(
            "id",
            FieldErrorKind::InvalidType(ExpectedType::Integer),
        ))
    })
}

fn parse_draft(body: Result<Json<Value>, JsonRejection>) -> Result<PostDraft, ApiError> {
    let Json(value) = body?;
    PostDraft::from_json(&value).map_err(|errors| ApiError::from(PostboardError::from(errors)))
}

/// `GET /posts`
pub async fn list<R, G>(State(state): State<AppState<R, G>>) -> Result<ListResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let posts = state.post_service.list_posts().await?;
    Ok(ListResponse::Ok(Json(Data { data: posts })))
}

/// `POST /posts`
pub async fn create<R, G>(
    State(state): State<AppState<R, G>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let draft = parse_draft(body)?;
    let created = state.post_service.create_post(draft).await?;
    Ok(CreateResponse::Created(Json(Data { data: created })))
}

/// `GET /posts/:id`
pub async fn get<R, G>(
    State(state): State<AppState<R, G>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let post = state.post_service.get_post(parse_id(id)?).await?;
    Ok(GetResponse::Ok(Json(PostDetail { post_detail: post })))
}

/// `PUT /posts/:id`
pub async fn update<R, G>(
    State(state): State<AppState<R, G>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let id = parse_id(id)?;
    let draft = parse_draft(body)?;
    let updated = state.post_service.update_post(id, draft).await?;
    Ok(UpdateResponse::Ok(Json(Data { data: updated })))
}

/// `DELETE /posts/:id`
pub async fn delete<R, G>(
    State(state): State<AppState<R, G>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    state.post_service.delete_post(parse_id(id)?).await?;
    Ok(DeleteResponse::NoContent)
}
