//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use postboard_domain::error::{
    ExpectedType, FieldError, FieldErrorKind, Location, PostboardError,
};

/// JSON error body for single-message errors.
#[derive(Serialize)]
struct DetailBody<'a> {
    detail: &'a str,
}

/// One entry of a validation error body.
#[derive(Serialize)]
struct FieldDetail {
    loc: Vec<&'static str>,
    msg: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl From<&FieldError> for FieldDetail {
    fn from(err: &FieldError) -> Self {
        Self {
            loc: err.loc(),
            msg: err.message(),
            kind: err.code(),
        }
    }
}

/// JSON error body listing every invalid field.
#[derive(Serialize)]
struct ValidationBody {
    detail: Vec<FieldDetail>,
}

/// Maps [`PostboardError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// Domain or validation failure.
    Domain(PostboardError),
    /// The request was refused before its content could be validated, e.g.
    /// a body over the size limit.
    Rejected { status: StatusCode, detail: String },
}

impl From<PostboardError> for ApiError {
    fn from(err: PostboardError) -> Self {
        Self::Domain(err)
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(_) => Self::Rejected {
                status: rejection.status(),
                detail: rejection.body_text(),
            },
            _ => Self::from(FieldError {
                location: Location::Body,
                field: None,
                kind: FieldErrorKind::InvalidJson(rejection.body_text()),
            }),
        }
    }
}

/// Only `{id}` is captured, so any path rejection is a bad id (e.g. a
/// segment that does not percent-decode to UTF-8).
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::from(FieldError::path(
            "id",
            FieldErrorKind::InvalidType(ExpectedType::Integer),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Rejected { status, detail } => {
                return (status, Json(DetailBody { detail: &detail })).into_response();
            }
        };
        match &err {
            PostboardError::Validation(errors) => {
                let body = ValidationBody {
                    detail: errors.errors().iter().map(FieldDetail::from).collect(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            PostboardError::NotFound(not_found) => {
                let detail = not_found.to_string();
                (StatusCode::NOT_FOUND, Json(DetailBody { detail: &detail })).into_response()
            }
            PostboardError::DuplicateId(_)
            | PostboardError::IdSpaceExhausted { .. }
            | PostboardError::Storage(_) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(DetailBody {
                        detail: "internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Fallback for unmatched routes, shaped like every other error body.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(DetailBody {
            detail: "Not Found",
        }),
    )
}
