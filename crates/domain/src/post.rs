//! Post — the single resource served by postboard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExpectedType, FieldError, FieldErrorKind, Location, ValidationErrors};
use crate::id::PostId;

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i64>,
}

impl Post {
    /// Replace every client-supplied field, keeping the id.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.published = draft.published;
        self.rating = draft.rating;
    }
}

/// The two posts a fresh registry starts with, ids `1` and `2`.
#[must_use]
pub fn sample_posts() -> Vec<Post> {
    vec![
        PostDraft::new("post1", "cont1").into_post(PostId::new(1)),
        PostDraft::new("post2", "cont2").into_post(PostId::new(2)),
    ]
}

/// The client-supplied fields of a post: everything except the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i64>,
}

impl PostDraft {
    /// Create a draft with `published = true` and no rating.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            published: true,
            rating: None,
        }
    }

    #[must_use]
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach an id, producing a storable [`Post`].
    #[must_use]
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            published: self.published,
            rating: self.rating,
        }
    }

    /// Validate an untyped JSON body.
    ///
    /// Unknown keys (including a client-supplied `id`) are ignored.
    /// `published` and `rating` treat `null` the same as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every missing or mistyped field,
    /// or a single body-level error when `value` is not an object.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = value.as_object() else {
            return Err(FieldError {
                location: Location::Body,
                field: None,
                kind: FieldErrorKind::InvalidType(ExpectedType::Object),
            }
            .into());
        };

        let mut errors = Vec::new();
        let title = required_string(object, "title", &mut errors).unwrap_or_default();
        let content = required_string(object, "content", &mut errors).unwrap_or_default();
        let published = optional_bool(object, "published", &mut errors).unwrap_or(true);
        let rating = optional_integer(object, "rating", &mut errors);

        match ValidationErrors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(Self {
                title,
                content,
                published,
                rating,
            }),
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        None | Some(Value::Null) => {
            errors.push(FieldError::body(field, FieldErrorKind::Missing));
            None
        }
        Some(_) => {
            errors.push(FieldError::body(
                field,
                FieldErrorKind::InvalidType(ExpectedType::String),
            ));
            None
        }
    }
}

fn optional_bool(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<bool> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(value)) => Some(*value),
        Some(_) => {
            errors.push(FieldError::body(
                field,
                FieldErrorKind::InvalidType(ExpectedType::Boolean),
            ));
            None
        }
    }
}

fn optional_integer(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = value.as_i64();
            if parsed.is_none() {
                errors.push(FieldError::body(
                    field,
                    FieldErrorKind::InvalidType(ExpectedType::Integer),
                ));
            }
            parsed
        }
    }
}
