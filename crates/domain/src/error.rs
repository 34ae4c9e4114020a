//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PostboardError`] via `#[from]`.

use std::fmt;

use crate::id::PostId;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum PostboardError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),

    #[error("no unused post id found after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with ID {id} was not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn post(id: PostId) -> Self {
        Self {
            entity: "Post",
            id: id.to_string(),
        }
    }
}

/// An insert was attempted with an id that is stored or was issued before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("post id {id} is already taken")]
pub struct DuplicateIdError {
    pub id: PostId,
}

/// Where in the request an invalid value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
}

impl Location {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Path => "path",
        }
    }
}

/// JSON type a field was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    String,
    Boolean,
    Integer,
    Object,
}

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required field is absent.
    Missing,
    /// The field holds a value of the wrong JSON type.
    InvalidType(ExpectedType),
    /// The payload could not be decoded at all.
    InvalidJson(String),
}

/// A single invalid input, located by request part and optional field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub location: Location,
    pub field: Option<&'static str>,
    pub kind: FieldErrorKind,
}

impl FieldError {
    #[must_use]
    pub fn body(field: &'static str, kind: FieldErrorKind) -> Self {
        Self {
            location: Location::Body,
            field: Some(field),
            kind,
        }
    }

    #[must_use]
    pub fn path(field: &'static str, kind: FieldErrorKind) -> Self {
        Self {
            location: Location::Path,
            field: Some(field),
            kind,
        }
    }

    /// Human readable description of the failure.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.kind {
            FieldErrorKind::Missing => "field required".to_string(),
            FieldErrorKind::InvalidType(ExpectedType::String) => "str type expected".to_string(),
            FieldErrorKind::InvalidType(ExpectedType::Boolean) => {
                "value could not be parsed to a boolean".to_string()
            }
            FieldErrorKind::InvalidType(ExpectedType::Integer) => {
                "value is not a valid integer".to_string()
            }
            FieldErrorKind::InvalidType(ExpectedType::Object) => {
                "value is not a valid dict".to_string()
            }
            FieldErrorKind::InvalidJson(detail) => detail.clone(),
        }
    }

    /// Stable machine readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match &self.kind {
            FieldErrorKind::Missing => "value_error.missing",
            FieldErrorKind::InvalidType(ExpectedType::String) => "type_error.str",
            FieldErrorKind::InvalidType(ExpectedType::Boolean) => "type_error.bool",
            FieldErrorKind::InvalidType(ExpectedType::Integer) => "type_error.integer",
            FieldErrorKind::InvalidType(ExpectedType::Object) => "type_error.dict",
            FieldErrorKind::InvalidJson(_) => "value_error.jsondecode",
        }
    }

    /// Path segments such as `["body", "title"]`.
    #[must_use]
    pub fn loc(&self) -> Vec<&'static str> {
        std::iter::once(self.location.as_str())
            .chain(self.field)
            .collect()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc().join("."), self.message())
    }
}

/// One or more invalid inputs. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wrap a list of field errors, returning `None` when the list is empty.
    #[must_use]
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(err: FieldError) -> Self {
        Self(vec![err])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            err.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for PostboardError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err.into())
    }
}
