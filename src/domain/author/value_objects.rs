// src/domain/author/value_objects.rs
use crate::domain::errors::{DomainResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(ValidationError::InvalidId {
                kind: "author",
                value: id,
            })
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "author#{}", self.0)
    }
}

/// Display name of an author. Any non-empty string is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

impl TryFrom<String> for AuthorName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
