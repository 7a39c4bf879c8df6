// src/domain/magazine/value_objects.rs
use crate::domain::errors::{
    DomainResult, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MagazineId(pub i64);

impl MagazineId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(ValidationError::InvalidId {
                kind: "magazine",
                value: id,
            })
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MagazineId> for i64 {
    fn from(value: MagazineId) -> Self {
        value.0
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "magazine#{}", self.0)
    }
}

/// Magazine name, 2 to 16 characters inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MagazineName(String);

impl MagazineName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let actual = value.chars().count();
        if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&actual) {
            return Err(ValidationError::MagazineNameLength { actual });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MagazineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MagazineName> for String {
    fn from(value: MagazineName) -> Self {
        value.0
    }
}

impl TryFrom<String> for MagazineName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
