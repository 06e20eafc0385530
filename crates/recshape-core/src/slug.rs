//! # Slug Newtype
//!
//! A post slug identifies a post within a collection and is used verbatim
//! in URLs, so it must be non-empty and free of whitespace.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// URL-safe post identifier.
///
/// # Validation
///
/// - Must contain at least one character.
/// - Must not contain any Unicode whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Create a slug, validating the non-empty/no-whitespace invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSlug`] if the value is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidSlug(s));
        }
        Ok(Self(s))
    }

    /// Access the slug string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
