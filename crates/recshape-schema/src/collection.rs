//! # Post Collections
//!
//! A slug identifies a post within its collection. This module validates a
//! sequence of post inputs and checks slug uniqueness across those that pass
//! shape validation.

use std::collections::HashMap;
use std::fmt;

use recshape_core::{PostRecord, Slug};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::shape::ShapeError;
use crate::validate::validate_post;

/// One collection item that failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    /// Zero-based position in the input sequence.
    pub index: usize,
    pub error: ShapeError,
}

/// A slug used by more than one valid post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateSlug {
    pub slug: Slug,
    /// Position of the first post using this slug.
    pub first_index: usize,
    /// Position of a later post reusing it.
    pub duplicate_index: usize,
}

impl fmt::Display for DuplicateSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slug {:?} at [{}] already used at [{}]",
            self.slug.as_str(),
            self.duplicate_index,
            self.first_index
        )
    }
}

/// Error from [`validate_posts`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CollectionError {
    /// The input is not a sequence.
    #[error("post collection must be a sequence")]
    NotASequence,

    /// At least one item failed, or slugs collide.
    #[error("{} invalid post(s), {} duplicate slug(s)", .failures.len(), .duplicates.len())]
    Invalid {
        failures: Vec<ItemFailure>,
        duplicates: Vec<DuplicateSlug>,
    },
}

/// Validate a sequence of post inputs.
///
/// Returns the records in input order when every item is a valid post and
/// no slug repeats.
///
/// # Errors
///
/// Returns [`CollectionError::NotASequence`] if `input` is not an array, and
/// [`CollectionError::Invalid`] listing every failing item and every
/// duplicate slug otherwise. Duplicates are only checked among items that
/// passed shape validation.
pub fn validate_posts(input: &Value) -> Result<Vec<PostRecord>, CollectionError> {
    let items = input.as_array().ok_or(CollectionError::NotASequence)?;

    let mut records = Vec::with_capacity(items.len());
    let mut failures = Vec::new();
    let mut duplicates = Vec::new();
    let mut seen: HashMap<Slug, usize> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        match validate_post(item) {
            Ok(record) => {
                if let Some(&first_index) = seen.get(record.slug()) {
                    duplicates.push(DuplicateSlug {
                        slug: record.slug().clone(),
                        first_index,
                        duplicate_index: index,
                    });
                } else {
                    seen.insert(record.slug().clone(), index);
                }
                records.push(record);
            }
            Err(error) => failures.push(ItemFailure { index, error }),
        }
    }

    if failures.is_empty() && duplicates.is_empty() {
        Ok(records)
    } else {
        Err(CollectionError::Invalid {
            failures,
            duplicates,
        })
    }
}
