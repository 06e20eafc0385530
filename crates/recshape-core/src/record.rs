//! # Record Types
//!
//! The two record shapes: a blog post and a person. Both are immutable
//! values. Fields are private and exposed through accessors so a record
//! cannot be altered after construction.
//!
//! Deserializing directly into these types enforces the newtype invariants
//! (`Slug`, `PostDate`) but reports only the first problem. Use the
//! `recshape-schema` validators to get a complete field-level report.

use serde::{Deserialize, Serialize};

use crate::slug::Slug;
use crate::temporal::PostDate;

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    title: String,
    slug: Slug,
    date: PostDate,
    content: String,
    /// `None` means the tags field was absent; `Some(vec![])` means it was
    /// present and empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    author: String,
}

impl PostRecord {
    /// Assemble a post from already-validated parts.
    pub fn new(
        title: impl Into<String>,
        slug: Slug,
        date: PostDate,
        content: impl Into<String>,
        tags: Option<Vec<String>>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug,
            date,
            content: content.into(),
            tags,
            author: author.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn date(&self) -> PostDate {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Tags in their original order, or `None` when the post has no tags field.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// The first tag, if the tags field is present and non-empty.
    pub fn first_tag(&self) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|tags| tags.first())
            .map(String::as_str)
    }
}

/// A person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    age: u64,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, age: u64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    /// Render the greeting line, e.g. `Hello, Aditya! You are 30 years old.`
    pub fn greeting(&self) -> String {
        format!("Hello, {}! You are {} years old.", self.name, self.age)
    }
}
