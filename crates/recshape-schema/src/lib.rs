//! # recshape-schema: Record Shape Validation
//!
//! Checks arbitrary untyped input against the post and person record shapes
//! and reports every field-level problem in one pass.
//!
//! ## Validation (`validate`)
//!
//! - [`validate_post`]: returns a [`PostRecord`](recshape_core::PostRecord)
//!   or a [`ShapeError`] listing every missing, mistyped, or unparseable field.
//! - [`validate_person`]: the same for [`PersonRecord`](recshape_core::PersonRecord).
//! - [`RecordKind`]: selects one of the two shapes at runtime.
//!
//! Both validators are pure and total: any `serde_json::Value` yields either
//! a record or a classified error, never a panic.
//!
//! ## Collections (`collection`)
//!
//! [`validate_posts`] validates a sequence of posts and additionally checks
//! that slugs are unique within it.
//!
//! ## Documents (`document`)
//!
//! [`load_document`] and [`parse_document`] turn JSON or YAML text into the
//! untyped value the validators consume.
//!
//! ## Published Schemas (`descriptor`)
//!
//! [`shape_schema`] returns a JSON Schema (Draft 2020-12) describing each
//! shape, for consumers that validate with their own tooling.
//!
//! ## Crate Policy
//!
//! - Depends only on `recshape-core` internally.
//! - Validation has no side effects: no logging, no I/O.

pub mod collection;
pub mod descriptor;
pub mod document;
pub mod shape;
pub mod validate;

pub use collection::{validate_posts, CollectionError, DuplicateSlug, ItemFailure};
pub use descriptor::shape_schema;
pub use document::{load_document, parse_document, DocumentError, DocumentFormat};
pub use shape::{FieldProblem, ProblemKind, ShapeError, ROOT_FIELD};
pub use validate::{
    validate_person, validate_post, RecordKind, UnknownRecordKind, ValidatedRecord,
};
