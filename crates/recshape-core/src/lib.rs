//! # recshape-core: Record Value Types
//!
//! Defines the two record shapes recognised by recshape and the newtypes
//! that carry their field-level invariants. Every other crate in the
//! workspace depends on `recshape-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Immutable value records.** `PostRecord` and `PersonRecord` are built
//!    once and expose only accessors. Equality is field equality.
//!
//! 2. **Newtypes for constrained fields.** `Slug` and `PostDate` are
//!    validated at construction and at deserialization, so a record holding
//!    one can never carry an invalid value.
//!
//! 3. **Explicit optionality.** `tags` is `Option<Vec<String>>`: absent and
//!    present-but-empty are distinct states.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `recshape-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod record;
pub mod slug;
pub mod temporal;

pub use error::ValidationError;
pub use record::{PersonRecord, PostRecord};
pub use slug::Slug;
pub use temporal::PostDate;
