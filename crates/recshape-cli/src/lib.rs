//! # recshape-cli: CLI Tool for recshape
//!
//! Provides the `recshape` command-line interface.
//!
//! ## Subcommands
//!
//! - `recshape validate`: check a post, person, or post collection document.
//! - `recshape greet`: validate a person and print its greeting.
//! - `recshape summary`: validate a post and print its title, slug, and first tag.
//! - `recshape schema`: print the published JSON Schema for a shape.
//!
//! ```bash
//! recshape validate --kind post content/my-first-post.yaml
//! recshape validate --kind post --collection content/posts.json
//! cat person.json | recshape greet
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` the document does not match the shape, `2` operational
//! error (unreadable document, invalid config).

pub mod config;
pub mod greet;
pub mod input;
pub mod report;
pub mod schema;
pub mod summary;
pub mod validate;

/// Process exit code for a document that matched its shape.
pub const EXIT_OK: u8 = 0;

/// Process exit code for a document that failed validation.
pub const EXIT_INVALID: u8 = 1;

/// Process exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;
