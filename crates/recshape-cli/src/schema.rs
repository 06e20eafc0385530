//! # Schema Subcommand
//!
//! Prints the published JSON Schema for a record shape.

use anyhow::Result;
use clap::Args;

use recshape_schema::{shape_schema, RecordKind};

use crate::report;
use crate::EXIT_OK;

/// Arguments for the `recshape schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Record shape to describe (`post` or `person`).
    #[arg(long, short)]
    pub kind: RecordKind,
}

/// Output is always JSON; `--format` does not apply.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    report::print_json(&shape_schema(args.kind))?;
    Ok(EXIT_OK)
}
