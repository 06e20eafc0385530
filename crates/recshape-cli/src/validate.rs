//! # Validate Subcommand
//!
//! Checks one document against a record shape, or a sequence of posts
//! against the post shape plus slug uniqueness.

use anyhow::{bail, Result};
use clap::Args;

use recshape_schema::{validate_posts, RecordKind, ValidatedRecord};

use crate::config::{OutputFormat, Settings};
use crate::input::InputArgs;
use crate::report;
use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `recshape validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record shape to validate against (`post` or `person`).
    #[arg(long, short)]
    pub kind: RecordKind,

    /// Treat the document as a sequence of posts and check slug uniqueness.
    #[arg(long)]
    pub collection: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> Result<u8> {
    if args.collection && args.kind != RecordKind::Post {
        bail!("--collection is only supported for --kind post");
    }

    let document = args.input.read()?;
    let source = args.input.source_name();

    if args.collection {
        return match validate_posts(&document) {
            Ok(records) => {
                tracing::info!(source = %source, count = records.len(), "collection valid");
                match settings.format {
                    OutputFormat::Text => {
                        println!("OK: {source}: {} post(s), slugs unique", records.len());
                    }
                    OutputFormat::Json => {
                        report::print_json(&report::success_json("records", &records)?)?;
                    }
                }
                Ok(EXIT_OK)
            }
            Err(err) => {
                tracing::info!(source = %source, error = %err, "collection invalid");
                report::print_collection_failure(settings.format, &source, &err)?;
                Ok(EXIT_INVALID)
            }
        };
    }

    match args.kind.validate(&document) {
        Ok(record) => {
            tracing::info!(source = %source, kind = %args.kind, "document valid");
            match settings.format {
                OutputFormat::Text => println!("OK: {source}: {}", describe(&record)),
                OutputFormat::Json => {
                    report::print_json(&report::success_json("record", &record)?)?;
                }
            }
            Ok(EXIT_OK)
        }
        Err(err) => {
            tracing::info!(
                source = %source,
                kind = %args.kind,
                problems = err.problems().len(),
                "document invalid"
            );
            report::print_shape_failure(settings.format, args.kind, &source, &err)?;
            Ok(EXIT_INVALID)
        }
    }
}

fn describe(record: &ValidatedRecord) -> String {
    match record {
        ValidatedRecord::Post(post) => format!("post {:?}", post.slug().as_str()),
        ValidatedRecord::Person(person) => format!("person {:?}", person.name()),
    }
}
