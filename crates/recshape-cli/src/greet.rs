//! # Greet Subcommand
//!
//! Validates a person document and prints its greeting line.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use recshape_schema::{validate_person, RecordKind};

use crate::config::{OutputFormat, Settings};
use crate::input::InputArgs;
use crate::report;
use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `recshape greet` subcommand.
#[derive(Args, Debug)]
pub struct GreetArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run_greet(args: &GreetArgs, settings: &Settings) -> Result<u8> {
    let document = args.input.read()?;
    let source = args.input.source_name();

    match validate_person(&document) {
        Ok(person) => {
            let greeting = person.greeting();
            match settings.format {
                OutputFormat::Text => println!("{greeting}"),
                OutputFormat::Json => report::print_json(&json!({ "greeting": greeting }))?,
            }
            Ok(EXIT_OK)
        }
        Err(err) => {
            tracing::info!(source = %source, problems = err.problems().len(), "person invalid");
            report::print_shape_failure(settings.format, RecordKind::Person, &source, &err)?;
            Ok(EXIT_INVALID)
        }
    }
}
