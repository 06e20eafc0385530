//! # Summary Subcommand
//!
//! Validates a post document and prints its title, slug, and first tag.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use recshape_core::PostRecord;
use recshape_schema::{validate_post, RecordKind};

use crate::config::{OutputFormat, Settings};
use crate::input::InputArgs;
use crate::report;
use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `recshape summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run_summary(args: &SummaryArgs, settings: &Settings) -> Result<u8> {
    let document = args.input.read()?;
    let source = args.input.source_name();

    match validate_post(&document) {
        Ok(post) => {
            match settings.format {
                OutputFormat::Text => {
                    for line in summary_lines(&post) {
                        println!("{line}");
                    }
                }
                OutputFormat::Json => report::print_json(&json!({
                    "title": post.title(),
                    "slug": post.slug(),
                    "date": post.date(),
                    "first_tag": post.first_tag(),
                }))?,
            }
            Ok(EXIT_OK)
        }
        Err(err) => {
            tracing::info!(source = %source, problems = err.problems().len(), "post invalid");
            report::print_shape_failure(settings.format, RecordKind::Post, &source, &err)?;
            Ok(EXIT_INVALID)
        }
    }
}

fn summary_lines(post: &PostRecord) -> Vec<String> {
    vec![
        format!("title: {}", post.title()),
        format!("slug: {}", post.slug()),
        format!("date: {}", post.date()),
        format!("first tag: {}", post.first_tag().unwrap_or("(none)")),
    ]
}
