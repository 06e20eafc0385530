//! Document input shared by the subcommands: a file path, or stdin when the
//! path is omitted or `-`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use recshape_schema::{load_document, parse_document, DocumentFormat};

/// Input document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl From<InputFormat> for DocumentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => DocumentFormat::Json,
            InputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

/// Where to read the document from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Document to read (JSON, or YAML by `.yaml`/`.yml` extension). Reads
    /// stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Override format detection. Stdin defaults to JSON.
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

impl InputArgs {
    /// Human-readable name of the input, for logs and reports.
    pub fn source_name(&self) -> String {
        match self.file_path() {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }

    fn file_path(&self) -> Option<&Path> {
        self.path.as_deref().filter(|p| *p != Path::new("-"))
    }

    /// Read and parse the document.
    pub fn read(&self) -> Result<Value> {
        let forced = self.input_format.map(DocumentFormat::from);
        let value = match (self.file_path(), forced) {
            (Some(path), None) => load_document(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            (Some(path), Some(format)) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                parse_document(&text, format)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            (None, format) => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("cannot read stdin")?;
                parse_document(&text, format.unwrap_or(DocumentFormat::Json))
                    .context("failed to parse stdin")?
            }
        };
        tracing::debug!(source = %self.source_name(), "loaded document");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dash_means_stdin() {
        let args = InputArgs {
            path: Some(PathBuf::from("-")),
            input_format: None,
        };
        assert_eq!(args.source_name(), "<stdin>");
        assert_eq!(InputArgs::default().source_name(), "<stdin>");
    }

    #[test]
    fn test_forced_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("person.txt");
        std::fs::write(&path, "name: X\nage: 4\n").unwrap();
        let args = InputArgs {
            path: Some(path),
            input_format: Some(InputFormat::Yaml),
        };
        assert_eq!(args.read().unwrap(), json!({"name": "X", "age": 4}));
    }

    #[test]
    fn test_unreadable_file_has_context() {
        let args = InputArgs {
            path: Some(PathBuf::from("/nonexistent/person.json")),
            input_format: None,
        };
        let err = args.read().unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }
}
