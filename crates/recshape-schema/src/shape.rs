//! # Shape Errors
//!
//! The single error kind produced by the validators. A `ShapeError` is an
//! ordered, non-empty list of `(field, problem)` pairs. Fields appear in
//! the shape's declaration order, not the input's key order.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pseudo-field name used when the input as a whole has the wrong type.
pub const ROOT_FIELD: &str = "(root)";

/// What is wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemKind {
    /// A required field is absent from the input.
    Missing,
    /// The field is present but its value has the wrong type or violates a
    /// value constraint (negative age, malformed slug).
    WrongType,
    /// The field is text but cannot be parsed into the expected value.
    Unparseable,
}

impl ProblemKind {
    /// Upper-case label used in text and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "MISSING",
            Self::WrongType => "WRONG_TYPE",
            Self::Unparseable => "UNPARSEABLE",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem attached to one named field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldProblem {
    /// Field name as it appears in the input.
    pub field: String,
    /// Classification of the problem.
    pub kind: ProblemKind,
}

impl FieldProblem {
    pub fn new(field: impl Into<String>, kind: ProblemKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Every field-level problem found while validating one input.
///
/// Always holds at least one problem.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("input does not match the record shape:\n{}", DisplayProblems(.problems))]
pub struct ShapeError {
    problems: Vec<FieldProblem>,
}

impl ShapeError {
    /// Build an error from a problem list.
    ///
    /// Returns `None` for an empty list, since an input with no problems is
    /// not an error.
    pub fn from_problems(problems: Vec<FieldProblem>) -> Option<Self> {
        if problems.is_empty() {
            None
        } else {
            Some(Self { problems })
        }
    }

    /// Error for an input that is not a key-value mapping at all.
    pub fn not_a_mapping() -> Self {
        Self {
            problems: vec![FieldProblem::new(ROOT_FIELD, ProblemKind::WrongType)],
        }
    }

    /// The problems in field declaration order.
    pub fn problems(&self) -> &[FieldProblem] {
        &self.problems
    }

    /// Returns true if `field` was reported with `kind`.
    pub fn has(&self, field: &str, kind: ProblemKind) -> bool {
        self.problems
            .iter()
            .any(|p| p.field == field && p.kind == kind)
    }

    /// Problem kind reported for `field`, if any.
    pub fn kind_of(&self, field: &str) -> Option<ProblemKind> {
        self.problems
            .iter()
            .find(|p| p.field == field)
            .map(|p| p.kind)
    }

    /// Consumes self and returns the inner problem list.
    pub fn into_problems(self) -> Vec<FieldProblem> {
        self.problems
    }
}

impl From<FieldProblem> for ShapeError {
    /// An error carrying a single problem.
    fn from(problem: FieldProblem) -> Self {
        Self {
            problems: vec![problem],
        }
    }
}

struct DisplayProblems<'a>(&'a [FieldProblem]);

impl fmt::Display for DisplayProblems<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_problem_list_is_not_an_error() {
        assert!(ShapeError::from_problems(Vec::new()).is_none());
    }

    #[test]
    fn test_display_lists_each_problem() {
        let err = ShapeError::from_problems(vec![
            FieldProblem::new("title", ProblemKind::Missing),
            FieldProblem::new("date", ProblemKind::Unparseable),
        ])
        .unwrap();
        let msg = err.to_string();
        assert!(msg.contains("  title: MISSING"));
        assert!(msg.contains("  date: UNPARSEABLE"));
    }

    #[test]
    fn test_serializes_with_upper_case_kinds() {
        let err = ShapeError::from_problems(vec![FieldProblem::new(
            "age",
            ProblemKind::Missing,
        )])
        .unwrap();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"problems": [{"field": "age", "kind": "MISSING"}]})
        );
    }

    #[test]
    fn test_problem_kind_labels_match_serde() {
        for kind in [
            ProblemKind::Missing,
            ProblemKind::WrongType,
            ProblemKind::Unparseable,
        ] {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                json!(kind.as_str())
            );
        }
    }

    #[test]
    fn test_single_problem_keeps_its_field() {
        let err = ShapeError::from(FieldProblem::new("date", ProblemKind::Unparseable));
        assert_eq!(
            err.problems(),
            [FieldProblem::new("date", ProblemKind::Unparseable)]
        );
        assert_eq!(err.kind_of(ROOT_FIELD), None);
    }

    #[test]
    fn test_lookup_helpers() {
        let err = ShapeError::not_a_mapping();
        assert!(err.has(ROOT_FIELD, ProblemKind::WrongType));
        assert!(!err.has(ROOT_FIELD, ProblemKind::Missing));
        assert_eq!(err.kind_of(ROOT_FIELD), Some(ProblemKind::WrongType));
        assert_eq!(err.kind_of("title"), None);
    }
}
