//! # Shape Validation
//!
//! Single-pass classification of an untyped input against a record shape.
//!
//! ## Classification Rules
//!
//! - A required field absent from the mapping is `MISSING`.
//! - A field present with the wrong JSON type is `WRONG_TYPE`. `null` counts
//!   as present, so `{"title": null}` is `WRONG_TYPE`, not `MISSING`.
//! - Value constraints that are not parse failures (negative `age`, a slug
//!   with whitespace) are also `WRONG_TYPE`.
//! - A text `date` that is not a calendar date is `UNPARSEABLE`.
//! - Keys outside the shape are ignored.
//! - An input that is not a mapping yields one `WRONG_TYPE` problem on
//!   [`ROOT_FIELD`](crate::shape::ROOT_FIELD).
//!
//! Problems are reported in the shape's field declaration order so that the
//! same input always produces the same error.

use std::fmt;
use std::str::FromStr;

use recshape_core::{PersonRecord, PostDate, PostRecord, Slug};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shape::{FieldProblem, ProblemKind, ShapeError};

/// Field names of the post shape, in declaration order.
pub const POST_FIELDS: [&str; 6] = ["title", "slug", "date", "content", "tags", "author"];

/// Field names of the person shape, in declaration order.
pub const PERSON_FIELDS: [&str; 2] = ["name", "age"];

/// Validate an untyped input against the post shape.
///
/// # Errors
///
/// Returns a [`ShapeError`] naming every required field that is missing
/// (`title`, `slug`, `date`, `content`, `author`), every field of the wrong
/// type, a `tags` value that is not a sequence of text, and a `date` that is
/// not a calendar date.
pub fn validate_post(input: &Value) -> Result<PostRecord, ShapeError> {
    let fields = FieldReader::new(input)?;

    let title = fields.text("title");
    let slug = fields.slug("slug");
    let date = fields.date("date");
    let content = fields.text("content");
    let tags = fields.optional_text_list("tags");
    let author = fields.text("author");

    check_all([
        title.as_ref().err(),
        slug.as_ref().err(),
        date.as_ref().err(),
        content.as_ref().err(),
        tags.as_ref().err(),
        author.as_ref().err(),
    ])?;
    Ok(PostRecord::new(title?, slug?, date?, content?, tags?, author?))
}

/// Validate an untyped input against the person shape.
///
/// # Errors
///
/// Returns a [`ShapeError`] if `name` is missing or not text, or if `age` is
/// missing, not an integer, or negative.
pub fn validate_person(input: &Value) -> Result<PersonRecord, ShapeError> {
    let fields = FieldReader::new(input)?;

    let name = fields.text("name");
    let age = fields.non_negative_integer("age");

    check_all([name.as_ref().err(), age.as_ref().err()])?;
    Ok(PersonRecord::new(name?, age?))
}

/// Fail with every problem found, in the order given.
fn check_all<'p>(
    problems: impl IntoIterator<Item = Option<&'p FieldProblem>>,
) -> Result<(), ShapeError> {
    let problems = problems.into_iter().flatten().cloned().collect();
    match ShapeError::from_problems(problems) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Reads typed fields out of one mapping. Each accessor classifies its own
/// field and never looks at the others.
struct FieldReader<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    fn new(input: &'a Value) -> Result<Self, ShapeError> {
        let map = input.as_object().ok_or_else(ShapeError::not_a_mapping)?;
        Ok(Self { map })
    }

    fn required(&self, field: &str) -> Result<&'a Value, FieldProblem> {
        self.map
            .get(field)
            .ok_or_else(|| FieldProblem::new(field, ProblemKind::Missing))
    }

    fn text(&self, field: &str) -> Result<&'a str, FieldProblem> {
        self.required(field)?
            .as_str()
            .ok_or_else(|| FieldProblem::new(field, ProblemKind::WrongType))
    }

    fn slug(&self, field: &str) -> Result<Slug, FieldProblem> {
        Slug::new(self.text(field)?).map_err(|_| FieldProblem::new(field, ProblemKind::WrongType))
    }

    fn date(&self, field: &str) -> Result<PostDate, FieldProblem> {
        PostDate::parse(self.text(field)?)
            .map_err(|_| FieldProblem::new(field, ProblemKind::Unparseable))
    }

    /// `Ok(None)` is a legitimately absent field.
    fn optional_text_list(&self, field: &str) -> Result<Option<Vec<String>>, FieldProblem> {
        let Some(value) = self.map.get(field) else {
            return Ok(None);
        };
        value
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect::<Option<Vec<String>>>()
            })
            .map(Some)
            .ok_or_else(|| FieldProblem::new(field, ProblemKind::WrongType))
    }

    fn non_negative_integer(&self, field: &str) -> Result<u64, FieldProblem> {
        // as_u64 is None for negatives and for any float, including 30.0.
        self.required(field)?
            .as_u64()
            .ok_or_else(|| FieldProblem::new(field, ProblemKind::WrongType))
    }
}

/// Which record shape to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Post,
    Person,
}

impl RecordKind {
    /// Validate `input` against this shape.
    ///
    /// # Errors
    ///
    /// See [`validate_post`] and [`validate_person`].
    pub fn validate(self, input: &Value) -> Result<ValidatedRecord, ShapeError> {
        match self {
            Self::Post => validate_post(input).map(ValidatedRecord::Post),
            Self::Person => validate_person(input).map(ValidatedRecord::Person),
        }
    }

    /// Field names of this shape, in declaration order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Post => &POST_FIELDS,
            Self::Person => &PERSON_FIELDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Person => "person",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record kind name that is neither `post` nor `person`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown record kind {0:?} (expected \"post\" or \"person\")")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(Self::Post),
            "person" => Ok(Self::Person),
            _ => Err(UnknownRecordKind(s.to_string())),
        }
    }
}

/// A record produced by [`RecordKind::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidatedRecord {
    Post(PostRecord),
    Person(PersonRecord),
}

impl ValidatedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Post(_) => RecordKind::Post,
            Self::Person(_) => RecordKind::Person,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ROOT_FIELD;
    use serde_json::json;

    fn kinds(err: &ShapeError) -> Vec<(&str, ProblemKind)> {
        err.problems()
            .iter()
            .map(|p| (p.field.as_str(), p.kind))
            .collect()
    }

    #[test]
    fn test_minimal_post_has_no_tags() {
        let post = validate_post(&json!({
            "title": "T",
            "slug": "t",
            "date": "2025-05-04",
            "content": "C",
            "author": "A"
        }))
        .unwrap();
        assert_eq!(post.title(), "T");
        assert_eq!(post.slug().as_str(), "t");
        assert_eq!(post.date().to_iso8601(), "2025-05-04");
        assert_eq!(post.content(), "C");
        assert_eq!(post.author(), "A");
        assert!(post.tags().is_none());
    }

    #[test]
    fn test_post_with_tags() {
        let post = validate_post(&json!({
            "title": "My First Markdown Post",
            "slug": "my-first-post",
            "date": "2025-05-04",
            "content": "# This is the content of my first post.",
            "tags": ["typescript", "markdown", "example"],
            "author": "Aditya"
        }))
        .unwrap();
        assert_eq!(
            post.tags().unwrap(),
            ["typescript", "markdown", "example"]
        );
        assert_eq!(post.first_tag(), Some("typescript"));
    }

    #[test]
    fn test_empty_tags_are_present() {
        let post = validate_post(&json!({
            "title": "T", "slug": "t", "date": "2025-05-04",
            "content": "C", "author": "A", "tags": []
        }))
        .unwrap();
        assert_eq!(post.tags(), Some(&[][..]));
    }

    #[test]
    fn test_empty_object_reports_every_required_post_field() {
        let err = validate_post(&json!({})).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ("title", ProblemKind::Missing),
                ("slug", ProblemKind::Missing),
                ("date", ProblemKind::Missing),
                ("content", ProblemKind::Missing),
                ("author", ProblemKind::Missing),
            ]
        );
    }

    #[test]
    fn test_mixed_problems_in_declaration_order() {
        let err = validate_post(&json!({
            "author": 7,
            "tags": "rust",
            "date": "someday",
            "title": "T",
            "content": null
        }))
        .unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ("slug", ProblemKind::Missing),
                ("date", ProblemKind::Unparseable),
                ("content", ProblemKind::WrongType),
                ("tags", ProblemKind::WrongType),
                ("author", ProblemKind::WrongType),
            ]
        );
    }

    #[test]
    fn test_non_text_tags_are_wrong_type() {
        let err = validate_post(&json!({
            "title": "T", "slug": "t", "date": "2025-05-04",
            "content": "C", "author": "A", "tags": [1, 2]
        }))
        .unwrap_err();
        assert_eq!(kinds(&err), vec![("tags", ProblemKind::WrongType)]);
    }

    #[test]
    fn test_partially_text_tags_are_wrong_type() {
        let err = validate_post(&json!({
            "title": "T", "slug": "t", "date": "2025-05-04",
            "content": "C", "author": "A", "tags": ["ok", null]
        }))
        .unwrap_err();
        assert!(err.has("tags", ProblemKind::WrongType));
    }

    #[test]
    fn test_null_tags_are_wrong_type() {
        let err = validate_post(&json!({
            "title": "T", "slug": "t", "date": "2025-05-04",
            "content": "C", "author": "A", "tags": null
        }))
        .unwrap_err();
        assert!(err.has("tags", ProblemKind::WrongType));
    }

    #[test]
    fn test_non_text_date_is_wrong_type() {
        let err = validate_post(&json!({
            "title": "T", "slug": "t", "date": 20250504,
            "content": "C", "author": "A"
        }))
        .unwrap_err();
        assert_eq!(kinds(&err), vec![("date", ProblemKind::WrongType)]);
    }

    #[test]
    fn test_impossible_date_is_unparseable() {
        let err = validate_post(&json!({
            "title": "T", "slug": "t", "date": "2025-02-30",
            "content": "C", "author": "A"
        }))
        .unwrap_err();
        assert_eq!(kinds(&err), vec![("date", ProblemKind::Unparseable)]);
    }

    #[test]
    fn test_whitespace_slug_is_wrong_type() {
        for slug in ["", "my post", " lead"] {
            let err = validate_post(&json!({
                "title": "T", "slug": slug, "date": "2025-05-04",
                "content": "C", "author": "A"
            }))
            .unwrap_err();
            assert_eq!(kinds(&err), vec![("slug", ProblemKind::WrongType)]);
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let post = validate_post(&json!({
            "title": "T", "slug": "t", "date": "2025-05-04",
            "content": "C", "author": "A", "draft": true
        }));
        assert!(post.is_ok());
    }

    #[test]
    fn test_non_mapping_input_is_root_wrong_type() {
        for input in [json!(null), json!("post"), json!([1, 2]), json!(42)] {
            let err = validate_post(&input).unwrap_err();
            assert_eq!(kinds(&err), vec![(ROOT_FIELD, ProblemKind::WrongType)]);
            let err = validate_person(&input).unwrap_err();
            assert_eq!(kinds(&err), vec![(ROOT_FIELD, ProblemKind::WrongType)]);
        }
    }

    #[test]
    fn test_valid_person() {
        let person = validate_person(&json!({"name": "Aditya", "age": 30})).unwrap();
        assert_eq!(person.name(), "Aditya");
        assert_eq!(person.age(), 30);
    }

    #[test]
    fn test_zero_age_is_valid() {
        assert!(validate_person(&json!({"name": "Newborn", "age": 0})).is_ok());
    }

    #[test]
    fn test_person_missing_age() {
        let err = validate_person(&json!({"name": "X"})).unwrap_err();
        assert_eq!(kinds(&err), vec![("age", ProblemKind::Missing)]);
    }

    #[test]
    fn test_negative_age_is_wrong_type() {
        let err = validate_person(&json!({"name": "X", "age": -1})).unwrap_err();
        assert_eq!(kinds(&err), vec![("age", ProblemKind::WrongType)]);
    }

    #[test]
    fn test_fractional_and_text_age_are_wrong_type() {
        for age in [json!(30.5), json!(30.0), json!("30"), json!(null)] {
            let err = validate_person(&json!({"name": "X", "age": age})).unwrap_err();
            assert_eq!(kinds(&err), vec![("age", ProblemKind::WrongType)]);
        }
    }

    #[test]
    fn test_non_text_name() {
        let err = validate_person(&json!({"name": ["X"], "age": 3})).unwrap_err();
        assert_eq!(kinds(&err), vec![("name", ProblemKind::WrongType)]);
    }

    #[test]
    fn test_person_both_missing() {
        let err = validate_person(&json!({"nickname": "X"})).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![("name", ProblemKind::Missing), ("age", ProblemKind::Missing)]
        );
    }

    #[test]
    fn test_record_kind_from_str() {
        assert_eq!("post".parse::<RecordKind>().unwrap(), RecordKind::Post);
        assert_eq!(" Person ".parse::<RecordKind>().unwrap(), RecordKind::Person);
        assert!("article".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_record_kind_dispatch() {
        let record = RecordKind::Person
            .validate(&json!({"name": "A", "age": 1}))
            .unwrap();
        assert_eq!(record.kind(), RecordKind::Person);
        assert!(RecordKind::Post
            .validate(&json!({"name": "A", "age": 1}))
            .is_err());
    }

    #[test]
    fn test_validated_record_serializes_untagged() {
        let record = RecordKind::Person
            .validate(&json!({"name": "A", "age": 1}))
            .unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": "A", "age": 1})
        );
    }
}
