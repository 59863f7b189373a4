use std::collections::BTreeMap;
use std::fmt;

use log::info;
use serde_json::Value;

use crate::Quiz;
use crate::models::{Answer, Question};

use super::loader::RawRecords;

/// Error turning raw records into a playable quiz.
///
/// Construction fails fast: the first bad record aborts the whole quiz, no
/// partial quiz is ever returned.
#[derive(Debug)]
pub enum BuildError {
    /// A record lacks one of the required fields.
    MissingField {
        question: String,
        field: &'static str,
    },
    /// A record is not a flat string-to-string mapping.
    InvalidFormat { question: String },
    /// The file contains no records at all.
    Empty,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField { question, field } => {
                write!(f, "question '{}' is missing the '{}' field", question, field)
            }
            BuildError::InvalidFormat { question } => {
                write!(f, "question '{}' is not a flat map of strings", question)
            }
            BuildError::Empty => write!(f, "the question file contains no questions"),
        }
    }
}

impl std::error::Error for BuildError {}

pub fn build_quiz(records: &RawRecords) -> Result<Quiz, BuildError> {
    if records.0.is_empty() {
        return Err(BuildError::Empty);
    }

    let mut questions = Vec::with_capacity(records.0.len());
    for (key, value) in &records.0 {
        let fields = string_fields(value).ok_or_else(|| BuildError::InvalidFormat {
            question: key.clone(),
        })?;
        questions.push(build_question(key, &fields)?);
    }

    info!("built a quiz of {} questions", questions.len());
    Ok(Quiz::new(questions))
}

/// Builds a question from one record's fields. Fields beyond the required
/// five are ignored.
///
/// Answers end up in fixed order [correct, wrong1, wrong2, wrong3]; the
/// presentation shuffle reorders them later.
fn build_question(key: &str, fields: &BTreeMap<&str, &str>) -> Result<Question, BuildError> {
    let description = require(key, fields, "description")?;
    let answers = [
        Answer::correct(require(key, fields, "correct")?),
        Answer::wrong(require(key, fields, "wrong1")?),
        Answer::wrong(require(key, fields, "wrong2")?),
        Answer::wrong(require(key, fields, "wrong3")?),
    ];

    Ok(Question::new(description, answers))
}

fn require<'a>(
    key: &str,
    fields: &BTreeMap<&str, &'a str>,
    field: &'static str,
) -> Result<&'a str, BuildError> {
    fields
        .get(field)
        .copied()
        .ok_or_else(|| BuildError::MissingField {
            question: key.to_owned(),
            field,
        })
}

/// A record must be an object whose values are all strings, including the
/// values of fields the builder otherwise ignores.
fn string_fields(value: &Value) -> Option<BTreeMap<&str, &str>> {
    value
        .as_object()?
        .iter()
        .map(|(field, value)| value.as_str().map(|s| (field.as_str(), s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(value: Value) -> RawRecords {
        serde_json::from_value(json!({ "q1": value })).unwrap()
    }

    fn full_record() -> Value {
        json!({
            "description": "2+2=?",
            "correct": "4",
            "wrong1": "3",
            "wrong2": "5",
            "wrong3": "22",
        })
    }

    #[test]
    fn test_built_question_shape() {
        let quiz = build_quiz(&records(full_record())).unwrap();

        assert_eq!(quiz.questions().len(), 1);
        let question = &quiz.questions()[0];
        assert_eq!(question.description(), "2+2=?");

        let correct = question
            .answers()
            .iter()
            .filter(|answer| answer.is_correct())
            .count();
        assert_eq!(correct, 1);
        assert!(question.answers()[0].is_correct()); // fixed pre-shuffle order
        assert_eq!(question.answers()[1].description(), "3");
    }

    #[test]
    fn test_extra_string_fields_are_ignored() {
        let mut value = full_record();
        value["hint"] = json!("it is even");

        assert!(build_quiz(&records(value)).is_ok());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for field in ["description", "correct", "wrong1", "wrong2", "wrong3"] {
            let mut value = full_record();
            value.as_object_mut().unwrap().remove(field);

            match build_quiz(&records(value)).unwrap_err() {
                BuildError::MissingField {
                    question,
                    field: missing,
                } => {
                    assert_eq!(question, "q1");
                    assert_eq!(missing, field);
                }
                other => panic!("expected MissingField, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_map_record_is_invalid() {
        match build_quiz(&records(json!("not a map"))).unwrap_err() {
            BuildError::InvalidFormat { question } => assert_eq!(question, "q1"),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_field_is_invalid() {
        let mut value = full_record();
        value["wrong1"] = json!(3);

        assert!(matches!(
            build_quiz(&records(value)).unwrap_err(),
            BuildError::InvalidFormat { .. }
        ));
    }

    #[test]
    fn test_first_bad_record_aborts_the_whole_quiz() {
        let mut bad = full_record();
        bad.as_object_mut().unwrap().remove("wrong2");
        let records: RawRecords = serde_json::from_value(
            json!({ "q1": full_record(), "q2": bad, "q3": full_record() }),
        )
        .unwrap();

        assert!(matches!(
            build_quiz(&records).unwrap_err(),
            BuildError::MissingField { .. }
        )); // no partial quiz
    }

    #[test]
    fn test_questions_follow_sorted_key_order() {
        let mut first = full_record();
        first["description"] = json!("first");
        let mut second = full_record();
        second["description"] = json!("second");
        let records: RawRecords =
            serde_json::from_value(json!({ "b": second, "a": first })).unwrap();

        let quiz = build_quiz(&records).unwrap();
        let descriptions: Vec<_> = quiz
            .questions()
            .iter()
            .map(|question| question.description())
            .collect();
        assert_eq!(descriptions, ["first", "second"]);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let records: RawRecords = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(build_quiz(&records).unwrap_err(), BuildError::Empty));
    }
}
