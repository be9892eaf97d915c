//! Answer validation against question definitions
//!
//! Validation aggregates every problem it finds into a [`ValidationReport`]
//! instead of failing fast, so a whole quiz submission can be corrected in
//! one pass. Nothing here is a fault: callers inspect `is_valid`.

use super::answer::{Answer, AnswerSet};
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Result of validating an answer set
///
/// `is_valid` holds iff `errors` is empty.
///
/// # Example
///
/// ```
/// use tress_domain::{AnswerSet, Question, validate_answers};
///
/// let questions = vec![
///     Question::new("hairType", "What's your hair type?", ["Curly", "Straight"]).required(),
/// ];
/// let answers = AnswerSet::new().with("hairType", "Curly");
///
/// let report = validate_answers(&answers, &questions);
/// assert!(report.is_valid);
/// assert!(report.errors.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the answer set passed all checks
    pub is_valid: bool,
    /// Human-readable messages, one per detected problem
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate `answers` against the question definitions
///
/// Checks, per active question:
/// - required questions must have a non-empty answer
/// - multi-select questions must carry a list, single-select a scalar
/// - every selected value must be one of the question's options; unknown
///   values are reported in one grouped message per question
///
/// Inactive questions are skipped entirely. Questions without answers fail
/// only the required check; answers without a matching question are ignored
/// (rule conditions behave the same way, see the matcher).
pub fn validate_answers(answers: &AnswerSet, questions: &[Question]) -> ValidationReport {
    let mut errors = Vec::new();

    for question in questions.iter().filter(|q| q.is_active) {
        let answer = answers.get(&question.id);

        if question.required && answer.map_or(true, Answer::is_empty) {
            errors.push(format!("{} is required", question.title));
        }

        let Some(answer) = answer else {
            continue;
        };

        // An empty scalar already failed the required check above; only a
        // real selection is worth a shape error.
        match answer {
            Answer::Single(value) if question.multiple && !value.is_empty() => {
                errors.push(format!("{} should have multiple selections", question.title));
            }
            Answer::Multiple(_) if !question.multiple => {
                errors.push(format!("{} should have only one selection", question.title));
            }
            _ => {}
        }

        let invalid: Vec<&str> = answer
            .selected()
            .filter(|value| !value.is_empty() && !question.has_option(value))
            .collect();
        if !invalid.is_empty() {
            errors.push(format!(
                "Invalid options for {}: {}",
                question.title,
                invalid.join(", ")
            ));
        }
    }

    ValidationReport::from_errors(errors)
}
