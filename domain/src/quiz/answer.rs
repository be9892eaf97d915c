//! Answer value objects
//!
//! An [`Answer`] is what a customer selected for a single question; an
//! [`AnswerSet`] maps question ids to answers for a whole quiz session.
//! Answer sets are ephemeral: created per session, discarded after
//! submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A customer's answer to a single question
///
/// Single-select questions produce a scalar, multi-select questions produce
/// a list. On the wire this is either a JSON string or a JSON array of
/// strings, matching the quiz-configuration service format.
///
/// # Example
///
/// ```
/// use tress_domain::Answer;
///
/// let single = Answer::single("Curly");
/// let multi = Answer::multiple(["Frizz", "Dullness"]);
/// assert!(!single.is_empty());
/// assert!(multi.contains("Frizz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// One selected option (single-select question)
    Single(String),
    /// Zero or more selected options (multi-select question)
    Multiple(Vec<String>),
}

impl Answer {
    /// Create a single-select answer
    pub fn single(value: impl Into<String>) -> Self {
        Answer::Single(value.into())
    }

    /// Create a multi-select answer
    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// Whether this answer carries no selection at all
    ///
    /// An empty string or an empty list both count as "not answered",
    /// which matters for required-question checks and completion.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Single(value) => value.is_empty(),
            Answer::Multiple(values) => values.is_empty(),
        }
    }

    /// Whether the given option was selected
    pub fn contains(&self, option: &str) -> bool {
        match self {
            Answer::Single(value) => value == option,
            Answer::Multiple(values) => values.iter().any(|v| v == option),
        }
    }

    /// All selected values, scalar answers yielding a single element
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        match self {
            Answer::Single(value) => std::slice::from_ref(value).iter(),
            Answer::Multiple(values) => values.iter(),
        }
        .map(String::as_str)
    }

    /// The scalar value, if this is a single-select answer
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Answer::Single(value) => Some(value),
            Answer::Multiple(_) => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::single(value)
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Answer::Multiple(values)
    }
}

/// All answers collected in one quiz session, keyed by question id
///
/// Iteration order is deterministic (sorted by question id), which keeps
/// validation output and serialized payloads stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous answer for the question
    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<Answer>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, question_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.insert(question_id, answer);
        self
    }

    /// Look up the answer for a question
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Whether the question has a non-empty answer
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|a| !a.is_empty())
    }

    /// Number of recorded answers (including empty ones)
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over `(question id, answer)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(id, a)| (id.as_str(), a))
    }
}

impl<K: Into<String>, A: Into<Answer>> FromIterator<(K, A)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, A)>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, a)| (k.into(), a.into()))
                .collect(),
        }
    }
}
