//! Question entity

use serde::{Deserialize, Serialize};

/// Well-known question ids used by the built-in catalog and the
/// explanation template.
pub mod question_ids {
    pub const HAIR_TYPE: &str = "hairType";
    pub const SCALP: &str = "scalp";
    pub const CONCERNS: &str = "concerns";
    pub const GOALS: &str = "goals";
    pub const INGREDIENTS: &str = "ingredients";
}

/// A quiz question, unique by `id`
///
/// Questions are configuration data supplied by the external
/// quiz-configuration service; the serde names match its wire format.
///
/// # Example
///
/// ```
/// use tress_domain::Question;
///
/// let q = Question::new("hairType", "What's your hair type?", ["Straight", "Curly"])
///     .required()
///     .with_order(1);
/// assert!(q.required);
/// assert!(!q.multiple);
/// assert!(q.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Stable identifier, referenced by answers and rule conditions
    pub id: String,
    /// Display title, also used in validation messages
    pub title: String,
    /// Allowed options, in display order
    pub options: Vec<String>,
    /// Whether an answer is mandatory for submission
    #[serde(default)]
    pub required: bool,
    /// Whether multiple options may be selected
    #[serde(default)]
    pub multiple: bool,
    /// Display position within the quiz
    #[serde(default)]
    pub order: i64,
    /// Inactive questions are ignored by validation
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Question {
    /// Create an active, optional, single-select question
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            options: options.into_iter().map(Into::into).collect(),
            required: false,
            multiple: false,
            order: 0,
            is_active: true,
        }
    }

    /// Mark the question as mandatory
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allow multiple selections
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Set the display position
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Deactivate the question
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the given option is one of this question's choices
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
