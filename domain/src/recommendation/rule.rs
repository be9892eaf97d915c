//! Recommendation rules
//!
//! A rule names a product recommendation and carries the conditions under
//! which it applies. Rules are configuration data supplied by the external
//! quiz-configuration service, managed by an admin system out of scope here.

use super::condition::Condition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Conventional priority levels for rules
///
/// Priorities are plain integers on the wire; these are the values the
/// admin catalog uses.
pub mod priority {
    pub const CRITICAL: i64 = 10;
    pub const HIGH: i64 = 8;
    pub const MEDIUM: i64 = 5;
    pub const LOW: i64 = 3;
    pub const MINIMAL: i64 = 1;
}

/// A named, prioritized set of conditions over quiz answers
///
/// A rule matches when **all** of its conditions hold (logical AND across
/// question ids). A rule with no conditions matches vacuously. Condition
/// keys are not checked against the question catalog: an unknown key simply
/// finds no answer and the rule fails silently.
///
/// # Example
///
/// ```
/// use tress_domain::{Condition, Rule, priority};
///
/// let rule = Rule::new(
///     "Curly Hair with Frizz",
///     "Anti-frizz and curl-defining products for curly hair",
///     priority::CRITICAL,
/// )
/// .with_condition("hairType", Condition::equals("Curly"))
/// .with_condition("concerns", Condition::any_of(["Frizz"]));
///
/// assert!(rule.is_active);
/// assert_eq!(rule.conditions.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Display name, unique within the catalog by convention
    pub name: String,
    /// What the recommended products do
    pub description: String,
    /// Per-question predicates, ANDed together
    #[serde(default)]
    pub conditions: BTreeMap<String, Condition>,
    /// Higher priority rules are presented first
    #[serde(default)]
    pub priority: i64,
    /// Inactive rules never match
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Rule {
    /// Create an active rule with no conditions
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            conditions: BTreeMap::new(),
            priority,
            is_active: true,
        }
    }

    /// Add a condition on the given question id
    pub fn with_condition(mut self, question_id: impl Into<String>, condition: Condition) -> Self {
        self.conditions.insert(question_id.into(), condition);
        self
    }

    /// Deactivate the rule
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Describe every condition for admin display, in question-id order
    pub fn describe_conditions(&self) -> Vec<String> {
        self.conditions
            .iter()
            .map(|(key, condition)| condition.describe(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let rule = Rule::new("Oily Scalp Balance", "Clarifying products", priority::HIGH)
            .with_condition("scalp", Condition::equals("Oily"));

        assert_eq!(rule.priority, 8);
        assert!(rule.is_active);
        assert_eq!(rule.conditions.len(), 1);
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "name": "Curly Hair with Frizz",
            "description": "Anti-frizz products",
            "conditions": {
                "hairType": "Curly",
                "concerns": {"$in": ["Frizz"]}
            },
            "priority": 10,
            "isActive": true
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();

        assert_eq!(rule.name, "Curly Hair with Frizz");
        assert_eq!(rule.conditions["hairType"], Condition::equals("Curly"));
        assert_eq!(rule.conditions["concerns"], Condition::any_of(["Frizz"]));
        assert!(rule.is_active);
    }

    #[test]
    fn test_wire_format_defaults() {
        let json = r#"{"name": "Fallback", "description": "Generic routine"}"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(rule.conditions.is_empty());
        assert_eq!(rule.priority, 0);
        assert!(rule.is_active);
    }

    #[test]
    fn test_describe_conditions() {
        let rule = Rule::new("Dry Hair Moisture", "Deep conditioning", priority::CRITICAL)
            .with_condition("scalp", Condition::equals("Dry"))
            .with_condition("goals", Condition::equals("Moisture"));

        assert_eq!(
            rule.describe_conditions(),
            vec!["goals equals: Moisture", "scalp equals: Dry"]
        );
    }
}
