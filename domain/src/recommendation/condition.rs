//! Rule conditions
//!
//! A condition is a single per-question predicate. On the wire it is either
//! a bare string (exact match) or a `{"$in": [...]}` object (contains-any),
//! following the quiz-configuration service format. Any other shape is kept
//! as [`Condition::Invalid`], which never matches: a malformed condition
//! means "rule does not apply", not a fault in the matching pass.

use crate::quiz::answer::Answer;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A per-question predicate inside a rule
///
/// # Example
///
/// ```
/// use tress_domain::{Answer, Condition};
///
/// let exact = Condition::equals("Oily");
/// assert!(exact.matches(Some(&Answer::single("Oily"))));
/// assert!(!exact.matches(Some(&Answer::single("Dry"))));
///
/// let any = Condition::any_of(["Frizz", "Breakage"]);
/// assert!(any.matches(Some(&Answer::multiple(["Frizz", "Dullness"]))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The answer must equal this value exactly (scalar answers only)
    Equals(String),
    /// At least one of these values must be selected
    AnyOf(Vec<String>),
    /// Unrecognized wire shape; never matches
    Invalid,
}

impl Condition {
    /// Exact-match condition
    pub fn equals(value: impl Into<String>) -> Self {
        Condition::Equals(value.into())
    }

    /// Contains-any condition
    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Condition::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// Evaluate the condition against the answer for its question
    ///
    /// A missing answer never matches. An exact-match condition requires a
    /// scalar answer equal to its value; a list answer cannot satisfy it.
    /// A contains-any condition is satisfied by any overlap with a list
    /// answer, or by membership for a scalar answer.
    pub fn matches(&self, answer: Option<&Answer>) -> bool {
        let Some(answer) = answer else {
            return false;
        };

        match self {
            Condition::Equals(expected) => answer.as_single() == Some(expected.as_str()),
            Condition::AnyOf(values) => values.iter().any(|v| answer.contains(v)),
            Condition::Invalid => false,
        }
    }

    /// Human-readable description of the condition on `key`
    ///
    /// Used for admin display: `"scalp equals: Oily"` or
    /// `"concerns contains: Frizz, Breakage"`.
    pub fn describe(&self, key: &str) -> String {
        match self {
            Condition::Equals(value) => format!("{} equals: {}", key, value),
            Condition::AnyOf(values) => format!("{} contains: {}", key, values.join(", ")),
            Condition::Invalid => format!("{}: <unrecognized condition>", key),
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Condition::Equals(value) => serializer.serialize_str(value),
            Condition::AnyOf(values) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$in", values)?;
                map.end()
            }
            Condition::Invalid => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => Condition::Equals(s),
            Value::Object(map) => match map.get("$in").and_then(Value::as_array) {
                Some(items) if items.iter().all(Value::is_string) => Condition::AnyOf(
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect(),
                ),
                _ => Condition::Invalid,
            },
            _ => Condition::Invalid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Exact match ====================

    #[test]
    fn test_equals_matches_scalar() {
        let c = Condition::equals("Oily");
        assert!(c.matches(Some(&Answer::single("Oily"))));
        assert!(!c.matches(Some(&Answer::single("Dry"))));
    }

    #[test]
    fn test_equals_rejects_list_answer() {
        // A list cannot satisfy an exact-match condition, even when it
        // contains the value
        let c = Condition::equals("Oily");
        assert!(!c.matches(Some(&Answer::multiple(["Oily"]))));
    }

    #[test]
    fn test_equals_no_coercion() {
        let c = Condition::equals("10");
        assert!(!c.matches(Some(&Answer::single("10 "))));
    }

    // ==================== Contains-any ====================

    #[test]
    fn test_any_of_intersects_list_answer() {
        let c = Condition::any_of(["Frizz", "Breakage"]);
        assert!(c.matches(Some(&Answer::multiple(["Dullness", "Frizz"]))));
        assert!(!c.matches(Some(&Answer::multiple(["Dullness"]))));
    }

    #[test]
    fn test_any_of_membership_for_scalar_answer() {
        let c = Condition::any_of(["Oily", "Dry"]);
        assert!(c.matches(Some(&Answer::single("Dry"))));
        assert!(!c.matches(Some(&Answer::single("Balanced"))));
    }

    #[test]
    fn test_empty_any_of_never_matches() {
        let c = Condition::any_of(Vec::<String>::new());
        assert!(!c.matches(Some(&Answer::single("Oily"))));
    }

    // ==================== Missing / invalid ====================

    #[test]
    fn test_missing_answer_never_matches() {
        assert!(!Condition::equals("Oily").matches(None));
        assert!(!Condition::any_of(["Frizz"]).matches(None));
    }

    #[test]
    fn test_invalid_never_matches() {
        assert!(!Condition::Invalid.matches(Some(&Answer::single("Oily"))));
        assert!(!Condition::Invalid.matches(None));
    }

    // ==================== Wire format ====================

    #[test]
    fn test_deserialize_scalar() {
        let c: Condition = serde_json::from_str(r#""Oily""#).unwrap();
        assert_eq!(c, Condition::equals("Oily"));
    }

    #[test]
    fn test_deserialize_in_predicate() {
        let c: Condition = serde_json::from_str(r#"{"$in": ["Frizz", "Breakage"]}"#).unwrap();
        assert_eq!(c, Condition::any_of(["Frizz", "Breakage"]));
    }

    #[test]
    fn test_malformed_shapes_become_invalid() {
        for raw in [r#"42"#, r#"["Frizz"]"#, r#"{"$gt": 3}"#, r#"{"$in": "Frizz"}"#] {
            let c: Condition = serde_json::from_str(raw).unwrap();
            assert_eq!(c, Condition::Invalid, "shape: {}", raw);
        }
    }

    #[test]
    fn test_serialize_round_trip() {
        let c = Condition::any_of(["Frizz"]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"$in":["Frizz"]}"#);
        assert_eq!(serde_json::from_str::<Condition>(&json).unwrap(), c);

        let c = Condition::equals("Oily");
        assert_eq!(serde_json::to_string(&c).unwrap(), r#""Oily""#);
    }

    // ==================== Display ====================

    #[test]
    fn test_describe() {
        assert_eq!(Condition::equals("Curly").describe("hairType"), "hairType equals: Curly");
        assert_eq!(
            Condition::any_of(["Frizz", "Breakage"]).describe("concerns"),
            "concerns contains: Frizz, Breakage"
        );
    }
}
