//! Rule matching against quiz answers
//!
//! Matching is a pure filtering pass: absence of a match is a valid,
//! expected outcome, never an error. Ranking is kept separate so callers
//! that want the catalog order can have it.

use super::rule::Rule;
use crate::quiz::answer::AnswerSet;

/// Filter the rules that apply to the given answers
///
/// Inactive rules are skipped. A rule matches iff every one of its
/// conditions holds against the answers; a rule with no conditions matches
/// vacuously. Input order is preserved; use [`rank_by_priority`] when a
/// ranked list is wanted.
///
/// # Example
///
/// ```
/// use tress_domain::{Answer, AnswerSet, Condition, Rule, match_rules, priority};
///
/// let rules = vec![
///     Rule::new("Curly Hair with Frizz", "Anti-frizz products", priority::CRITICAL)
///         .with_condition("hairType", Condition::equals("Curly"))
///         .with_condition("concerns", Condition::any_of(["Frizz"])),
/// ];
/// let answers = AnswerSet::new()
///     .with("hairType", "Curly")
///     .with("concerns", Answer::multiple(["Frizz", "Dullness"]));
///
/// let matched = match_rules(&answers, &rules);
/// assert_eq!(matched.len(), 1);
/// ```
pub fn match_rules<'a>(answers: &AnswerSet, rules: &'a [Rule]) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|rule| rule.is_active)
        .filter(|rule| {
            rule.conditions
                .iter()
                .all(|(key, condition)| condition.matches(answers.get(key)))
        })
        .collect()
}

/// Order matched rules by priority, highest first
///
/// The sort is stable: rules with equal priority keep their relative
/// (catalog) order.
pub fn rank_by_priority<'a>(mut rules: Vec<&'a Rule>) -> Vec<&'a Rule> {
    rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::answer::Answer;
    use crate::recommendation::condition::Condition;
    use crate::recommendation::rule::priority;

    fn frizz_rule() -> Rule {
        Rule::new("Frizz Control", "Anti-frizz products", priority::CRITICAL)
            .with_condition("concerns", Condition::any_of(["Frizz"]))
    }

    fn oily_rule() -> Rule {
        Rule::new("Oily Scalp Balance", "Clarifying products", priority::HIGH)
            .with_condition("scalp", Condition::equals("Oily"))
    }

    // ==================== Matching ====================

    #[test]
    fn matches_contains_any_against_list_answer() {
        let answers = AnswerSet::new().with("concerns", Answer::multiple(["Frizz", "Dullness"]));
        let rules = vec![frizz_rule()];

        let matched = match_rules(&answers, &rules);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Frizz Control");
    }

    #[test]
    fn exact_condition_excludes_different_value() {
        let answers = AnswerSet::new().with("scalp", "Dry");
        let rules = [oily_rule()];
        let matched = match_rules(&answers, &rules);
        assert!(matched.is_empty());
    }

    #[test]
    fn all_conditions_must_hold() {
        let rule = Rule::new("Dry Hair Moisture", "Deep conditioning", priority::CRITICAL)
            .with_condition("scalp", Condition::equals("Dry"))
            .with_condition("goals", Condition::equals("Moisture"));

        let partial = AnswerSet::new().with("scalp", "Dry");
        assert!(match_rules(&partial, std::slice::from_ref(&rule)).is_empty());

        let full = partial.with("goals", "Moisture");
        assert_eq!(match_rules(&full, std::slice::from_ref(&rule)).len(), 1);
    }

    #[test]
    fn missing_answer_fails_the_rule() {
        let rules = [oily_rule()];
        let matched = match_rules(&AnswerSet::new(), &rules);
        assert!(matched.is_empty());
    }

    #[test]
    fn unknown_condition_key_fails_silently() {
        let rule = Rule::new("Ghost", "References a retired question", priority::LOW)
            .with_condition("retiredQuestion", Condition::equals("Yes"));
        let answers = AnswerSet::new().with("scalp", "Oily");

        assert!(match_rules(&answers, std::slice::from_ref(&rule)).is_empty());
    }

    #[test]
    fn empty_conditions_match_vacuously() {
        let rule = Rule::new("Fallback", "Generic routine", priority::MINIMAL);
        let matched = match_rules(&AnswerSet::new(), std::slice::from_ref(&rule));
        assert_eq!(matched.len(), 1);
    }

    // ==================== Active flag ====================

    #[test]
    fn inactive_rules_never_match() {
        let rule = frizz_rule().inactive();
        let answers = AnswerSet::new().with("concerns", Answer::multiple(["Frizz"]));

        assert!(match_rules(&answers, std::slice::from_ref(&rule)).is_empty());
    }

    // ==================== Ordering ====================

    #[test]
    fn match_preserves_catalog_order() {
        let rules = vec![oily_rule(), frizz_rule()];
        let answers = AnswerSet::new()
            .with("scalp", "Oily")
            .with("concerns", Answer::multiple(["Frizz"]));

        let matched = match_rules(&answers, &rules);
        assert_eq!(matched[0].name, "Oily Scalp Balance");
        assert_eq!(matched[1].name, "Frizz Control");
    }

    #[test]
    fn rank_by_priority_is_descending_and_stable() {
        let first_high = Rule::new("A", "", priority::HIGH);
        let low = Rule::new("B", "", priority::LOW);
        let second_high = Rule::new("C", "", priority::HIGH);
        let critical = Rule::new("D", "", priority::CRITICAL);

        let ranked = rank_by_priority(vec![&first_high, &low, &second_high, &critical]);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["D", "A", "C", "B"]);
    }
}
