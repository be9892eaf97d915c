//! Built-in question and rule catalog
//!
//! A ready-made quiz for quick setup and seeding. Production deployments
//! normally pull the catalog from the quiz-configuration service; these
//! templates mirror what the admin seeds it with, and double as realistic
//! fixtures in tests.

use super::question::{Question, question_ids};
use crate::recommendation::condition::Condition;
use crate::recommendation::rule::{Rule, priority};

pub const HAIR_TYPE_OPTIONS: &[&str] = &["Straight", "Wavy", "Curly", "Coily"];
pub const SCALP_OPTIONS: &[&str] = &["Oily", "Dry", "Balanced", "Sensitive"];
pub const CONCERN_OPTIONS: &[&str] = &[
    "Frizz",
    "Breakage",
    "Dandruff",
    "Hair fall",
    "Lack of volume",
    "Color protection",
    "Split ends",
    "Dullness",
];
pub const GOAL_OPTIONS: &[&str] = &[
    "Shine",
    "Strength",
    "Growth",
    "Moisture",
    "Definition",
    "Scalp health",
    "Volume",
    "Damage repair",
];
pub const INGREDIENT_OPTIONS: &[&str] = &[
    "Coconut", "Amla", "Argan", "Shea", "Keratin", "Aloe", "Tea Tree", "Jojoba",
];

/// The standard five-question hair quiz
pub fn template_questions() -> Vec<Question> {
    vec![
        Question::new(
            question_ids::HAIR_TYPE,
            "What's your hair type?",
            HAIR_TYPE_OPTIONS.iter().copied(),
        )
        .required()
        .with_order(1),
        Question::new(
            question_ids::SCALP,
            "What's your scalp like?",
            SCALP_OPTIONS.iter().copied(),
        )
        .required()
        .with_order(2),
        Question::new(
            question_ids::CONCERNS,
            "What are your top hair concerns?",
            CONCERN_OPTIONS.iter().copied(),
        )
        .required()
        .multiple()
        .with_order(3),
        Question::new(
            question_ids::GOALS,
            "What's your main hair goal?",
            GOAL_OPTIONS.iter().copied(),
        )
        .required()
        .with_order(4),
        Question::new(
            question_ids::INGREDIENTS,
            "Any favorite ingredients?",
            INGREDIENT_OPTIONS.iter().copied(),
        )
        .multiple()
        .with_order(5),
    ]
}

/// The standard recommendation rules over the template questions
pub fn template_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Curly Hair with Frizz",
            "Anti-frizz and curl-defining products for curly hair",
            priority::CRITICAL,
        )
        .with_condition(question_ids::HAIR_TYPE, Condition::equals("Curly"))
        .with_condition(question_ids::CONCERNS, Condition::any_of(["Frizz"])),
        Rule::new(
            "Oily Scalp Balance",
            "Clarifying and balancing products for oily scalp",
            priority::HIGH,
        )
        .with_condition(question_ids::SCALP, Condition::equals("Oily")),
        Rule::new(
            "Dry Hair Moisture",
            "Deep conditioning products for dry hair seeking moisture",
            9,
        )
        .with_condition(question_ids::SCALP, Condition::equals("Dry"))
        .with_condition(question_ids::GOALS, Condition::equals("Moisture")),
        Rule::new(
            "Hair Fall Prevention",
            "Strengthening products for hair fall concerns",
            priority::CRITICAL,
        )
        .with_condition(question_ids::CONCERNS, Condition::any_of(["Hair fall"])),
        Rule::new(
            "Color Protection",
            "Color-safe products for treated hair",
            7,
        )
        .with_condition(question_ids::CONCERNS, Condition::any_of(["Color protection"])),
        Rule::new(
            "Sensitive Scalp Care",
            "Gentle products for sensitive scalp",
            9,
        )
        .with_condition(question_ids::SCALP, Condition::equals("Sensitive")),
        Rule::new(
            "Volume Boost",
            "Volumizing products for fine or flat hair",
            priority::HIGH,
        )
        .with_condition(question_ids::CONCERNS, Condition::any_of(["Lack of volume"]))
        .with_condition(question_ids::GOALS, Condition::equals("Volume")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::answer::{Answer, AnswerSet};
    use crate::quiz::completion::completion_percent;
    use crate::quiz::validation::validate_answers;
    use crate::recommendation::matcher::{match_rules, rank_by_priority};

    #[test]
    fn test_template_questions_are_well_formed() {
        let questions = template_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.is_active));
        assert!(questions.iter().all(|q| !q.options.is_empty()));

        let required = questions.iter().filter(|q| q.required).count();
        assert_eq!(required, 4);
    }

    #[test]
    fn test_template_rules_reference_template_questions() {
        let questions = template_questions();
        for rule in template_rules() {
            for key in rule.conditions.keys() {
                assert!(
                    questions.iter().any(|q| &q.id == key),
                    "rule '{}' references unknown question '{}'",
                    rule.name,
                    key
                );
            }
        }
    }

    #[test]
    fn test_template_rule_condition_values_are_real_options() {
        let questions = template_questions();
        for rule in template_rules() {
            for (key, condition) in &rule.conditions {
                let question = questions.iter().find(|q| &q.id == key).unwrap();
                let values: Vec<&str> = match condition {
                    Condition::Equals(v) => vec![v.as_str()],
                    Condition::AnyOf(vs) => vs.iter().map(String::as_str).collect(),
                    Condition::Invalid => vec![],
                };
                for value in values {
                    assert!(
                        question.has_option(value),
                        "rule '{}' uses non-option value '{}'",
                        rule.name,
                        value
                    );
                }
            }
        }
    }

    #[test]
    fn test_curly_frizz_scenario_end_to_end() {
        let questions = template_questions();
        let rules = template_rules();
        let answers = AnswerSet::new()
            .with("hairType", "Curly")
            .with("scalp", "Oily")
            .with("concerns", Answer::multiple(["Frizz", "Dullness"]))
            .with("goals", "Definition");

        assert!(validate_answers(&answers, &questions).is_valid);
        assert_eq!(completion_percent(&answers, &questions), 100);

        let ranked = rank_by_priority(match_rules(&answers, &rules));
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        // Curly+Frizz (10) outranks Oily Scalp (8)
        assert_eq!(names, vec!["Curly Hair with Frizz", "Oily Scalp Balance"]);
    }
}
