//! Domain layer for tress
//!
//! This crate contains the core business logic for the quiz-driven routine
//! recommendation engine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! A quiz is a sequence of [`Question`]s answered by a customer. Answers are
//! validated against the question definitions ([`validate_answers`]) and a
//! completion percentage can be computed while the quiz is in progress
//! ([`completion_percent`]).
//!
//! ## Recommendation
//!
//! Recommendation [`Rule`]s carry declarative [`Condition`]s over quiz
//! answers. [`match_rules`] filters the rules that apply to a given answer
//! set; [`rank_by_priority`] orders them for presentation.
//!
//! All operations are synchronous, pure functions over in-memory values.

pub mod quiz;
pub mod recommendation;

// Re-export commonly used types
pub use quiz::{
    answer::{Answer, AnswerSet},
    completion::completion_percent,
    question::{Question, question_ids},
    templates::{template_questions, template_rules},
    validation::{ValidationReport, validate_answers},
};
pub use recommendation::{
    condition::Condition,
    explanation::generate_explanation,
    matcher::{match_rules, rank_by_priority},
    rule::{Rule, priority},
};
