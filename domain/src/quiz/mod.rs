//! Quiz subdomain: questions, answers, validation and progress.
//!
//! - [`question::Question`] — an answerable quiz question
//! - [`answer::Answer`] / [`answer::AnswerSet`] — a customer's selections
//! - [`validation`] — answer validation against question definitions
//! - [`completion`] — quiz completion percentage
//! - [`templates`] — built-in question and rule catalog

pub mod answer;
pub mod completion;
pub mod question;
pub mod templates;
pub mod validation;
