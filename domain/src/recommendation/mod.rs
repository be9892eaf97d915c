//! Recommendation subdomain: declarative rules over quiz answers.
//!
//! - [`condition::Condition`] — a per-question predicate
//! - [`rule::Rule`] — a named, prioritized set of conditions
//! - [`matcher`] — rule filtering and ranking
//! - [`explanation`] — customer-facing routine explanation text

pub mod condition;
pub mod explanation;
pub mod matcher;
pub mod rule;
