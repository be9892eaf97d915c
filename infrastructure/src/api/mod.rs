//! HTTP access to the quiz-configuration service.

pub mod catalog;
pub mod session;
