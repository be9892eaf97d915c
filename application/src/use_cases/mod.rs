//! Use cases
//!
//! Each use case composes domain operations behind a single `execute`
//! entry point, with ports injected at construction.

pub mod build_routine;
pub mod start_checkout;
