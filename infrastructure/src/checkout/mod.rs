//! Payment checkout adapters.

pub mod thawani;
