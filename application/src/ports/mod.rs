//! Port definitions
//!
//! Ports are the interfaces the application layer needs from the outside
//! world. Implementations (adapters) live in the infrastructure layer.

pub mod catalog_source;
pub mod checkout_gateway;
