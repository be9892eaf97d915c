//! Infrastructure layer for tress
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod api;
pub mod checkout;
pub mod config;

// Re-export commonly used types
pub use api::{
    catalog::CatalogClient,
    session::{ApiSession, AuthToken},
};
pub use checkout::thawani::{ThawaniCheckout, order_reference};
pub use config::{ConfigLoader, FileApiConfig, FileCheckoutConfig, FileConfig};
