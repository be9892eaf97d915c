//! Application layer for tress
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    catalog_source::{CatalogError, QuizCatalogSource, StaticCatalog},
    checkout_gateway::{
        CheckoutError, CheckoutGateway, CheckoutProduct, CheckoutRequest, CheckoutSession,
    },
};
pub use use_cases::build_routine::{
    BuildRoutineError, BuildRoutineUseCase, RoutineRecommendation,
};
pub use use_cases::start_checkout::{
    CartItem, Customer, StartCheckoutError, StartCheckoutUseCase,
};
