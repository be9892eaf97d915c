//! Checkout gateway port
//!
//! Defines the single outbound request the application makes towards the
//! payment side: create a hosted checkout session and hand back the URL to
//! redirect the customer to. Everything else about the payment protocol is
//! out of scope.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while starting a checkout session
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Gateway returned no payment URL")]
    MissingPayUrl,

    #[error("Timeout")]
    Timeout,
}

/// One product line in a checkout session
///
/// `unit_amount` is in baisa (1 OMR = 1000 baisa), the gateway's smallest
/// currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutProduct {
    pub name: String,
    pub unit_amount: u64,
    pub quantity: u32,
}

/// A checkout session creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Caller-chosen order reference, echoed back by the gateway
    pub client_reference_id: String,
    pub products: Vec<CheckoutProduct>,
    /// Where the gateway sends the customer after payment
    pub success_url: String,
    /// Where the gateway sends the customer on cancellation
    pub cancel_url: String,
    /// Customer contact details attached as session metadata
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

/// A created checkout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// The order reference the session was created under
    pub client_reference_id: String,
    /// Hosted payment page to redirect the customer to
    pub pay_url: String,
}

/// Gateway for creating hosted checkout sessions
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError>;
}
