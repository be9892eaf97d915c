//! Start checkout use case
//!
//! Converts a cart into the gateway's product lines and creates a hosted
//! checkout session through the [`CheckoutGateway`] port.

use crate::ports::checkout_gateway::{
    CheckoutError, CheckoutGateway, CheckoutProduct, CheckoutRequest, CheckoutSession,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Baisa per Omani rial
const BAISA_PER_OMR: f64 = 1000.0;

/// Errors that can occur when starting a checkout
#[derive(Error, Debug)]
pub enum StartCheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },

    #[error("Checkout error: {0}")]
    CheckoutError(#[from] CheckoutError),
}

/// One line of the customer's cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    /// Product size variant, e.g. "250ml"
    pub size: String,
    /// Unit price in OMR
    pub price: f64,
    pub quantity: u32,
}

/// Customer contact details forwarded as session metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Use case for starting a hosted checkout session
pub struct StartCheckoutUseCase<G: CheckoutGateway + 'static> {
    gateway: Arc<G>,
    /// Base URL the gateway redirects back to after payment
    return_base_url: String,
}

impl<G: CheckoutGateway + 'static> StartCheckoutUseCase<G> {
    pub fn new(gateway: Arc<G>, return_base_url: impl Into<String>) -> Self {
        Self {
            gateway,
            return_base_url: return_base_url.into(),
        }
    }

    /// Create a checkout session for the cart
    ///
    /// Prices are converted from OMR to baisa (smallest unit) with
    /// round-to-nearest; negative or non-finite prices are rejected.
    pub async fn execute(
        &self,
        reference_id: impl Into<String>,
        cart: &[CartItem],
        customer: &Customer,
    ) -> Result<CheckoutSession, StartCheckoutError> {
        if cart.is_empty() {
            return Err(StartCheckoutError::EmptyCart);
        }

        let products = cart
            .iter()
            .map(to_product)
            .collect::<Result<Vec<_>, _>>()?;

        let request = CheckoutRequest {
            client_reference_id: reference_id.into(),
            products,
            success_url: format!("{}/checkout/success", self.return_base_url),
            cancel_url: format!("{}/checkout/cancel", self.return_base_url),
            customer_email: customer.email.clone(),
            customer_phone: customer.phone.clone(),
        };

        info!(
            reference = %request.client_reference_id,
            lines = request.products.len(),
            "Creating checkout session"
        );

        Ok(self.gateway.create_session(request).await?)
    }
}

fn to_product(item: &CartItem) -> Result<CheckoutProduct, StartCheckoutError> {
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(StartCheckoutError::InvalidPrice {
            name: item.name.clone(),
            price: item.price,
        });
    }

    Ok(CheckoutProduct {
        name: format!("{} — {}", item.name, item.size),
        unit_amount: (item.price * BAISA_PER_OMR).round() as u64,
        quantity: item.quantity.max(1),
    })
}
