//! Thawani checkout adapter
//!
//! Implements [`CheckoutGateway`] against the backend's Thawani session
//! endpoint. This is the single outbound payment request the system makes;
//! the rest of the gateway protocol (webhooks, capture, refunds) lives
//! server-side and is out of scope here.

use crate::api::session::ApiSession;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use tress_application::{CheckoutError, CheckoutGateway, CheckoutProduct, CheckoutRequest, CheckoutSession};

const SESSION_PATH: &str = "/api/v1/pay/thawani/session";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generate an order reference id: `order_<epoch-millis>`
pub fn order_reference() -> String {
    format!("order_{}", Utc::now().timestamp_millis())
}

/// Wire format of the session creation request
#[derive(Debug, Serialize)]
struct SessionBody<'a> {
    client_reference_id: &'a str,
    products: &'a [CheckoutProduct],
    success_url: &'a str,
    cancel_url: &'a str,
    metadata: Metadata<'a>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    #[serde(rename = "customerData")]
    customer_data: CustomerData<'a>,
}

#[derive(Debug, Serialize)]
struct CustomerData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

/// Wire format of the session creation response
#[derive(Debug, Deserialize)]
struct SessionResponse {
    pay_url: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl<'a> SessionBody<'a> {
    fn from_request(request: &'a CheckoutRequest) -> Self {
        Self {
            client_reference_id: &request.client_reference_id,
            products: &request.products,
            success_url: &request.success_url,
            cancel_url: &request.cancel_url,
            metadata: Metadata {
                customer_data: CustomerData {
                    email: request.customer_email.as_deref(),
                    phone: request.customer_phone.as_deref(),
                },
            },
        }
    }
}

/// Checkout adapter for the Thawani session endpoint
pub struct ThawaniCheckout {
    client: reqwest::Client,
    session: ApiSession,
}

impl ThawaniCheckout {
    pub fn new(session: ApiSession) -> Result<Self, CheckoutError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| CheckoutError::ConnectionError(e.to_string()))?;
        Ok(Self { client, session })
    }
}

#[async_trait]
impl CheckoutGateway for ThawaniCheckout {
    async fn create_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = self.session.url(SESSION_PATH);
        debug!(%url, reference = %request.client_reference_id, "Creating Thawani session");

        let response = self
            .client
            .post(&url)
            .headers(self.session.auth_headers())
            .json(&SessionBody::from_request(&request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CheckoutError::Timeout
                } else {
                    CheckoutError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        let body: SessionResponse = response
            .json()
            .await
            .map_err(|e| CheckoutError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .message
                .unwrap_or_else(|| "Payment initialization failed".to_string());
            warn!(status = status.as_u16(), %message, "Thawani session rejected");
            return Err(CheckoutError::RequestFailed(message));
        }

        let pay_url = body.pay_url.ok_or(CheckoutError::MissingPayUrl)?;
        Ok(CheckoutSession {
            client_reference_id: request.client_reference_id,
            pay_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_reference_format() {
        let reference = order_reference();
        assert!(reference.starts_with("order_"));
        assert!(reference["order_".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_session_body_wire_shape() {
        let request = CheckoutRequest {
            client_reference_id: "order_123".into(),
            products: vec![CheckoutProduct {
                name: "Argan Shampoo — 250ml".into(),
                unit_amount: 4500,
                quantity: 2,
            }],
            success_url: "https://shop.example/checkout/success".into(),
            cancel_url: "https://shop.example/checkout/cancel".into(),
            customer_email: Some("a@example.com".into()),
            customer_phone: None,
        };

        let json = serde_json::to_value(SessionBody::from_request(&request)).unwrap();
        assert_eq!(json["client_reference_id"], "order_123");
        assert_eq!(json["products"][0]["unit_amount"], 4500);
        assert_eq!(json["metadata"]["customerData"]["email"], "a@example.com");
        // Absent phone is omitted, not null
        assert!(json["metadata"]["customerData"].get("phone").is_none());
    }

    #[test]
    fn test_response_without_pay_url() {
        let body: SessionResponse =
            serde_json::from_str(r#"{"message": "session created"}"#).unwrap();
        assert!(body.pay_url.is_none());

        let body: SessionResponse =
            serde_json::from_str(r#"{"pay_url": "https://pay.example/s/1"}"#).unwrap();
        assert_eq!(body.pay_url.as_deref(), Some("https://pay.example/s/1"));
    }
}
