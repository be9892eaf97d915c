//! Quiz catalog adapter
//!
//! Implements [`QuizCatalogSource`] against the quiz-configuration service
//! over HTTP. Questions and rules are plain JSON arrays.

use super::session::ApiSession;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use tress_application::{CatalogError, QuizCatalogSource};
use tress_domain::{Question, Rule};

const QUESTIONS_PATH: &str = "/api/v1/quiz/questions";
const RULES_PATH: &str = "/api/v1/quiz/rules";

/// Request timeout; the backend answers these from a cache well within this
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the quiz-configuration service
pub struct CatalogClient {
    client: reqwest::Client,
    session: ApiSession,
}

impl CatalogClient {
    /// Create a client with the default timeout
    pub fn new(session: ApiSession) -> Result<Self, CatalogError> {
        Self::with_timeout(session, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(session: ApiSession, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ConnectionError(e.to_string()))?;
        Ok(Self { client, session })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.session.url(path);
        debug!(%url, "Fetching quiz catalog");

        let response = self
            .client
            .get(&url)
            .headers(self.session.auth_headers())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::MalformedPayload(e.to_string()))
    }
}

fn request_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        CatalogError::Timeout
    } else if err.is_connect() {
        CatalogError::ConnectionError(err.to_string())
    } else {
        CatalogError::RequestFailed(err.to_string())
    }
}

fn status_error(status: StatusCode) -> CatalogError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CatalogError::Unauthorized(status.to_string())
        }
        _ => CatalogError::RequestFailed(format!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )),
    }
}

#[async_trait]
impl QuizCatalogSource for CatalogClient {
    async fn load_questions(&self) -> Result<Vec<Question>, CatalogError> {
        self.get_json(QUESTIONS_PATH).await
    }

    async fn load_rules(&self) -> Result<Vec<Rule>, CatalogError> {
        self.get_json(RULES_PATH).await
    }
}
