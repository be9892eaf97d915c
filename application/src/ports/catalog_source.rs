//! Quiz catalog port
//!
//! Questions and rules are configuration data owned by an external
//! quiz-configuration service; this port defines how the application layer
//! obtains them.

use async_trait::async_trait;
use thiserror::Error;
use tress_domain::{Question, Rule};

/// Errors that can occur while loading the quiz catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed catalog payload: {0}")]
    MalformedPayload(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Timeout")]
    Timeout,
}

/// Source of quiz questions and recommendation rules
///
/// Implementations fetch from the quiz-configuration service over HTTP, or
/// serve a fixed catalog for tests and offline use.
#[async_trait]
pub trait QuizCatalogSource: Send + Sync {
    /// All questions, in display order
    async fn load_questions(&self) -> Result<Vec<Question>, CatalogError>;

    /// All recommendation rules, in catalog order
    async fn load_rules(&self) -> Result<Vec<Rule>, CatalogError>;
}

/// Catalog source serving a fixed, in-memory catalog
///
/// Useful for tests and for the CLI's offline mode (template or file-based
/// catalogs).
pub struct StaticCatalog {
    questions: Vec<Question>,
    rules: Vec<Rule>,
}

impl StaticCatalog {
    pub fn new(questions: Vec<Question>, rules: Vec<Rule>) -> Self {
        Self { questions, rules }
    }

    /// The built-in template catalog
    pub fn templates() -> Self {
        Self::new(
            tress_domain::template_questions(),
            tress_domain::template_rules(),
        )
    }
}

#[async_trait]
impl QuizCatalogSource for StaticCatalog {
    async fn load_questions(&self) -> Result<Vec<Question>, CatalogError> {
        Ok(self.questions.clone())
    }

    async fn load_rules(&self) -> Result<Vec<Rule>, CatalogError> {
        Ok(self.rules.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_serves_templates() {
        let catalog = StaticCatalog::templates();
        assert_eq!(catalog.load_questions().await.unwrap().len(), 5);
        assert_eq!(catalog.load_rules().await.unwrap().len(), 7);
    }
}
