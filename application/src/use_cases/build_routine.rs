//! Build routine use case
//!
//! Orchestrates the full recommendation flow: load the catalog, validate
//! the answers, match and rank the rules, compute completion and generate
//! the explanation text.

use crate::ports::catalog_source::{CatalogError, QuizCatalogSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use tress_domain::{
    AnswerSet, Rule, ValidationReport, completion_percent, generate_explanation, match_rules,
    rank_by_priority, validate_answers,
};

/// Errors that can occur while building a recommendation
///
/// "No rule matched" is not among them: an empty match list is a valid,
/// expected outcome.
#[derive(Error, Debug)]
pub enum BuildRoutineError {
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

/// Output of the build-routine use case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineRecommendation {
    /// Validation outcome for the submitted answers
    pub report: ValidationReport,
    /// Percentage of required questions answered (0-100)
    pub completion: u8,
    /// Matched rules, highest priority first
    pub matches: Vec<Rule>,
    /// Customer-facing explanation text
    pub explanation: String,
}

/// Use case for turning quiz answers into a ranked recommendation
pub struct BuildRoutineUseCase<C: QuizCatalogSource + 'static> {
    catalog: Arc<C>,
}

impl<C: QuizCatalogSource + 'static> BuildRoutineUseCase<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Execute the use case
    ///
    /// Invalid answers do not abort the flow: the report carries the
    /// errors and matching still runs over whatever was answered, so a
    /// partially filled quiz can preview its recommendations.
    pub async fn execute(
        &self,
        answers: &AnswerSet,
    ) -> Result<RoutineRecommendation, BuildRoutineError> {
        let questions = self.catalog.load_questions().await?;
        let rules = self.catalog.load_rules().await?;
        debug!(
            questions = questions.len(),
            rules = rules.len(),
            "Loaded quiz catalog"
        );

        let report = validate_answers(answers, &questions);
        if !report.is_valid {
            warn!(errors = report.errors.len(), "Answer validation failed");
        }

        let completion = completion_percent(answers, &questions);
        let ranked: Vec<Rule> = rank_by_priority(match_rules(answers, &rules))
            .into_iter()
            .cloned()
            .collect();
        let explanation = generate_explanation(answers);

        info!(
            completion,
            matches = ranked.len(),
            valid = report.is_valid,
            "Built routine recommendation"
        );

        Ok(RoutineRecommendation {
            report,
            completion,
            matches: ranked,
            explanation,
        })
    }
}
