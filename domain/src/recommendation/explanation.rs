//! Routine explanation text
//!
//! Pure string formatting over the well-known quiz answers. A single
//! hardcoded English template; localization is out of scope.

use crate::quiz::answer::AnswerSet;
use crate::quiz::question::question_ids;

/// Generate the customer-facing explanation for a recommended routine
///
/// Interpolates the hair type, scalp type, concerns and goals answers
/// (lower-cased) into a fixed sentence, falling back to generic wording for
/// anything unanswered. Multiple concerns are joined with "and".
///
/// # Example
///
/// ```
/// use tress_domain::{Answer, AnswerSet, generate_explanation};
///
/// let answers = AnswerSet::new()
///     .with("hairType", "Curly")
///     .with("scalp", "Oily")
///     .with("concerns", Answer::multiple(["Frizz", "Dullness"]))
///     .with("goals", "Moisture");
///
/// let text = generate_explanation(&answers);
/// assert!(text.starts_with("Based on your curly hair and oily scalp"));
/// assert!(text.contains("frizz and dullness"));
/// ```
pub fn generate_explanation(answers: &AnswerSet) -> String {
    let hair_type = answer_text(answers, question_ids::HAIR_TYPE, "your hair");
    let scalp = answer_text(answers, question_ids::SCALP, "your scalp type");
    let concerns = answer_text(answers, question_ids::CONCERNS, "your concerns");
    let goals = answer_text(answers, question_ids::GOALS, "your hair goals");

    format!(
        "Based on your {} hair and {} scalp, with concerns about {}, \
         we've curated a personalized routine focused on {}. \
         These products work together to address your specific needs \
         while maintaining healthy, beautiful hair.",
        hair_type, scalp, concerns, goals
    )
}

/// Lower-cased answer text for one question, multi-valued answers joined
/// with "and", empty or missing answers replaced by the fallback.
fn answer_text(answers: &AnswerSet, question_id: &str, fallback: &str) -> String {
    match answers.get(question_id) {
        Some(answer) if !answer.is_empty() => answer
            .selected()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" and "),
        _ => fallback.to_string(),
    }
}
