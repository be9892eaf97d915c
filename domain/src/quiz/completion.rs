//! Quiz completion percentage

use super::answer::AnswerSet;
use super::question::Question;

/// Percentage of required questions that have a non-empty answer
///
/// Returns an integer in `0..=100`, rounded to the nearest whole percent.
/// A quiz with no required questions reports 0, not a division fault.
///
/// # Example
///
/// ```
/// use tress_domain::{AnswerSet, Question, completion_percent};
///
/// let questions = vec![
///     Question::new("hairType", "Hair type?", ["Curly"]).required(),
///     Question::new("scalp", "Scalp?", ["Oily"]).required(),
/// ];
/// let answers = AnswerSet::new().with("hairType", "Curly");
/// assert_eq!(completion_percent(&answers, &questions), 50);
/// ```
pub fn completion_percent(answers: &AnswerSet, questions: &[Question]) -> u8 {
    let required: Vec<_> = questions.iter().filter(|q| q.required).collect();
    if required.is_empty() {
        return 0;
    }

    let answered = required
        .iter()
        .filter(|q| answers.is_answered(&q.id))
        .count();

    (100.0 * answered as f64 / required.len() as f64).round() as u8
}
