//! Presentation rendering.
//!
//! Choice questions are shown with their propositions in a fresh random order
//! on every call. The random source is passed in; nothing else in the crate
//! depends on it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::question::{ChoiceQuestion, Question, QuestionKind};

/// Render a question for display.
///
/// Choice questions render as `[id] statement 1)a 2)b ...` with shuffled
/// propositions. Free questions render in their diagnostic form.
pub fn render<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> String {
    match question.kind() {
        QuestionKind::Choice(choice) => {
            let mut shuffled: Vec<&String> = choice.propositions().iter().collect();
            shuffled.shuffle(rng);
            format!(
                "[{}] {} {}",
                question.id(),
                question.statement(),
                ChoiceQuestion::enumerate(shuffled)
            )
        }
        QuestionKind::Free(_) => question.to_string(),
    }
}
