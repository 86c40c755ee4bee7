use rand::seq::SliceRandom;
use rand::{Rng, rng};

use crate::model::Question;

/// Number of questions drawn for one session.
pub const DEFAULT_SAMPLE_SIZE: usize = 25;

/// Shuffle the bank with the thread RNG and keep at most `limit` questions.
#[must_use]
pub fn sample_questions(questions: Vec<Question>, limit: usize) -> Vec<Question> {
    sample_questions_with(&mut rng(), questions, limit)
}

/// Shuffle `questions` with `rng` and keep at most `limit` of them.
///
/// Banks smaller than `limit` are returned whole, in shuffled order.
#[must_use]
pub fn sample_questions_with<R: Rng + ?Sized>(
    rng: &mut R,
    mut questions: Vec<Question>,
    limit: usize,
) -> Vec<Question> {
    questions.as_mut_slice().shuffle(rng);
    questions.truncate(limit);
    questions
}
