//! Scoring and per-option feedback.
//!
//! Everything here is a pure function of the question, the answer record and
//! whether the session has been completed.

use std::fmt;

use crate::model::{AnswerRecord, OptionKey, Question, QuizMode};

/// Aggregate result, displayed as "X de N".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} de {}", self.correct, self.total)
    }
}

/// Whether `answers` holds the right pick for `question`. No pick is never right.
#[must_use]
pub fn is_answered_correctly(question: &Question, answers: &AnswerRecord) -> bool {
    answers.get(question.id()) == Some(question.correct())
}

#[must_use]
pub fn score(questions: &[Question], answers: &AnswerRecord) -> Score {
    let correct = questions
        .iter()
        .filter(|question| is_answered_correctly(question, answers))
        .count();
    Score {
        correct,
        total: questions.len(),
    }
}

/// Visual/semantic state of one option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Neutral,
    // Live feedback while an exam is still open.
    SelectedCorrect,
    SelectedIncorrect,
    UnselectedCorrect,
    // After completion.
    Correct,
    CorrectPicked,
    SelectedWrong,
}

impl OptionFeedback {
    /// Marker shown next to the option text, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            OptionFeedback::SelectedCorrect | OptionFeedback::CorrectPicked => Some("✔️"),
            OptionFeedback::SelectedIncorrect | OptionFeedback::SelectedWrong => Some("❌"),
            OptionFeedback::Neutral
            | OptionFeedback::UnselectedCorrect
            | OptionFeedback::Correct => None,
        }
    }

    #[must_use]
    pub const fn css_modifier(self) -> &'static str {
        match self {
            OptionFeedback::Neutral => "neutral",
            OptionFeedback::SelectedCorrect => "selected-correct",
            OptionFeedback::SelectedIncorrect => "selected-incorrect",
            OptionFeedback::UnselectedCorrect => "unselected-correct",
            OptionFeedback::Correct => "correct",
            OptionFeedback::CorrectPicked => "correct-selected",
            OptionFeedback::SelectedWrong => "selected-wrong",
        }
    }
}

/// Feedback for `key` on `question`.
///
/// A stepped session shows nothing until it completes. An open exam reacts to
/// the current pick: the pick is marked right or wrong, and a wrong pick also
/// reveals the correct option.
#[must_use]
pub fn option_feedback(
    question: &Question,
    key: OptionKey,
    answers: &AnswerRecord,
    completed: bool,
    mode: QuizMode,
) -> OptionFeedback {
    let picked = answers.get(question.id());
    let is_pick = picked == Some(key);
    let is_correct = question.is_correct(key);

    if completed {
        return match (is_pick, is_correct) {
            (true, true) => OptionFeedback::CorrectPicked,
            (false, true) => OptionFeedback::Correct,
            (true, false) => OptionFeedback::SelectedWrong,
            (false, false) => OptionFeedback::Neutral,
        };
    }

    match (mode, picked) {
        (QuizMode::Stepped, _) | (QuizMode::Exam, None) => OptionFeedback::Neutral,
        (QuizMode::Exam, Some(_)) => match (is_pick, is_correct) {
            (true, true) => OptionFeedback::SelectedCorrect,
            (true, false) => OptionFeedback::SelectedIncorrect,
            (false, true) => OptionFeedback::UnselectedCorrect,
            (false, false) => OptionFeedback::Neutral,
        },
    }
}

/// Feedback for all four options, in display order.
#[must_use]
pub fn question_feedback(
    question: &Question,
    answers: &AnswerRecord,
    completed: bool,
    mode: QuizMode,
) -> [OptionFeedback; 4] {
    OptionKey::ALL.map(|key| option_feedback(question, key, answers, completed, mode))
}

/// Final per-question judgement shown under each question in the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct: OptionKey },
}

impl Verdict {
    #[must_use]
    pub fn of(question: &Question, answers: &AnswerRecord) -> Self {
        if is_answered_correctly(question, answers) {
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                correct: question.correct(),
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str("¡Correcto!"),
            Verdict::Incorrect { correct } => {
                write!(f, "Incorrecto. Respuesta correcta: {correct})")
            }
        }
    }
}
