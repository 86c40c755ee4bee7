use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quiz mode: {0:?} (expected stepped or exam)")]
pub struct QuizModeError(pub String);

/// How a session presents its questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuizMode {
    /// One question at a time; a pick or a timeout moves on.
    #[default]
    Stepped,
    /// Every question on one page, completed by an explicit submit.
    Exam,
}

impl QuizMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            QuizMode::Stepped => "stepped",
            QuizMode::Exam => "exam",
        }
    }

    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, QuizMode::Stepped)
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizMode {
    type Err = QuizModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stepped" | "step" => Ok(QuizMode::Stepped),
            "exam" | "single-page" | "single" => Ok(QuizMode::Exam),
            _ => Err(QuizModeError(s.to_string())),
        }
    }
}
