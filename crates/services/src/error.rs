//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionId;

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("question bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank lists id {0} more than once")]
    DuplicateId(QuestionId),
}

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("questions have not been loaded yet")]
    NotLoaded,
    #[error("questions were already loaded")]
    AlreadyLoaded,
    #[error("session already completed")]
    Completed,
    #[error("question {0} is not the current question")]
    NotCurrentQuestion(QuestionId),
    #[error("question {0} is not part of this session")]
    UnknownQuestion(QuestionId),
    #[error("operation not available in {0} mode")]
    WrongMode(quiz_core::model::QuizMode),
    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}
