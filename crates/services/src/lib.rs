#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use bank::{
    FileQuestionBank, HttpQuestionBank, InMemoryQuestionBank, QuestionBank,
    question_bank_from_location,
};
pub use error::{QuestionBankError, SessionError};
pub use sessions::{
    QuizLoopService, QuizSession, SessionProgress, SessionState, TickOutcome, Transition,
};
