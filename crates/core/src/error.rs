use thiserror::Error;

use crate::model::QuizModeError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Mode(#[from] QuizModeError),
}
