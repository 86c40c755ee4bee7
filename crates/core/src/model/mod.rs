mod answers;
mod ids;
mod mode;
mod question;

pub use answers::AnswerRecord;
pub use ids::QuestionId;
pub use mode::{QuizMode, QuizModeError};
pub use question::{OptionKey, Question};
