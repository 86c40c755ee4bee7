mod question_vm;
mod quiz_vm;
mod time_fmt;

pub use question_vm::{OptionVm, QuestionCardVm, VerdictVm, map_question_card, map_question_cards};
pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm, ResultsVm, TimerVm, start_quiz};
pub use time_fmt::{format_countdown, format_elapsed};
