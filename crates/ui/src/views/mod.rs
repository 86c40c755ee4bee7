mod home;
mod question_card;
mod quiz;
mod state;
mod timer;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use question_card::QuestionCard;
pub use quiz::{ExamView, QuizView};
pub use state::{LoadState, ViewError, load_state};
pub use timer::{TimerBar, use_question_timer};
