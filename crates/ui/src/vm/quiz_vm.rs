use quiz_core::model::{OptionKey, QuestionId, QuizMode};
use quiz_core::scoring::Score;
use quiz_core::timer::TICK_MS;
use services::{QuizLoopService, QuizSession, SessionError, SessionState, TickOutcome, Transition};
use tracing::debug;

use crate::views::ViewError;
use crate::vm::question_vm::{QuestionCardVm, map_question_card, map_question_cards};
use crate::vm::time_fmt::{format_countdown, format_elapsed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(QuestionId, OptionKey),
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed(Score),
    /// Input the session refused, e.g. a click after completion.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimerVm {
    pub percent: f64,
    pub remaining_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: Score,
    pub score_line: String,
    pub elapsed_label: Option<String>,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.session.mode()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.state() == SessionState::Loading
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Card for the question on screen (stepped mode only).
    #[must_use]
    pub fn current_card(&self) -> Option<QuestionCardVm> {
        let index = self.session.current_index()?;
        let question = self.session.questions().get(index)?;
        Some(map_question_card(&self.session, index, question))
    }

    /// Every question, for the exam page and the results list.
    #[must_use]
    pub fn cards(&self) -> Vec<QuestionCardVm> {
        map_question_cards(&self.session)
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let label = self.session.progress().position_label();
        if label.is_empty() {
            label
        } else {
            format!("Pregunta {label}")
        }
    }

    /// Generation the countdown task should be armed for, if one should run.
    #[must_use]
    pub fn timer_generation(&self) -> Option<u64> {
        self.session
            .timer()
            .filter(|_| self.session.state() == SessionState::InProgress)
            .map(|_| self.session.generation())
    }

    #[must_use]
    pub fn timer(&self) -> Option<TimerVm> {
        let timer = self.session.timer()?;
        Some(TimerVm {
            percent: timer.progress() * 100.0,
            remaining_label: format_countdown(timer.remaining_secs()),
        })
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        if !self.session.is_complete() {
            return None;
        }
        let score = self.session.score();
        Some(ResultsVm {
            score,
            score_line: format!("Has acertado {score} preguntas."),
            elapsed_label: self
                .session
                .duration()
                .map(|elapsed| format!("Tiempo: {}", format_elapsed(elapsed))),
        })
    }

    /// Apply a user action. Refused actions (after completion, on a question
    /// already left behind) come back as `Ignored`.
    pub fn apply(&mut self, intent: QuizIntent) -> QuizOutcome {
        let result = match intent {
            QuizIntent::Select(id, key) => self
                .session
                .select_answer(id, key)
                .map(|transition| self.outcome_for(transition)),
            QuizIntent::Submit => self.session.submit().map(QuizOutcome::Completed),
        };
        result.unwrap_or_else(|err| {
            debug!(?intent, error = %err, "quiz input ignored");
            QuizOutcome::Ignored
        })
    }

    /// Advance the countdown armed for `generation` by one tick.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        match self.session.tick(generation, TICK_MS) {
            Ok(outcome) => outcome,
            Err(SessionError::Completed | SessionError::NotLoaded) => TickOutcome::Stale,
            Err(err) => {
                debug!(error = %err, "timer tick dropped");
                TickOutcome::Stale
            }
        }
    }

    fn outcome_for(&self, transition: Transition) -> QuizOutcome {
        match transition {
            Transition::Completed => QuizOutcome::Completed(self.session.score()),
            Transition::Recorded | Transition::Advanced { .. } => QuizOutcome::Continue,
        }
    }
}

/// # Errors
///
/// Returns `ViewError::LoadFailed` when the question bank cannot be loaded.
pub async fn start_quiz(quiz_loop: &QuizLoopService, mode: QuizMode) -> Result<QuizVm, ViewError> {
    let session = quiz_loop
        .start_session(mode)
        .await
        .map_err(|_| ViewError::LoadFailed)?;
    Ok(QuizVm::new(session))
}
