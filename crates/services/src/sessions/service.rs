use chrono::{DateTime, Duration, Utc};
use std::fmt;
use tracing::{debug, info};

use quiz_core::Clock;
use quiz_core::model::{AnswerRecord, OptionKey, Question, QuestionId, QuizMode};
use quiz_core::scoring::{self, OptionFeedback, Score, Verdict};
use quiz_core::timer::{QuestionTimer, TimerTick};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── STATES AND OUTCOMES ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No questions yet.
    Loading,
    InProgress,
    /// Terminal.
    Completed,
}

/// What a pick, an advance or a timer expiry did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Answer stored, current question unchanged (exam mode).
    Recorded,
    /// Moved to the question at `index`.
    Advanced { index: usize },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick was armed for a question the session already left.
    Stale,
    Running,
    Expired(Transition),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session.
///
/// Owns the sampled questions, the answer record and, in stepped mode, the
/// countdown for the current question. Each question change bumps
/// [`QuizSession::generation`]; timer ticks carry the generation they were
/// armed for so a tick from a question the user already left is dropped.
pub struct QuizSession {
    mode: QuizMode,
    clock: Clock,
    state: SessionState,
    questions: Vec<Question>,
    current: usize,
    answers: AnswerRecord,
    timer: Option<QuestionTimer>,
    generation: u64,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// A session still waiting for its questions.
    #[must_use]
    pub fn new(mode: QuizMode, clock: Clock) -> Self {
        Self {
            mode,
            clock,
            state: SessionState::Loading,
            questions: Vec::new(),
            current: 0,
            answers: AnswerRecord::new(),
            timer: None,
            generation: 0,
            started_at: None,
            completed_at: None,
        }
    }

    /// Build a session and load `questions` into it straight away.
    #[must_use]
    pub fn with_questions(mode: QuizMode, clock: Clock, questions: Vec<Question>) -> Self {
        let mut session = Self::new(mode, clock);
        if !questions.is_empty() {
            session.begin(questions);
        }
        session
    }

    /// Hand the sampled questions to the session.
    ///
    /// An empty list leaves the session in `Loading`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoaded` once questions have been accepted.
    pub fn load(&mut self, questions: Vec<Question>) -> Result<SessionState, SessionError> {
        if self.state != SessionState::Loading {
            return Err(SessionError::AlreadyLoaded);
        }
        if questions.is_empty() {
            debug!("no questions to load; session stays in loading");
            return Ok(self.state);
        }

        self.begin(questions);
        Ok(self.state)
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    /// Index of the question on screen. Only meaningful for a stepped
    /// session in progress.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (self.mode == QuizMode::Stepped && self.state == SessionState::InProgress)
            .then_some(self.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    #[must_use]
    pub fn timer(&self) -> Option<&QuestionTimer> {
        self.timer.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Wall time from start to completion.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        Some(self.completed_at? - self.started_at?)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.questions.len(),
            answered: self.answers.len(),
            position: self.current_index().map(|index| index + 1),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        scoring::score(&self.questions, &self.answers)
    }

    /// Per-option feedback for a question of this session.
    #[must_use]
    pub fn feedback(&self, id: QuestionId) -> Option<[OptionFeedback; 4]> {
        let question = self.find(id)?;
        Some(scoring::question_feedback(
            question,
            &self.answers,
            self.is_complete(),
            self.mode,
        ))
    }

    /// Final verdict for a question; `None` until the session completes.
    #[must_use]
    pub fn verdict(&self, id: QuestionId) -> Option<Verdict> {
        if !self.is_complete() {
            return None;
        }
        self.find(id).map(|question| Verdict::of(question, &self.answers))
    }

    /// Record `key` as the answer to question `id`.
    ///
    /// Stepped sessions only accept the current question and advance right
    /// after recording. Exam sessions accept any of their questions and
    /// overwrite earlier picks.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoaded` before questions arrive,
    /// `SessionError::Completed` after completion, `SessionError::NotCurrentQuestion`
    /// for a stepped pick on another question, and `SessionError::UnknownQuestion`
    /// for an id outside this session.
    pub fn select_answer(
        &mut self,
        id: QuestionId,
        key: OptionKey,
    ) -> Result<Transition, SessionError> {
        self.ensure_in_progress()?;

        match self.mode {
            QuizMode::Stepped => {
                let current_id = self.questions[self.current].id();
                if current_id != id {
                    return Err(SessionError::NotCurrentQuestion(id));
                }
                self.answers.record(id, key);
                debug!(question = %id, option = %key, "answer recorded");
                Ok(self.step_forward())
            }
            QuizMode::Exam => {
                if self.find(id).is_none() {
                    return Err(SessionError::UnknownQuestion(id));
                }
                self.answers.record(id, key);
                debug!(question = %id, option = %key, "answer recorded");
                Ok(Transition::Recorded)
            }
        }
    }

    /// Move past the current question without recording anything.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongMode` for exam sessions, plus the
    /// `NotLoaded`/`Completed` state errors.
    pub fn advance(&mut self) -> Result<Transition, SessionError> {
        self.ensure_in_progress()?;
        if self.mode != QuizMode::Stepped {
            return Err(SessionError::WrongMode(self.mode));
        }
        Ok(self.step_forward())
    }

    /// Complete an exam session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongMode` for stepped sessions, plus the
    /// `NotLoaded`/`Completed` state errors.
    pub fn submit(&mut self) -> Result<Score, SessionError> {
        self.ensure_in_progress()?;
        if self.mode != QuizMode::Exam {
            return Err(SessionError::WrongMode(self.mode));
        }
        self.complete();
        Ok(self.score())
    }

    /// Feed `step_ms` to the current question's countdown.
    ///
    /// `generation` must be the value of [`QuizSession::generation`] when the
    /// ticking task was started; ticks from older generations are ignored.
    ///
    /// # Errors
    ///
    /// Returns the `NotLoaded`/`Completed` state errors.
    pub fn tick(&mut self, generation: u64, step_ms: u64) -> Result<TickOutcome, SessionError> {
        self.ensure_in_progress()?;
        if generation != self.generation {
            return Ok(TickOutcome::Stale);
        }
        let Some(timer) = self.timer.as_mut() else {
            return Ok(TickOutcome::Stale);
        };
        match timer.tick(step_ms) {
            TimerTick::Running => Ok(TickOutcome::Running),
            TimerTick::Expired => {
                debug!(index = self.current, "question timed out");
                Ok(TickOutcome::Expired(self.step_forward()))
            }
        }
    }

    fn begin(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.current = 0;
        self.state = SessionState::InProgress;
        self.started_at = Some(self.clock.now());
        self.arm_timer();
        info!(
            mode = %self.mode,
            questions = self.questions.len(),
            "quiz session started"
        );
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Loading => Err(SessionError::NotLoaded),
            SessionState::Completed => Err(SessionError::Completed),
            SessionState::InProgress => Ok(()),
        }
    }

    fn step_forward(&mut self) -> Transition {
        if self.current + 1 >= self.questions.len() {
            self.complete();
            return Transition::Completed;
        }
        self.current += 1;
        self.arm_timer();
        Transition::Advanced {
            index: self.current,
        }
    }

    fn complete(&mut self) {
        self.state = SessionState::Completed;
        self.completed_at = Some(self.clock.now());
        self.generation += 1;
        self.timer = None;
        info!(score = %self.score(), "quiz session completed");
    }

    fn arm_timer(&mut self) {
        self.generation += 1;
        self.timer = if self.mode.is_timed() {
            self.questions.get(self.current).map(QuestionTimer::for_question)
        } else {
            None
        };
    }

    fn find(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
