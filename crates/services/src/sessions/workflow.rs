use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use quiz_core::Clock;
use quiz_core::model::QuizMode;
use quiz_core::sampler::{DEFAULT_SAMPLE_SIZE, sample_questions, sample_questions_with};

use super::service::QuizSession;
use crate::bank::QuestionBank;
use crate::error::SessionError;

/// Orchestrates session start: load the bank, sample it, hand the sample to
/// a fresh [`QuizSession`].
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    bank: Arc<dyn QuestionBank>,
    sample_size: usize,
    seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<dyn QuestionBank>) -> Self {
        Self {
            clock,
            bank,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Use a seeded RNG for sampling so runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Load, sample and start a new session.
    ///
    /// An empty bank yields a session that stays in `Loading`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Bank` when the bank cannot be loaded.
    pub async fn start_session(&self, mode: QuizMode) -> Result<QuizSession, SessionError> {
        let questions = self.bank.load().await.inspect_err(|err| {
            warn!(bank = %self.bank.describe(), error = %err, "question bank failed to load");
        })?;
        let available = questions.len();

        let sampled = match self.seed {
            Some(seed) => {
                sample_questions_with(&mut StdRng::seed_from_u64(seed), questions, self.sample_size)
            }
            None => sample_questions(questions, self.sample_size),
        };
        if sampled.is_empty() {
            warn!(bank = %self.bank.describe(), "question bank is empty");
        } else {
            info!(
                bank = %self.bank.describe(),
                available,
                sampled = sampled.len(),
                "questions sampled"
            );
        }

        Ok(QuizSession::with_questions(mode, self.clock, sampled))
    }
}
