//! Per-question countdown.
//!
//! The timer does not own a clock. Whoever drives it calls [`QuestionTimer::tick`]
//! every [`TICK_MS`] and reacts to [`TimerTick::Expired`] by advancing the
//! session.

use crate::model::Question;

/// Budget for an ordinary question.
pub const BASE_DURATION_MS: u64 = 30_000;
/// Budget for a question whose prompt is longer than [`LONG_PROMPT_CHARS`].
pub const LONG_DURATION_MS: u64 = 45_000;
/// Prompts strictly longer than this get [`LONG_DURATION_MS`].
pub const LONG_PROMPT_CHARS: usize = 100;
/// Tick step.
pub const TICK_MS: u64 = 100;

/// Time budget for a prompt of `prompt_chars` characters.
#[must_use]
pub const fn duration_for_prompt_len(prompt_chars: usize) -> u64 {
    if prompt_chars > LONG_PROMPT_CHARS {
        LONG_DURATION_MS
    } else {
        BASE_DURATION_MS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTick {
    Running,
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionTimer {
    total_ms: u64,
    elapsed_ms: u64,
}

impl QuestionTimer {
    #[must_use]
    pub const fn with_duration(total_ms: u64) -> Self {
        Self {
            total_ms,
            elapsed_ms: 0,
        }
    }

    #[must_use]
    pub fn for_question(question: &Question) -> Self {
        Self::with_duration(duration_for_prompt_len(question.prompt_len()))
    }

    #[must_use]
    pub const fn total_ms(&self) -> u64 {
        self.total_ms
    }

    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Accumulate `step_ms`. Once the budget is reached the timer reports
    /// `Expired` and starts over from zero.
    pub fn tick(&mut self, step_ms: u64) -> TimerTick {
        let next = self.elapsed_ms.saturating_add(step_ms);
        if next >= self.total_ms {
            self.elapsed_ms = 0;
            TimerTick::Expired
        } else {
            self.elapsed_ms = next;
            TimerTick::Running
        }
    }

    /// Fraction of the budget used, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms as f64 / self.total_ms as f64).clamp(0.0, 1.0)
    }

    /// Whole seconds left, rounded up.
    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.total_ms.saturating_sub(self.elapsed_ms).div_ceil(1000)
    }
}
