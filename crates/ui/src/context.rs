use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use quiz_core::model::QuizMode;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    /// Mode to open straight away instead of showing the mode picker.
    fn launch_mode(&self) -> Option<QuizMode>;
}

#[derive(Clone)]
pub struct AppContext {
    launch_mode: Option<QuizMode>,
    launch_pending: Arc<AtomicBool>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let launch_mode = app.launch_mode();
        Self {
            launch_mode,
            launch_pending: Arc::new(AtomicBool::new(launch_mode.is_some())),
            quiz_loop: app.quiz_loop(),
        }
    }

    /// The launch mode, handed out once. Later calls return `None` so that
    /// navigating back to the picker does not bounce into a quiz again.
    #[must_use]
    pub fn take_launch_mode(&self) -> Option<QuizMode> {
        if self.launch_pending.swap(false, Ordering::AcqRel) {
            self.launch_mode
        } else {
            None
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
