use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{OptionKey, Question, QuestionId, QuizMode};
use quiz_core::time::fixed_clock;
use services::{InMemoryQuestionBank, QuestionBank, QuestionBankError, QuizLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{ExamView, HomeView, QuizView};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    launch_mode: Option<QuizMode>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn launch_mode(&self) -> Option<QuizMode> {
        self.launch_mode
    }
}

pub struct BrokenBank;

#[async_trait::async_trait]
impl QuestionBank for BrokenBank {
    async fn load(&self) -> Result<Vec<Question>, QuestionBankError> {
        Err(QuestionBankError::Io {
            path: "Questions.json".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Exam,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Exam => rsx! { ExamView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Settle the startup resource. A few rounds cover the spawn, the bank
    /// future and the re-render it triggers.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Keep driving the dom until tokio time has moved on by `span`. Meant
    /// for paused runtimes, where idle waits jump the clock forward.
    pub async fn advance(&mut self, span: std::time::Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: crate::vm::QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn question(id: u64, correct: OptionKey) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Pregunta {id}"),
        ["uno", "dos", "tres", "cuatro"],
        correct,
    )
}

pub fn setup_view_harness(view: ViewKind, questions: Vec<Question>) -> ViewHarness {
    let bank: Arc<dyn QuestionBank> = Arc::new(InMemoryQuestionBank::new(questions));
    setup_view_harness_with_bank(view, bank, None)
}

pub fn setup_view_harness_with_bank(
    view: ViewKind,
    bank: Arc<dyn QuestionBank>,
    launch_mode: Option<QuizMode>,
) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(fixed_clock(), bank).with_seed(7));
    let quiz_handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        quiz_loop,
        launch_mode,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness { dom, quiz_handles }
}
