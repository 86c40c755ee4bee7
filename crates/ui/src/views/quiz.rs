use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::QuizMode;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::question_card::QuestionCard;
use crate::views::timer::{TimerBar, use_question_timer};
use crate::views::{ViewError, load_state};
use crate::vm::{QuestionCardVm, QuizIntent, QuizVm, ResultsVm, TimerVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// One question at a time, under a countdown.
#[component]
pub fn QuizView() -> Element {
    rsx! { QuizPage { mode: QuizMode::Stepped } }
}

/// Every question on one page, corrected on submit.
#[component]
pub fn ExamView() -> Element {
    rsx! { QuizPage { mode: QuizMode::Exam } }
}

/// Snapshot of the session taken for one render.
#[derive(Clone, Debug, PartialEq)]
struct PageData {
    current: Option<QuestionCardVm>,
    cards: Vec<QuestionCardVm>,
    timer: Option<TimerVm>,
    progress_label: String,
    results: Option<ResultsVm>,
}

impl PageData {
    fn from_vm(quiz: &QuizVm) -> Self {
        let show_all = quiz.is_complete() || quiz.mode() == QuizMode::Exam;
        Self {
            current: quiz.current_card(),
            cards: if show_all { quiz.cards() } else { Vec::new() },
            timer: quiz.timer(),
            progress_label: quiz.progress_label(),
            results: quiz.results(),
        }
    }
}

#[component]
fn QuizPage(mode: QuizMode) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let mut vm = vm;
        async move {
            match start_quiz(&quiz_loop, mode).await {
                Ok(started) => {
                    if started.is_loading() {
                        warn!(%mode, "no questions sampled; staying on loading screen");
                    }
                    vm.set(Some(started));
                    Ok::<_, ViewError>(())
                }
                Err(err) => {
                    warn!(%mode, error = err.message(), "staying on loading screen");
                    Err(err)
                }
            }
        }
    });
    let state = load_state(resource);

    use_question_timer(vm);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(quiz) = vm.write().as_mut() {
            let _ = quiz.apply(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let page = vm
        .read()
        .as_ref()
        .filter(|quiz| !quiz.is_loading())
        .map(PageData::from_vm);

    let Some(page) = page.filter(|_| state.is_ready()) else {
        return rsx! {
            div { class: "quiz-loading", "Cargando..." }
        };
    };

    rsx! {
        div { class: "quiz-page",
            if let Some(results) = page.results.clone() {
                for card in page.cards.iter().cloned() {
                    QuestionCard { key: "{card.id}", card, on_intent: dispatch_intent }
                }
                ResultsFooter {
                    results,
                    on_restart: move |()| {
                        let _ = navigator.push(Route::Home {});
                    },
                }
            } else if mode == QuizMode::Exam {
                for card in page.cards.iter().cloned() {
                    QuestionCard { key: "{card.id}", card, on_intent: dispatch_intent }
                }
                div { class: "quiz-actions",
                    button {
                        class: "quiz-submit",
                        id: "quiz-submit",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                        "📝 Corregir examen"
                    }
                }
            } else if let Some(card) = page.current.clone() {
                div { class: "quiz-status",
                    span { class: "quiz-status__progress", "{page.progress_label}" }
                    if let Some(timer) = page.timer.clone() {
                        TimerBar { timer }
                    }
                }
                QuestionCard { key: "{card.id}", card, on_intent: dispatch_intent }
            }
        }
    }
}

#[component]
fn ResultsFooter(results: ResultsVm, on_restart: EventHandler<()>) -> Element {
    let score_class = if results.score.is_perfect() {
        "quiz-score quiz-score--perfect"
    } else {
        "quiz-score"
    };
    rsx! {
        div { class: "quiz-results",
            p { class: "{score_class}", id: "quiz-score", "{results.score_line}" }
            if let Some(elapsed) = results.elapsed_label.as_ref() {
                p { class: "quiz-elapsed", "{elapsed}" }
            }
            button {
                class: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Nuevo examen"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
