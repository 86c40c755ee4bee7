use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::QuizMode;
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;

fn route_for(mode: QuizMode) -> Route {
    match mode {
        QuizMode::Stepped => Route::Quiz {},
        QuizMode::Exam => Route::Exam {},
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let sample_size = ctx.quiz_loop().sample_size();

    use_effect(move || {
        if let Some(mode) = ctx.take_launch_mode() {
            debug!(%mode, "opening launch mode");
            let _ = navigator.replace(route_for(mode));
        }
    });

    rsx! {
        div { class: "page home-page",
            p { class: "home-intro", "Responde hasta {sample_size} preguntas elegidas al azar." }
            div { class: "home-modes",
                button {
                    class: "home-mode",
                    id: "home-mode-stepped",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(route_for(QuizMode::Stepped));
                    },
                    span { class: "home-mode__title", "Una pregunta a la vez" }
                    span { class: "home-mode__hint", "30 segundos por pregunta (45 si es larga)." }
                }
                button {
                    class: "home-mode",
                    id: "home-mode-exam",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(route_for(QuizMode::Exam));
                    },
                    span { class: "home-mode__title", "Examen completo" }
                    span { class: "home-mode__hint", "Todas las preguntas en una página." }
                }
            }
        }
    }
}
