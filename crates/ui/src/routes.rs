use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{ExamView, HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/exam", ExamView)] Exam {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "quiz-shell",
            h1 { class: "quiz-title", "EXAMEN REGLAS DE JUEGO" }
            Outlet::<Route> {}
        }
    }
}
