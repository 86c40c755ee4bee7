use dioxus::prelude::*;

use crate::vm::{QuestionCardVm, QuizIntent};

#[component]
pub fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let id = card.id;
    let heading = card.heading();
    let verdict = card.verdict.as_ref().map(|verdict| {
        let class = if verdict.is_correct {
            "quiz-verdict quiz-verdict--correct"
        } else {
            "quiz-verdict quiz-verdict--incorrect"
        };
        (class, verdict.text.clone())
    });
    let options = card.options.iter().map(|option| {
        let key = option.key;
        let marker = option.marker;
        rsx! {
            button {
                key: "{key}",
                class: "{option.class}",
                r#type: "button",
                disabled: option.disabled,
                aria_pressed: "{option.selected}",
                onclick: move |_| on_intent.call(QuizIntent::Select(id, key)),
                "{option.text}"
                if let Some(marker) = marker {
                    span { class: "quiz-option__marker", "{marker}" }
                }
            }
        }
    });

    rsx! {
        section { class: "quiz-card",
            div { class: "quiz-card__prompt", "{heading}" }
            div { class: "quiz-card__options", {options} }
            if let Some((verdict_class, verdict_text)) = verdict {
                p { class: "{verdict_class}", "{verdict_text}" }
            }
        }
    }
}
