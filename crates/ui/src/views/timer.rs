use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::timer::TICK_MS;
use services::TickOutcome;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::vm::{QuizVm, TimerVm};

/// Keep one countdown task running for the question on screen.
///
/// The task is keyed on the session generation: whenever it changes (a pick,
/// an expiry, completion) the old task is cancelled before a new one is armed.
/// Tasks are scope-owned, so unmounting the page stops the countdown too.
pub fn use_question_timer(vm: Signal<Option<QuizVm>>) {
    let armed_for = use_memo(move || vm.read().as_ref().and_then(QuizVm::timer_generation));
    let mut running = use_signal(|| None::<Task>);

    use_effect(move || {
        let armed = armed_for();
        if let Some(task) = running.write().take() {
            task.cancel();
        }
        if let Some(generation) = armed {
            running.set(Some(spawn(run_countdown(vm, generation))));
        }
    });
}

async fn run_countdown(mut vm: Signal<Option<QuizVm>>, generation: u64) {
    let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;
        let outcome = vm.write().as_mut().map(|quiz| quiz.tick(generation));
        match outcome {
            Some(TickOutcome::Running) => {}
            Some(TickOutcome::Expired(transition)) => {
                debug!(generation, ?transition, "question timed out");
                break;
            }
            Some(TickOutcome::Stale) | None => break,
        }
    }
}

#[component]
pub fn TimerBar(timer: TimerVm) -> Element {
    let width = format!("width: {:.1}%", timer.percent);
    rsx! {
        div { class: "quiz-timer",
            div { class: "quiz-timer__track",
                div { class: "quiz-timer__fill", style: "{width}" }
            }
            span { class: "quiz-timer__label", "{timer.remaining_label}" }
        }
    }
}
