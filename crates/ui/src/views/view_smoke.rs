use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{OptionKey, Question, QuestionId};

use super::test_harness::{
    BrokenBank, ViewHarness, ViewKind, question, setup_view_harness, setup_view_harness_with_bank,
};
use crate::vm::QuizIntent;

fn current_question_id(harness: &ViewHarness) -> Option<QuestionId> {
    let vm = harness.quiz_handles.vm();
    harness.dom.in_runtime(|| {
        vm.read()
            .as_ref()
            .and_then(|quiz| quiz.session().current_question().map(Question::id))
    })
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_offers_both_modes() {
    let mut harness = setup_view_harness(ViewKind::Home, vec![question(1, OptionKey::A)]);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Responde hasta 25 preguntas"), "missing intro in {html}");
    assert!(html.contains("home-mode-stepped"), "missing stepped entry in {html}");
    assert!(html.contains("home-mode-exam"), "missing exam entry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_loads_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        vec![question(1, OptionKey::A), question(2, OptionKey::B)],
    );
    harness.rebuild();
    assert!(harness.render().contains("Cargando..."));

    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Cargando..."), "still loading: {html}");
    assert!(html.contains("Pregunta 1 / 2"), "missing progress in {html}");
    assert!(html.contains("0:30"), "missing countdown in {html}");
    assert!(html.contains("cuatro"), "missing options in {html}");
    assert!(!html.contains("quiz-submit"), "stepped mode has no submit: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_answers_through_to_results() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        vec![question(1, OptionKey::A), question(2, OptionKey::A)],
    );
    harness.rebuild();
    harness.settle().await;

    let first = current_question_id(&harness).expect("first question");
    harness.dispatch(QuizIntent::Select(first, OptionKey::A));
    let html = harness.render();
    assert!(html.contains("Pregunta 2 / 2"), "did not advance: {html}");

    let second = current_question_id(&harness).expect("second question");
    assert_ne!(first, second);
    harness.dispatch(QuizIntent::Select(second, OptionKey::D));

    let html = harness.render();
    assert!(
        html.contains("Has acertado 1 de 2 preguntas."),
        "missing score in {html}"
    );
    assert!(html.contains("¡Correcto!"), "missing correct verdict in {html}");
    assert!(html.contains("✔️"), "missing mark on the right pick in {html}");
    assert!(html.contains("❌"), "missing mark on the wrong pick in {html}");
    assert!(
        html.contains("Incorrecto. Respuesta correcta: a)"),
        "missing incorrect verdict in {html}"
    );
    assert!(html.contains("Nuevo examen"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_scores_on_submit() {
    let mut harness = setup_view_harness(
        ViewKind::Exam,
        vec![question(1, OptionKey::B), question(2, OptionKey::C)],
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Pregunta 1"), "missing first prompt in {html}");
    assert!(html.contains("Pregunta 2"), "missing second prompt in {html}");
    assert!(html.contains("📝 Corregir examen"), "missing submit in {html}");
    assert!(!html.contains("quiz-timer"), "exam mode is untimed: {html}");

    harness.dispatch(QuizIntent::Select(QuestionId::new(1), OptionKey::B));
    harness.dispatch(QuizIntent::Submit);

    let html = harness.render();
    assert!(
        html.contains("Has acertado 1 de 2 preguntas."),
        "missing score in {html}"
    );
    assert!(
        html.contains("Incorrecto. Respuesta correcta: c)"),
        "missing verdict for the skipped question in {html}"
    );
    assert!(!html.contains("quiz-submit"), "submit should be gone: {html}");

    // Picks after correction are ignored.
    harness.dispatch(QuizIntent::Select(QuestionId::new(2), OptionKey::C));
    assert!(harness.render().contains("Has acertado 1 de 2 preguntas."));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_stays_loading_when_bank_fails() {
    let mut harness = setup_view_harness_with_bank(ViewKind::Exam, Arc::new(BrokenBank), None);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Cargando..."), "expected loading screen in {html}");
    assert!(!html.contains("quiz-submit"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_stays_loading_on_empty_bank() {
    let mut harness = setup_view_harness(ViewKind::Quiz, Vec::new());
    harness.rebuild();
    harness.settle().await;

    assert!(harness.render().contains("Cargando..."));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_countdown_moves_on_when_time_runs_out() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        vec![question(1, OptionKey::A), question(2, OptionKey::A)],
    );
    harness.rebuild();
    harness.settle().await;

    harness.advance(Duration::from_secs(29)).await;
    let html = harness.render();
    assert!(html.contains("Pregunta 1 / 2"), "advanced too early: {html}");
    assert!(
        html.contains(">0:01<") || html.contains(">0:02<"),
        "countdown not running: {html}"
    );

    harness.advance(Duration::from_millis(1_500)).await;
    let html = harness.render();
    assert!(html.contains("Pregunta 2 / 2"), "did not move on after 30 s: {html}");
    assert!(html.contains("0:30"), "next countdown not fresh: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_pick_just_before_expiry_rearms_countdown() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        vec![question(1, OptionKey::A), question(2, OptionKey::A)],
    );
    harness.rebuild();
    harness.settle().await;

    harness.advance(Duration::from_millis(29_500)).await;
    assert!(harness.render().contains("Pregunta 1 / 2"));

    let first = current_question_id(&harness).expect("first question");
    harness.dispatch(QuizIntent::Select(first, OptionKey::A));

    // Past the moment the first question's countdown would have run out.
    harness.advance(Duration::from_millis(600)).await;
    let html = harness.render();
    assert!(html.contains("Pregunta 2 / 2"), "second question skipped: {html}");
    assert!(html.contains("0:30"), "countdown carried over: {html}");

    harness.advance(Duration::from_secs(30)).await;
    let html = harness.render();
    assert!(
        html.contains("Has acertado 1 de 2 preguntas."),
        "second countdown never expired: {html}"
    );
}
