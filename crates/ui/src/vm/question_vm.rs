use quiz_core::model::{OptionKey, Question, QuestionId};
use quiz_core::scoring::{OptionFeedback, Verdict};
use services::QuizSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub key: OptionKey,
    pub text: String,
    pub class: String,
    pub marker: Option<&'static str>,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerdictVm {
    pub text: String,
    pub is_correct: bool,
}

impl From<Verdict> for VerdictVm {
    fn from(verdict: Verdict) -> Self {
        Self {
            text: verdict.to_string(),
            is_correct: verdict == Verdict::Correct,
        }
    }
}

/// One question as rendered in a card: numbered prompt, four option
/// buttons, and the verdict line once the session is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub verdict: Option<VerdictVm>,
}

impl QuestionCardVm {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.prompt)
    }
}

fn option_class(feedback: OptionFeedback, selected: bool) -> String {
    let mut class = format!("quiz-option quiz-option--{}", feedback.css_modifier());
    if selected && feedback == OptionFeedback::Neutral {
        class.push_str(" quiz-option--selected");
    }
    class
}

/// Map question `index` of `session` into a card.
#[must_use]
pub fn map_question_card(
    session: &QuizSession,
    index: usize,
    question: &Question,
) -> QuestionCardVm {
    let completed = session.is_complete();
    let picked = session.answers().get(question.id());
    let feedback = session
        .feedback(question.id())
        .unwrap_or([OptionFeedback::Neutral; 4]);

    let options = question
        .options()
        .zip(feedback)
        .map(|((key, text), feedback)| {
            let selected = picked == Some(key);
            OptionVm {
                key,
                text: text.to_string(),
                class: option_class(feedback, selected),
                marker: feedback.marker(),
                selected,
                disabled: completed,
            }
        })
        .collect();

    QuestionCardVm {
        id: question.id(),
        number: index + 1,
        prompt: question.prompt().to_string(),
        options,
        verdict: session.verdict(question.id()).map(VerdictVm::from),
    }
}

#[must_use]
pub fn map_question_cards(session: &QuizSession) -> Vec<QuestionCardVm> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| map_question_card(session, index, question))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuizMode;
    use quiz_core::time::fixed_clock;

    fn session(mode: QuizMode) -> QuizSession {
        QuizSession::with_questions(
            mode,
            fixed_clock(),
            vec![
                Question::new(QuestionId::new(10), "Primera", ["a", "b", "c", "d"], OptionKey::B),
                Question::new(QuestionId::new(20), "Segunda", ["e", "f", "g", "h"], OptionKey::A),
            ],
        )
    }

    #[test]
    fn open_exam_card_shows_live_feedback() {
        let mut session = session(QuizMode::Exam);
        session.select_answer(QuestionId::new(10), OptionKey::C).unwrap();

        let card = map_question_card(&session, 0, &session.questions()[0]);
        assert_eq!(card.heading(), "1. Primera");
        assert_eq!(card.verdict, None);
        assert!(card.options[2].selected);
        assert_eq!(card.options[2].marker, Some("❌"));
        assert!(card.options[2].class.contains("quiz-option--selected-incorrect"));
        assert!(card.options[1].class.contains("quiz-option--unselected-correct"));
        assert!(card.options.iter().all(|option| !option.disabled));
    }

    #[test]
    fn completed_cards_are_disabled_and_carry_verdicts() {
        let mut session = session(QuizMode::Exam);
        session.select_answer(QuestionId::new(20), OptionKey::A).unwrap();
        session.submit().unwrap();

        let cards = map_question_cards(&session);
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().flat_map(|card| &card.options).all(|option| option.disabled));

        let first = cards[0].verdict.as_ref().unwrap();
        assert!(!first.is_correct);
        assert_eq!(first.text, "Incorrecto. Respuesta correcta: b)");
        assert!(cards[0].options[1].class.contains("quiz-option--correct"));

        assert_eq!(cards[0].options[1].marker, None);

        let second = cards[1].verdict.as_ref().unwrap();
        assert!(second.is_correct);
        assert_eq!(second.text, "¡Correcto!");
        assert_eq!(cards[1].options[0].marker, Some("✔️"));
        assert!(cards[1].options[0].class.contains("quiz-option--correct-selected"));
    }
}
