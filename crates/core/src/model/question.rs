use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::QuestionId;

//
// ─── OPTION KEY ────────────────────────────────────────────────────────────────
//

/// One of the four answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKey {
    #[serde(alias = "A")]
    A,
    #[serde(alias = "B")]
    B,
    #[serde(alias = "C")]
    C,
    #[serde(alias = "D")]
    D,
}

impl OptionKey {
    /// All keys in display order.
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OptionKey::A => "a",
            OptionKey::B => "b",
            OptionKey::C => "c",
            OptionKey::D => "d",
        }
    }

    const fn index(self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question as stored in the question bank.
///
/// Field names on the wire follow the bank document (`pregunta`,
/// `respuesta_a`..`respuesta_d`, `correcta`). Because `correcta` decodes into
/// [`OptionKey`], a record whose answer key is not one of the four options is
/// rejected at load time instead of being carried around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "pregunta")]
    prompt: String,
    #[serde(rename = "respuesta_a")]
    option_a: String,
    #[serde(rename = "respuesta_b")]
    option_b: String,
    #[serde(rename = "respuesta_c")]
    option_c: String,
    #[serde(rename = "respuesta_d")]
    option_d: String,
    #[serde(rename = "correcta")]
    correct: OptionKey,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: [&str; 4],
        correct: OptionKey,
    ) -> Self {
        let [a, b, c, d] = options;
        Self {
            id,
            prompt: prompt.into(),
            option_a: a.to_string(),
            option_b: b.to_string(),
            option_c: c.to_string(),
            option_d: d.to_string(),
            correct,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Prompt length in characters (not bytes), which drives the timer budget.
    #[must_use]
    pub fn prompt_len(&self) -> usize {
        self.prompt.chars().count()
    }

    #[must_use]
    pub fn option(&self, key: OptionKey) -> &str {
        let options = [&self.option_a, &self.option_b, &self.option_c, &self.option_d];
        options[key.index()]
    }

    /// Iterates options in display order.
    pub fn options(&self) -> impl Iterator<Item = (OptionKey, &str)> {
        OptionKey::ALL.into_iter().map(|key| (key, self.option(key)))
    }

    #[must_use]
    pub fn correct(&self) -> OptionKey {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.correct == key
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
