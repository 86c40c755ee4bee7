//! Question bank loaders.
//!
//! A bank is a JSON array of question records. It is read once per session
//! start and never written.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::Question;
use tracing::debug;

use crate::error::QuestionBankError;

/// Source of the full, unsampled question list.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Fetch every question in the bank, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` when the bank cannot be read or decoded.
    async fn load(&self) -> Result<Vec<Question>, QuestionBankError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Decode a bank document and reject repeated ids.
///
/// # Errors
///
/// Returns `QuestionBankError::Parse` for malformed JSON or records, and
/// `QuestionBankError::DuplicateId` when two records share an id.
pub fn decode_questions(bytes: &[u8]) -> Result<Vec<Question>, QuestionBankError> {
    let questions: Vec<Question> = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::with_capacity(questions.len());
    for question in &questions {
        if !seen.insert(question.id()) {
            return Err(QuestionBankError::DuplicateId(question.id()));
        }
    }
    Ok(questions)
}

//
// ─── FILE ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct FileQuestionBank {
    path: PathBuf,
}

impl FileQuestionBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionBank for FileQuestionBank {
    async fn load(&self) -> Result<Vec<Question>, QuestionBankError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| QuestionBankError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let questions = decode_questions(&bytes)?;
        debug!(path = %self.path.display(), count = questions.len(), "question bank read");
        Ok(questions)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

//
// ─── HTTP ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct HttpQuestionBank {
    client: reqwest::Client,
    url: String,
}

impl HttpQuestionBank {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuestionBank for HttpQuestionBank {
    async fn load(&self) -> Result<Vec<Question>, QuestionBankError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(QuestionBankError::HttpStatus(response.status()));
        }
        let bytes = response.bytes().await?;
        let questions = decode_questions(&bytes)?;
        debug!(url = %self.url, count = questions.len(), "question bank fetched");
        Ok(questions)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

//
// ─── IN MEMORY ─────────────────────────────────────────────────────────────────
//

/// Fixed bank, used by tests and previews.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionBank {
    questions: Vec<Question>,
}

impl InMemoryQuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionBank for InMemoryQuestionBank {
    async fn load(&self) -> Result<Vec<Question>, QuestionBankError> {
        Ok(self.questions.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} questions)", self.questions.len())
    }
}

/// Pick a loader from a location string: `http(s)://` URLs are fetched,
/// anything else is read as a file path.
#[must_use]
pub fn question_bank_from_location(location: &str) -> Arc<dyn QuestionBank> {
    let trimmed = location.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Arc::new(HttpQuestionBank::new(trimmed))
    } else {
        Arc::new(FileQuestionBank::new(trimmed))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
