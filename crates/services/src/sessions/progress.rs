/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    /// 1-based position of the current question; `None` in exam mode or once complete.
    pub position: Option<usize>,
    pub is_complete: bool,
}

impl SessionProgress {
    /// "3 / 25" style label, or an empty string when there is no position.
    #[must_use]
    pub fn position_label(&self) -> String {
        self.position
            .map(|position| format!("{position} / {}", self.total))
            .unwrap_or_default()
    }
}
