//! Interaction input, progress states and the resulting report

use serde::Serialize;

use crate::generator::ApiKey;

/// The two form values for one interaction
#[derive(Clone, Default)]
pub struct InteractionRequest {
    pub api_key: String,
    pub keyword: String,
}

impl InteractionRequest {
    #[must_use]
    pub fn new(api_key: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            keyword: keyword.into(),
        }
    }

    /// Both values, trimmed, or `None` if either is blank
    #[must_use]
    pub fn validate(&self) -> Option<(ApiKey, &str)> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return None;
        }
        ApiKey::new(self.api_key.as_str()).map(|key| (key, keyword))
    }
}

impl std::fmt::Debug for InteractionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionRequest")
            .field("api_key", &"****")
            .field("keyword", &self.keyword)
            .finish()
    }
}

/// Where an interaction currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    Idle,
    Fetching,
    Generating,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
    Heading,
    Content,
}

/// One line of output for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Heading, text)
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Content, text)
    }
}

/// Everything one interaction produced, in display order
#[derive(Debug, Clone, Serialize)]
pub struct InteractionReport {
    pub keyword: String,
    pub snippet: Option<String>,
    pub content: Option<String>,
    pub notices: Vec<Notice>,
    /// States visited, starting at `Idle` and ending at `Done`
    pub states: Vec<InteractionState>,
}

impl InteractionReport {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            snippet: None,
            content: None,
            notices: Vec::new(),
            states: vec![InteractionState::Idle],
        }
    }

    pub(crate) fn enter(&mut self, state: InteractionState) {
        tracing::debug!("Interaction state -> {:?}", state);
        self.states.push(state);
    }

    pub(crate) fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.states
            .last()
            .copied()
            .unwrap_or(InteractionState::Idle)
    }

    #[must_use]
    pub fn visited(&self, state: InteractionState) -> bool {
        self.states.contains(&state)
    }

    /// Notices at `level`, in order
    pub fn notices_at(&self, level: NoticeLevel) -> impl Iterator<Item = &str> {
        self.notices
            .iter()
            .filter(move |n| n.level == level)
            .map(|n| n.text.as_str())
    }
}
