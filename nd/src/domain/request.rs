//! Generation request and document types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{Category, classify};

/// Rejected request input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,
}

/// What the caller wants back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Structured action plan
    #[default]
    Planner,
    /// Code only, no category context
    Code,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planner => write!(f, "planner"),
            Self::Code => write!(f, "code"),
        }
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planner" | "plan" => Ok(Self::Planner),
            "code" => Ok(Self::Code),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

/// A single, immutable generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    raw_text: String,
    category: Option<Category>,
}

impl GenerationRequest {
    /// Build a request; blank text is rejected
    pub fn new(raw_text: impl Into<String>, category: Option<Category>) -> Result<Self, RequestError> {
        let raw_text = raw_text.into();
        debug!(text_len = raw_text.len(), ?category, "GenerationRequest::new: called");
        if raw_text.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        Ok(Self { raw_text, category })
    }

    /// Build a request for a mode
    ///
    /// Planner requests without a category are classified from their text.
    /// Code requests never carry a category.
    pub fn for_mode(
        raw_text: impl Into<String>,
        mode: GenerationMode,
        category: Option<Category>,
    ) -> Result<Self, RequestError> {
        let raw_text = raw_text.into();
        match mode {
            GenerationMode::Planner => {
                let category = category.unwrap_or_else(|| classify(&raw_text));
                Self::new(raw_text, Some(category))
            }
            GenerationMode::Code => Self::new(raw_text, None),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The explicit category, or General
    pub fn resolved_category(&self) -> Category {
        self.category.unwrap_or_default()
    }
}

/// Where a document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    /// Text returned by the remote backend
    Remote,
    /// Rendered from a category template
    Template,
    /// Fixed-format document after a remote failure
    Fallback,
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Template => write!(f, "template"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Markdown-like document handed to the caller
///
/// The embedded request text is untrusted; render it as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    text: String,
    source: DocumentSource,
}

impl GeneratedDocument {
    pub fn new(text: impl Into<String>, source: DocumentSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> DocumentSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DocumentSource::Fallback
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
