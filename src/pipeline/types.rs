use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque archive item identifier, one per input line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Useful,
    NotUseful,
    /// Network, status, read or decode failure
    FetchError,
    /// The archive answered with its "no cover" placeholder
    PlaceholderNotFound,
}

/// Outcome of a classifier on one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub useful: bool,
    /// Strategy-specific scalar the threshold was applied to
    pub score: f64,
    /// Formatted values shown in the report's diagnostics column
    pub diagnostics: Vec<String>,
}

impl Classification {
    pub fn decision(&self) -> Decision {
        if self.useful {
            Decision::Useful
        } else {
            Decision::NotUseful
        }
    }
}

/// What happened to one identifier; exactly one per input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub identifier: Identifier,
    pub decision: Decision,
    pub score: Option<f64>,
    pub diagnostics: Vec<String>,
}

impl ClassificationResult {
    pub fn classified(identifier: Identifier, classification: Classification) -> Self {
        Self {
            identifier,
            decision: classification.decision(),
            score: Some(classification.score),
            diagnostics: classification.diagnostics,
        }
    }

    pub fn placeholder(identifier: Identifier) -> Self {
        Self {
            identifier,
            decision: Decision::PlaceholderNotFound,
            score: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn fetch_error(identifier: Identifier) -> Self {
        Self {
            identifier,
            decision: Decision::FetchError,
            score: None,
            diagnostics: Vec::new(),
        }
    }
}
