//! Common types for the launchpad-agent crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// What a generation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// Short promotional pitch for a token
    Pitch,
    /// One-sentence summary of chat sentiment
    Sentiment,
}

impl GenerationKind {
    /// Fixed text used in place of a generated one.
    pub fn fallback(self, reason: &FallbackReason) -> &'static str {
        match (self, reason.is_failure()) {
            (GenerationKind::Pitch, false) => "This token changes everything. Again.",
            (GenerationKind::Pitch, true) => "The future of finance is here. Trust the process.",
            (GenerationKind::Sentiment, false) => "Market sentiment is volatile.",
            (GenerationKind::Sentiment, true) => "Analysis unavailable.",
        }
    }
}

/// Why a fallback was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Nothing to send to the backend
    EmptyInput,
    /// Backend answered with no text
    EmptyResponse,
    /// Backend did not answer in time
    Timeout,
    /// Backend or transport failed
    BackendError(String),
}

impl FallbackReason {
    /// Timeouts and errors use the failure text; empty results use the
    /// empty-response text.
    pub fn is_failure(&self) -> bool {
        matches!(self, FallbackReason::Timeout | FallbackReason::BackendError(_))
    }
}

/// Where generated text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum GenerationOrigin {
    /// Produced by the backend
    Backend { model: String },
    /// Fixed fallback text
    Fallback { reason: FallbackReason },
}

/// Text ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Generated {
    pub kind: GenerationKind,
    pub text: String,
    pub origin: GenerationOrigin,
    /// Wall time spent, including a timed-out wait
    pub elapsed_ms: u64,
    pub generated_at: DateTime<Utc>,
}

impl Generated {
    /// Text produced by a backend.
    pub fn from_backend(kind: GenerationKind, text: impl Into<String>, model: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            kind,
            text: text.into(),
            origin: GenerationOrigin::Backend { model: model.into() },
            elapsed_ms,
            generated_at: Utc::now(),
        }
    }

    /// Fallback text for `kind`.
    pub fn fallback(kind: GenerationKind, reason: FallbackReason, elapsed_ms: u64) -> Self {
        Self {
            kind,
            text: kind.fallback(&reason).to_string(),
            origin: GenerationOrigin::Fallback { reason },
            elapsed_ms,
            generated_at: Utc::now(),
        }
    }

    /// Whether this is fallback text.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, GenerationOrigin::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_texts() {
        assert_eq!(
            Generated::fallback(GenerationKind::Pitch, FallbackReason::EmptyResponse, 0).text,
            "This token changes everything. Again."
        );
        assert_eq!(
            Generated::fallback(GenerationKind::Pitch, FallbackReason::Timeout, 0).text,
            "The future of finance is here. Trust the process."
        );
        assert_eq!(
            Generated::fallback(GenerationKind::Sentiment, FallbackReason::EmptyInput, 0).text,
            "Market sentiment is volatile."
        );
        assert_eq!(
            Generated::fallback(
                GenerationKind::Sentiment,
                FallbackReason::BackendError("boom".to_string()),
                0
            )
            .text,
            "Analysis unavailable."
        );
    }

    #[test]
    fn test_origin_serde() {
        let origin = GenerationOrigin::Fallback {
            reason: FallbackReason::Timeout,
        };
        let json = serde_json::to_value(&origin).unwrap();
        assert_eq!(json["origin"], "fallback");
        assert_eq!(json["reason"]["reason"], "timeout");
    }
}
