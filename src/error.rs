//! Failure kinds surfaced by the generation pipeline.

use thiserror::Error;

/// Every way a single generation request can fail.
///
/// None of these are retried; the caller reports the message and lets the
/// user resubmit.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The user prompt was empty or whitespace-only.
    #[error("website description cannot be empty")]
    InvalidInput,

    /// The model call succeeded but returned no usable text.
    #[error("no response received from the model")]
    EmptyResponse,

    /// The sanitized text does not start with `<!DOCTYPE html>`.
    #[error("generated content does not appear to be valid HTML (starts with {preview:?})")]
    InvalidDocument { preview: String },

    /// The model call itself failed (network, auth, quota, bad payload).
    #[error("model request failed: {0:#}")]
    Upstream(anyhow::Error),
}

impl GenerationError {
    /// Short machine-friendly name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::EmptyResponse => "empty_response",
            Self::InvalidDocument { .. } => "invalid_document",
            Self::Upstream(_) => "upstream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_includes_cause_chain() {
        let cause = anyhow::anyhow!("connection refused").context("Gemini request failed");
        let err = GenerationError::Upstream(cause);
        let msg = err.to_string();
        assert!(msg.contains("Gemini request failed"));
        assert!(msg.contains("connection refused"));
        assert_eq!(err.kind(), "upstream");
    }
}
