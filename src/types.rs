//! Shared types used across the generation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// A single website description submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub user_prompt: String,
}

impl GenerationRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
        }
    }

    /// True when the prompt has content after trimming surrounding whitespace.
    pub fn is_valid(&self) -> bool {
        !self.user_prompt.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Sampling parameters
// ---------------------------------------------------------------------------

/// Sampling parameters forwarded to the model on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8000,
        }
    }
}

// ---------------------------------------------------------------------------
// Generated output
// ---------------------------------------------------------------------------

/// A sanitized HTML document that passed the DOCTYPE prefix check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub html: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedDocument {
    pub fn new(html: String, model: impl Into<String>) -> Self {
        Self {
            html,
            model: model.into(),
            generated_at: Utc::now(),
        }
    }

    /// Size of the document in bytes.
    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
