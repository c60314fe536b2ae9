//! Configuration schema for sitegen.toml.

use crate::types::GenerationOptions;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Gemini API base URL.
    pub api_url: String,

    /// Gemini API key. `GEMINI_API_KEY` in the environment takes precedence.
    pub api_key: String,

    /// Model used for generation.
    pub model: String,

    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,

    /// Transport timeout for a single model request, in seconds.
    pub request_timeout_secs: u64,

    /// Where generated websites are written.
    pub output_path: String,

    /// Inject missing viewport/charset meta tags before saving.
    pub optimize: bool,

    /// Log level (debug, info, warn, error).
    pub log_level: String,

    /// Config version.
    pub version: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let sampling = GenerationOptions::default();
        Self {
            api_url: "https://generativelanguage.googleapis.com".into(),
            api_key: String::new(),
            model: "gemini-2.5-flash".into(),
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            top_k: sampling.top_k,
            max_output_tokens: sampling.max_output_tokens,
            request_timeout_secs: 300,
            output_path: "website.html".into(),
            optimize: true,
            log_level: "info".into(),
            version: 1,
        }
    }
}

impl SiteConfig {
    /// Resolve a path that may contain `~` to an absolute path.
    pub fn resolve_path(&self, path: &str) -> String {
        shellexpand::tilde(path).into_owned()
    }

    /// Resolved output file path.
    pub fn resolved_output_path(&self) -> String {
        self.resolve_path(&self.output_path)
    }

    /// Sampling parameters for the model call.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
