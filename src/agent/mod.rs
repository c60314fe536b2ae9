//! Website generation agent: prompt → model → sanitized document.

pub mod generator;
pub mod prompt;
pub mod sanitize;

pub use generator::Generator;

use crate::error::GenerationError;
use crate::types::{GeneratedDocument, GenerationOptions, GenerationRequest};
use tracing::{debug, info, warn};

/// Runs the single-pass generation pipeline against an injected backend.
#[derive(Debug, Clone)]
pub struct WebsiteAgent<G> {
    generator: G,
    options: GenerationOptions,
}

impl<G: Generator> WebsiteAgent<G> {
    pub fn new(generator: G, options: GenerationOptions) -> Self {
        Self { generator, options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate a validated HTML document for one website description.
    ///
    /// Any failure is final for this call; nothing is retried.
    pub async fn generate_website(
        &self,
        user_prompt: &str,
    ) -> Result<GeneratedDocument, GenerationError> {
        let request = GenerationRequest::new(user_prompt);
        if !request.is_valid() {
            return Err(GenerationError::InvalidInput);
        }

        let prompt = prompt::build_prompt(&request.user_prompt)?;

        info!(
            "Generating website with {} ({} prompt chars)",
            self.generator.model(),
            prompt.len()
        );

        let raw = self
            .generator
            .generate(&prompt, &self.options)
            .await
            .map_err(GenerationError::Upstream)?;

        let html = sanitize::sanitize_response(raw.as_deref()).map_err(|e| {
            warn!("Rejected model output ({})", e.kind());
            e
        })?;

        debug!("Generated document: {} bytes", html.len());
        Ok(GeneratedDocument::new(html, self.generator.model()))
    }

    /// Best-effort meta tag injection on a generated document.
    pub fn optimize(&self, document: GeneratedDocument) -> GeneratedDocument {
        optimize(document)
    }
}

/// Inject missing viewport/charset meta tags into a generated document.
pub fn optimize(document: GeneratedDocument) -> GeneratedDocument {
    GeneratedDocument {
        html: sanitize::optimize(&document.html),
        ..document
    }
}
