//! Text generation trait (the seam between the pipeline and a hosted model).

use crate::types::GenerationOptions;
use anyhow::Result;
use async_trait::async_trait;

/// A hosted text-completion backend.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Model identifier, recorded on generated documents.
    fn model(&self) -> &str;

    /// Send one prompt and return the raw completion text.
    ///
    /// `Ok(None)` means the call succeeded but produced no text.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<Option<String>>;
}
