//! sitegen — AI website builder.
//!
//! Turns a plain-language description into a single self-contained HTML page
//! by prompting a hosted Gemini model and sanitizing what comes back.

pub mod agent;
pub mod config;
pub mod error;
pub mod gemini;
pub mod setup;
pub mod state;
pub mod studio;
pub mod types;

pub use agent::{Generator, WebsiteAgent};
pub use error::GenerationError;
pub use types::{GeneratedDocument, GenerationOptions, GenerationRequest};
