//! Response sanitizer: turns raw model text into a validated HTML document.
//!
//! Pipeline: empty check → trim → strip one leading/trailing fence → DOCTYPE check.
//! `optimize` is a separate best-effort pass over an already validated document.

use crate::error::GenerationError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const DOCTYPE_PREFIX: &[u8] = b"<!doctype html>";

const VIEWPORT_PROBE: &str = "<meta name=\"viewport\"";
const VIEWPORT_TAG: &str =
    "\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">";
const CHARSET_PROBE: &str = "<meta charset";
const CHARSET_TAG: &str = "\n    <meta charset=\"UTF-8\">";
const HEAD_OPEN: &str = "<head>";

/// Opening fence, optionally tagged `html` in any case, only at the very start.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static LEADING_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\A```(?:html)?\s*").unwrap());

/// Closing fence, only at the very end.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static TRAILING_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```\z").unwrap());

/// Run the strict part of the pipeline over a raw model response.
pub fn sanitize_response(raw: Option<&str>) -> Result<String, GenerationError> {
    let trimmed = match raw.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(GenerationError::EmptyResponse),
    };

    let html = strip_fences(trimmed);
    validate_doctype(&html)?;

    debug!("Sanitized response: {} -> {} bytes", trimmed.len(), html.len());
    Ok(html)
}

/// Remove a single leading and a single trailing code fence.
///
/// Interior fence-like text is left untouched.
pub fn strip_fences(text: &str) -> String {
    let without_open = LEADING_FENCE_RE.replace(text, "");
    TRAILING_FENCE_RE.replace(&without_open, "").into_owned()
}

/// Check that the text opens with `<!doctype html>`, ignoring case and leading whitespace.
pub fn validate_doctype(text: &str) -> Result<(), GenerationError> {
    let body = text.trim_start().as_bytes();
    let ok = body.len() >= DOCTYPE_PREFIX.len()
        && body[..DOCTYPE_PREFIX.len()].eq_ignore_ascii_case(DOCTYPE_PREFIX);
    if ok {
        Ok(())
    } else {
        Err(GenerationError::InvalidDocument {
            preview: preview(text),
        })
    }
}

/// Inject missing viewport and charset meta tags right after the first `<head>`.
///
/// Never fails: without a `<head>` tag the input comes back unchanged.
pub fn optimize(html: &str) -> String {
    let mut out = html.to_string();

    if !out.contains(VIEWPORT_PROBE) {
        out = inject_after_head(&out, VIEWPORT_TAG);
    }
    if !out.contains(CHARSET_PROBE) {
        out = inject_after_head(&out, CHARSET_TAG);
    }

    out
}

fn inject_after_head(html: &str, tag: &str) -> String {
    match html.find(HEAD_OPEN) {
        Some(at) => {
            let split = at + HEAD_OPEN.len();
            let mut out = String::with_capacity(html.len() + tag.len());
            out.push_str(&html[..split]);
            out.push_str(tag);
            out.push_str(&html[split..]);
            out
        }
        None => {
            debug!("No <head> tag found, skipping meta injection");
            html.to_string()
        }
    }
}

/// First few characters of rejected output, for the error message.
fn preview(text: &str) -> String {
    text.trim_start().chars().take(40).collect()
}
