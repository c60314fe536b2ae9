//! Prompt builder.
//!
//! Layers (in order):
//! 1. System directive (output format rules)
//! 2. User request embedded in the requirements template

use crate::error::GenerationError;
use tracing::debug;

/// Fixed output-format directive. Always sent before the user text.
pub const SYSTEM_DIRECTIVE: &str = r#"You are an expert web developer and UI/UX designer. Your task is to generate beautiful, modern, and functional HTML5 websites based on user requirements.

IMPORTANT INSTRUCTIONS:
1. Generate ONLY valid HTML5 code with embedded CSS and JavaScript
2. Do NOT include any markdown, explanations, or code blocks (no ```html or backticks)
3. Start directly with <!DOCTYPE html>
4. Include comprehensive styling using <style> tags
5. Make the design modern, responsive, and visually appealing
6. Use CSS Grid or Flexbox for layouts
7. Include smooth animations and transitions
8. Ensure proper color schemes and typography
9. Add interactive elements where appropriate
10. Make it mobile-responsive with media queries
11. Include proper meta tags and structured content
12. Do NOT include external dependencies - everything must be self-contained
13. Use only modern CSS3 features
14. Include proper accessibility features
15. Output ONLY the HTML code, nothing else

Generate a complete, ready-to-use website HTML file."#;

const REQUEST_HEADER: &str = "User Request: ";

/// Requirements restated after the user text.
const REQUIREMENTS: &str = r#"Requirements:
1. Create a beautiful, modern website based on the above request
2. Generate ONLY HTML5 code with embedded CSS - no external files
3. Make it fully responsive and mobile-friendly
4. Include smooth animations and modern design principles
5. Use professional color schemes and typography
6. Ensure all content is properly structured
7. Start with <!DOCTYPE html> and include all necessary tags
8. Do NOT include any explanations or markdown - only raw HTML
9. Make it visually stunning and professional
10. Include interactive elements if appropriate

Generate the complete HTML code now:"#;

/// Build the complete prompt for one generation request.
///
/// The user prompt is embedded verbatim; only the emptiness check trims it.
pub fn build_prompt(user_prompt: &str) -> Result<String, GenerationError> {
    if user_prompt.trim().is_empty() {
        return Err(GenerationError::InvalidInput);
    }

    let mut prompt = String::with_capacity(
        SYSTEM_DIRECTIVE.len() + REQUEST_HEADER.len() + user_prompt.len() + REQUIREMENTS.len() + 8,
    );

    // Layer 1: system directive
    prompt.push_str(SYSTEM_DIRECTIVE);
    prompt.push_str("\n\n");

    // Layer 2: user request + requirements
    prompt.push_str(REQUEST_HEADER);
    prompt.push_str(user_prompt);
    prompt.push_str("\n\n");
    prompt.push_str(REQUIREMENTS);
    prompt.push('\n');

    debug!("Built prompt: {} chars", prompt.len());
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_starts_with_directive_and_contains_user_text() {
        let user = "A portfolio for a jazz drummer, dark theme, tour dates table";
        let prompt = build_prompt(user).unwrap();
        assert!(prompt.starts_with(SYSTEM_DIRECTIVE));
        assert!(prompt.contains(user));
    }

    #[test]
    fn directive_precedes_user_text() {
        let user = "ZZZ-unique-marker";
        let prompt = build_prompt(user).unwrap();
        let directive_end = SYSTEM_DIRECTIVE.len();
        let user_at = prompt.find(user).unwrap();
        assert!(user_at >= directive_end);
    }

    #[test]
    fn user_text_is_embedded_verbatim() {
        let user = "  keep   my\nspacing  \t";
        let prompt = build_prompt(user).unwrap();
        assert!(prompt.contains(user));
    }

    #[test]
    fn directive_demands_doctype_and_no_fences() {
        assert!(SYSTEM_DIRECTIVE.contains("<!DOCTYPE html>"));
        assert!(SYSTEM_DIRECTIVE.contains("no ```html or backticks"));
        assert!(SYSTEM_DIRECTIVE.contains("self-contained"));
        assert!(REQUIREMENTS.contains("10. "));
    }

    #[test]
    fn empty_or_whitespace_prompt_is_rejected() {
        for input in ["", " ", "\n\t  \r\n"] {
            assert!(matches!(
                build_prompt(input),
                Err(GenerationError::InvalidInput)
            ));
        }
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build_prompt("a blog").unwrap(), build_prompt("a blog").unwrap());
    }
}
