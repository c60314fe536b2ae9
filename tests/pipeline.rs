use std::io::Cursor;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sitegen::agent::{self, Generator, WebsiteAgent};
use sitegen::gemini::GeminiClient;
use sitegen::state::Session;
use sitegen::studio::run_studio;
use sitegen::{GenerationError, GenerationOptions};
use tempfile::TempDir;

const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

async fn agent_replying(
    server: &mut mockito::ServerGuard,
    text: &str,
) -> (WebsiteAgent<GeminiClient>, mockito::Mock) {
    let mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(text))
        .create_async()
        .await;
    let client = GeminiClient::new(
        &server.url(),
        "test-key",
        "gemini-2.5-flash",
        Duration::from_secs(5),
    )
    .unwrap();
    (WebsiteAgent::new(client, GenerationOptions::default()), mock)
}

#[tokio::test]
async fn fenced_gemini_reply_is_sanitized_and_optimized() {
    let mut server = mockito::Server::new_async().await;
    let (agent, _mock) = agent_replying(
        &mut server,
        "```html\n<!DOCTYPE html>\n<html><head><title>Bakery</title></head><body></body></html>\n```",
    )
    .await;

    let doc = agent.generate_website("a bakery homepage").await.unwrap();
    assert!(doc.html.starts_with("<!DOCTYPE html>"));
    assert!(doc.html.ends_with("</html>"));
    assert_eq!(doc.model, "gemini-2.5-flash");

    let optimized = agent::optimize(doc);
    assert!(optimized.html.contains(
        "<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"><title>Bakery</title>"
    ));
}

#[tokio::test]
async fn chatty_reply_without_doctype_fails() {
    let mut server = mockito::Server::new_async().await;
    let (agent, _mock) = agent_replying(&mut server, "Here is your site: <html>...</html>").await;

    let err = agent.generate_website("a bakery homepage").await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidDocument { .. }));
}

#[tokio::test]
async fn whitespace_reply_is_empty_response() {
    let mut server = mockito::Server::new_async().await;
    let (agent, _mock) = agent_replying(&mut server, "  \n\n ").await;

    let err = agent.generate_website("a bakery homepage").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn server_error_is_upstream_and_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("overloaded")
        .expect(1)
        .create_async()
        .await;
    let client =
        GeminiClient::new(&server.url(), "k", "gemini-2.5-flash", Duration::from_secs(5)).unwrap();
    let agent = WebsiteAgent::new(client, GenerationOptions::default());

    let err = agent.generate_website("anything").await.unwrap_err();
    assert!(matches!(err, GenerationError::Upstream(_)));
    assert!(err.to_string().contains("503"));
    mock.assert_async().await;
}

/// Backend that answers with a fixed document, or an error for "fail".
struct Canned;

#[async_trait]
impl Generator for Canned {
    fn model(&self) -> &str {
        "canned"
    }

    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<Option<String>> {
        if prompt.contains("User Request: fail") {
            anyhow::bail!("backend down");
        }
        Ok(Some("<!DOCTYPE html><head></head><body>hi</body>".to_string()))
    }
}

#[tokio::test]
async fn studio_generates_saves_and_survives_errors() {
    let dir = TempDir::new().unwrap();
    let default_out = dir.path().join("website.html");
    let custom_out = dir.path().join("sub").join("other.html");

    let script = format!(
        "fail\n:save\na portfolio site\n:save\n:save {}\n:new\n:show\n:quit\nnever reached\n",
        custom_out.display()
    );
    let agent = WebsiteAgent::new(Canned, GenerationOptions::default());
    let mut session = Session::new();

    run_studio(&agent, &mut session, &mut Cursor::new(script), &default_out, true)
        .await
        .unwrap();

    let saved = std::fs::read_to_string(&default_out).unwrap();
    assert!(saved.starts_with("<!DOCTYPE html><head>\n    <meta charset=\"UTF-8\">"));
    assert_eq!(std::fs::read_to_string(&custom_out).unwrap(), saved);
    assert!(session.current().is_none());
}

#[tokio::test]
async fn studio_without_optimize_saves_raw_document() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("website.html");
    let agent = WebsiteAgent::new(Canned, GenerationOptions::default());
    let mut session = Session::new();

    run_studio(&agent, &mut session, &mut Cursor::new("shop\n:save\n"), &out, false)
        .await
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "<!DOCTYPE html><head></head><body>hi</body>"
    );
    assert!(session.current().is_some());
}
