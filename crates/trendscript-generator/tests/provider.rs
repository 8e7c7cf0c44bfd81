//! Integration tests for `OpenAiProvider` and the generation pipeline using
//! wiremock HTTP mocks.

use std::time::Duration;

use chrono::Utc;
use trendscript_core::{GenerationRequest, Platform, TrendEngagement, TrendRecord};
use trendscript_generator::{
    ContentGenerator, GenerationCall, GenerationProvider, GeneratorError, GeneratorSettings,
    OpenAiProvider,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_provider(base_url: &str) -> OpenAiProvider {
    OpenAiProvider::new("sk-test", base_url).expect("provider construction should not fail")
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

fn call<'a>() -> GenerationCall<'a> {
    GenerationCall {
        system_instruction: "You are a tester.",
        user_prompt: "Say hi.",
        model: "gpt-4o",
        max_tokens: 64,
    }
}

fn trend() -> TrendRecord {
    TrendRecord {
        id: "trend-42".to_string(),
        topic: "Micro-SaaS Success Stories".to_string(),
        platform: Platform::Youtube,
        category: "Business".to_string(),
        content_score: 92,
        trend_velocity: "Rising Fast".to_string(),
        hashtags: vec!["#Micro".to_string(), "#Success".to_string()],
        key_insights: vec!["Solo founders are shipping faster".to_string()],
        suggested_angles: vec!["Case studies".to_string()],
        engagement: TrendEngagement::default(),
        timeframe: "4h ago".to_string(),
        created_at: Utc::now(),
    }
}

fn request() -> GenerationRequest {
    GenerationRequest {
        trend_id: "trend-42".to_string(),
        template_id: "blog-post".to_string(),
        tone: "casual".to_string(),
        custom_prompt: None,
        session_id: None,
    }
}

#[tokio::test]
async fn generate_returns_completion_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o",
            "max_tokens": 64,
            "messages": [
                { "role": "system", "content": "You are a tester." },
                { "role": "user", "content": "Say hi." }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("hi")))
        .expect(1)
        .mount(&server)
        .await;

    let text = test_provider(&server.uri())
        .generate(&call())
        .await
        .expect("completion");
    assert_eq!(text, "hi");
}

#[tokio::test]
async fn generate_maps_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = test_provider(&server.uri())
        .generate(&call())
        .await
        .unwrap_err();
    match err {
        GeneratorError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_reports_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let err = test_provider(&server.uri())
        .generate(&call())
        .await
        .unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyCompletion));
}

#[tokio::test]
async fn generate_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_provider(&server.uri())
        .generate(&call())
        .await
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Deserialize { .. }));
}

#[tokio::test]
async fn pipeline_parses_fenced_model_output() {
    let server = MockServer::start().await;
    let content = "Here is your script:\n```json\n{\"title\": \"How Micro-SaaS Founders Win\", \"hook\": \"One person, one product.\", \"outline\": [{\"section\": \"Intro\", \"duration\": \"0:00 - 1:00\", \"content\": [\"Why small wins\"]}], \"difficulty\": \"Advanced\"}\n```";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
        .mount(&server)
        .await;

    let generator = ContentGenerator::new(test_provider(&server.uri()), GeneratorSettings::default());
    let doc = generator
        .generate_content_script(&trend(), &request(), "anonymous_user")
        .await
        .expect("document");

    assert_eq!(doc.title, "How Micro-SaaS Founders Win");
    assert_eq!(doc.hook, "One person, one product.");
    assert_eq!(doc.outline[0].content, vec!["Why small wins"]);
    assert_eq!(doc.difficulty, "Advanced");
    assert_eq!(doc.estimated_views, "1K - 5K");
    assert_eq!(doc.session_id, "content_gen_trend-42_blog-post");
}

#[tokio::test]
async fn pipeline_falls_back_on_prose_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("Sorry, I can only answer in prose today.")),
        )
        .mount(&server)
        .await;

    let generator = ContentGenerator::new(test_provider(&server.uri()), GeneratorSettings::default());
    let doc = generator
        .generate_content_script(&trend(), &request(), "anonymous_user")
        .await
        .expect("document");

    assert_eq!(doc.title, "Content Script: Micro-SaaS Success Stories");
    assert_eq!(doc.seo_keywords, vec!["#Micro", "#Success", "trending", "content"]);
    assert_eq!(doc.outline.len(), 3);
}

#[tokio::test]
async fn pipeline_times_out_slow_provider() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("{}"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let generator = ContentGenerator::new(
        test_provider(&server.uri()),
        GeneratorSettings {
            timeout: Duration::from_millis(100),
            fallback_on_timeout: false,
            ..GeneratorSettings::default()
        },
    );
    let err = generator
        .generate_content_script(&trend(), &request(), "anonymous_user")
        .await
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Timeout { .. }));
}
