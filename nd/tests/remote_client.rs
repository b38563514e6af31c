//! Integration tests for the remote client and the plan service
//!
//! These drive the real GeminiClient against a local mock server. Backoff
//! delays are recorded instead of slept.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use neurodesk::llm::prompt::{CODE_SYSTEM, PLAN_SYSTEM};
use neurodesk::templates::FALLBACK_MARKER;
use neurodesk::{
    Category, GeminiClient, GenerationMode, GenerationRequest, PlanService, RemoteError, RetryPolicy, Sleeper,
    TextGenerator,
};

const MODEL: &str = "test-model";
const API_KEY: &str = "test-key";
const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

#[derive(Default)]
struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

fn client_for(base_url: &str) -> (GeminiClient, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = GeminiClient::new(base_url, MODEL, API_KEY)
        .expect("Failed to build client")
        .with_sleeper(sleeper.clone());
    (client, sleeper)
}

fn success_body(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}
        ]
    })
}

fn secs(values: &[u64]) -> Vec<Duration> {
    values.iter().map(|s| Duration::from_secs(*s)).collect()
}

// =============================================================================
// Retry policy
// =============================================================================

#[tokio::test]
async fn test_rate_limited_four_times_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(4)
        .expect(4)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("# Europe on a budget")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, sleeper) = client_for(&server.uri());
    let text = client
        .request_remote("Plan a 7-day budget trip to Europe", Category::Travel)
        .await
        .expect("fifth attempt should succeed");

    assert_eq!(text, "# Europe on a budget");
    assert_eq!(sleeper.delays(), secs(&[1, 2, 4, 8]));
    assert_eq!(sleeper.delays().iter().sum::<Duration>(), Duration::from_secs(15));
}

#[tokio::test]
async fn test_always_rate_limited_exhausts_after_five_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429))
        .expect(10)
        .mount(&server)
        .await;

    let (client, sleeper) = client_for(&server.uri());
    let err = client
        .request_remote("Plan a 7-day budget trip to Europe", Category::Travel)
        .await
        .unwrap_err();

    match err {
        RemoteError::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 5);
            assert!(last.is_rate_limit());
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(sleeper.delays(), secs(&[1, 2, 4, 8]));

    // Through the facade the same backend yields the fallback document
    let (client, _) = client_for(&server.uri());
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::new("Plan a 7-day budget trip to Europe", Some(Category::Travel)).unwrap();
    let doc = service.generate(&request).await;

    assert!(doc.is_fallback());
    assert!(doc.as_str().contains("Plan a 7-day budget trip to Europe"));
    assert!(doc.as_str().contains(FALLBACK_MARKER));
    assert_eq!(service.metrics().fallback_kinds.get("retries_exhausted"), Some(&1));
}

#[tokio::test]
async fn test_custom_policy_limits_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&server)
        .await;

    let (client, sleeper) = client_for(&server.uri());
    let client = client.with_policy(RetryPolicy::new(2, Duration::from_millis(500)));
    let err = client.request_remote("anything", Category::General).await.unwrap_err();

    match err {
        RemoteError::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 2);
            assert!(last.is_rate_limit());
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(sleeper.delays(), vec![Duration::from_millis(500)]);
}

#[tokio::test]
async fn test_bad_request_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": {"message": "bad"}})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, sleeper) = client_for(&server.uri());
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::new("Organize my garage", None).unwrap();
    let doc = service.generate(&request).await;

    assert!(doc.is_fallback());
    assert!(doc.as_str().contains("**Objective:** Organize my garage"));
    assert!(doc.as_str().contains("**Category:** General"));
    assert!(sleeper.delays().is_empty());
    assert_eq!(service.metrics().fallback_kinds.get("http"), Some(&1));
}

#[tokio::test]
async fn test_server_error_is_terminal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, sleeper) = client_for(&server.uri());
    let err = client.request_remote("anything", Category::General).await.unwrap_err();

    match err {
        RemoteError::Http { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "overloaded");
        }
        other => panic!("expected Http, got {:?}", other),
    }
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_retried_then_exhausted() {
    // Grab a free port, then close it so connections are refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (client, sleeper) = client_for(&format!("http://{}", addr));
    let err = client.request_remote("anything", Category::General).await.unwrap_err();

    match err {
        RemoteError::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 5);
            assert_eq!(last.kind(), "transport");
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(sleeper.delays(), secs(&[1, 2, 4, 8]));
}

// =============================================================================
// Response parsing
// =============================================================================

#[tokio::test]
async fn test_empty_candidates_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, sleeper) = client_for(&server.uri());
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::new("Create a plan to improve work-life balance", None).unwrap();
    let doc = service.generate(&request).await;

    assert!(doc.is_fallback());
    assert!(!doc.is_empty());
    assert!(doc.as_str().contains("Create a plan to improve work-life balance"));
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let err = client.request_remote("anything", Category::General).await.unwrap_err();
    assert!(matches!(err, RemoteError::MalformedResponse(_)));
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn test_request_carries_key_header_and_planning_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("# Plan")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::new("Create a business strategy for launching a new product", Some(Category::Business))
        .unwrap();
    let doc = service.generate(&request).await;
    assert_eq!(doc.as_str(), "# Plan");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].url.query().is_none(), "API key must not travel in the URL");

    let body: Value = received[0].body_json().unwrap();
    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["role"], "user");
    let text = contents[0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.starts_with(PLAN_SYSTEM));
    assert!(text.contains("\"Create a business strategy for launching a new product\""));
    assert!(text.contains("The category for this plan is: \"Business Strategy\"."));
}

#[tokio::test]
async fn test_planner_request_sends_inferred_category() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("# Plan")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::for_mode("improve my health", GenerationMode::Planner, None).unwrap();
    let doc = service.generate(&request).await;
    assert_eq!(doc.as_str(), "# Plan");

    let received = server.received_requests().await.unwrap();
    let body: Value = received[0].body_json().unwrap();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("The category for this plan is: \"Health & Fitness\"."));
}

#[tokio::test]
async fn test_code_request_sends_code_instruction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(
            "```java\nfor (int i = 1; i <= 10; i++) System.out.println(i);\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let text = client
        .request_remote("Give me Java code to print 1 to 10", Category::General)
        .await
        .unwrap();
    assert!(text.starts_with("```java"));

    let received = server.received_requests().await.unwrap();
    let body: Value = received[0].body_json().unwrap();
    let sent = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert_eq!(sent, format!("{}\nGive me Java code to print 1 to 10", CODE_SYSTEM));
}

// =============================================================================
// Cancellation
// =============================================================================

#[tokio::test]
async fn test_cancel_abandons_slow_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body("too late"))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::new("anything", None).unwrap();

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        service.generate_until(&request, tokio::time::sleep(Duration::from_millis(100))),
    )
    .await
    .expect("cancellation should resolve promptly");

    assert!(result.is_none());
    assert_eq!(service.metrics().cancelled, 1);
}

#[tokio::test]
async fn test_cancel_during_backoff_stops_retrying() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    // Real timer: the first backoff is far longer than the cancel delay
    let client = GeminiClient::new(server.uri(), MODEL, API_KEY)
        .unwrap()
        .with_policy(RetryPolicy::new(5, Duration::from_secs(60)));
    let service = PlanService::new(Arc::new(client));
    let request = GenerationRequest::new("anything", None).unwrap();

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        service.generate_until(&request, tokio::time::sleep(Duration::from_millis(200))),
    )
    .await
    .expect("cancellation should interrupt the backoff sleep");

    assert!(result.is_none());
    assert_eq!(service.metrics().cancelled, 1);
    assert_eq!(service.metrics().fallbacks, 0);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
