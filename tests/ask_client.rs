//! AskClient against a mock backend

use lexchat::config::Config;
use lexchat::prompts::FALLBACK_RESPONSE;
use lexchat::{AskClient, RequestError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AskClient {
    let config = Config {
        server_url: server.uri(),
        ..Config::default()
    };
    AskClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_ask_posts_query_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "what is the penalty for theft?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Up to 3 years."})))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .ask("what is the penalty for theft?")
        .await
        .unwrap();

    assert_eq!(answer, "Up to 3 years.");
}

#[tokio::test]
async fn test_missing_or_empty_response_uses_fallback() {
    for body in [json!({}), json!({"response": ""}), json!({"response": null})] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let answer = client_for(&server).ask("hello").await.unwrap();
        assert_eq!(answer, FALLBACK_RESPONSE);
    }
}

#[tokio::test]
async fn test_non_json_success_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).ask("hello").await.unwrap(), FALLBACK_RESPONSE);
}

#[tokio::test]
async fn test_server_error_carries_status_and_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "bad query"})))
        .mount(&server)
        .await;

    let err = client_for(&server).ask("anything").await.unwrap_err();

    assert_eq!(
        err,
        RequestError::Server {
            status: 500,
            error: "bad query".to_string()
        }
    );
    assert_eq!(
        err.diagnostic(),
        "An error occurred. Server responded with 500: bad query"
    );
}

#[tokio::test]
async fn test_server_error_without_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let err = client_for(&server).ask("   ").await.unwrap_err();
    assert_eq!(err.diagnostic(), "An error occurred. Server responded with 400: ");
}

#[tokio::test]
async fn test_timeout_is_no_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "too late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        server_url: server.uri(),
        timeout_ms: 200,
        ..Config::default()
    };
    let err = AskClient::new(&config).unwrap().ask("slow").await.unwrap_err();

    assert_eq!(err.kind(), "no-response");
    assert_eq!(
        err.diagnostic(),
        "An error occurred. No response received from the server. Check your connection."
    );
}

#[tokio::test]
async fn test_refused_connection_is_no_response() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config {
        server_url: format!("http://{}", addr),
        ..Config::default()
    };
    let err = AskClient::new(&config).unwrap().ask("hello").await.unwrap_err();
    assert!(matches!(err, RequestError::NoResponse { .. }));
}

#[tokio::test]
async fn test_unparseable_url_is_local_error() {
    let config = Config {
        server_url: "::not a url::".to_string(),
        ..Config::default()
    };
    let err = AskClient::new(&config).unwrap().ask("hello").await.unwrap_err();
    assert!(matches!(err, RequestError::Local(_)));
    assert!(err.diagnostic().starts_with("An error occurred. "));
}

#[tokio::test]
async fn test_custom_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        server_url: server.uri(),
        endpoint: "/api/v2/ask".to_string(),
        ..Config::default()
    };
    assert_eq!(AskClient::new(&config).unwrap().ask("q").await.unwrap(), "ok");
}
