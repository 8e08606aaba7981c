//! Completion client behaviour against a mock completion API

use featured_snippet::generator::{ApiKey, CompletionClient, GenerationError};
use mockito::{Matcher, Server};
use serde_json::json;

mod common;
use common::*;

fn key() -> ApiKey {
    ApiKey::new("sk-test-key").unwrap()
}

#[tokio::test]
async fn test_successful_completion_is_trimmed() {
    let mut server = Server::new_async().await;
    let mock = mock_completion(&mut server, 200, r#"{"choices":[{"text":" Example answer. "}]}"#).await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    let content = client.generate("what is rust", Some(&key())).await.unwrap();

    assert_eq!(content, "Example answer.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_carries_fixed_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_header("authorization", "Bearer sk-test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "text-davinci-003",
            "prompt": "Generate an SEO-optimised answer for the following question to win a Featured Snippet:\n\nwhat is rust",
            "max_tokens": 250
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"text":"ok"}]}"#)
        .create_async()
        .await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    client.generate("what is rust", Some(&key())).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_temperature_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_body(Matcher::Regex(r#""temperature":0\.7"#.into()))
        .with_status(200)
        .with_body(r#"{"choices":[{"text":"ok"}]}"#)
        .create_async()
        .await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    client.generate("rust", Some(&key())).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .expect(0)
        .create_async()
        .await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    let err = client.generate("rust", None).await.unwrap_err();

    assert!(matches!(err, GenerationError::MissingCredential));
    assert_eq!(err.to_string(), "OpenAI API key is required.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_key_is_authentication_error() {
    let mut server = Server::new_async().await;
    let _mock = mock_completion(
        &mut server,
        401,
        r#"{"error":{"message":"Incorrect API key provided: sk-test***","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#,
    )
    .await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    let err = client.generate("rust", Some(&key())).await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.to_string(), "Invalid OpenAI API key.");
}

#[tokio::test]
async fn test_other_api_error_is_reported_verbatim() {
    let mut server = Server::new_async().await;
    let _mock = mock_completion(
        &mut server,
        429,
        r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota"}}"#,
    )
    .await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    let err = client.generate("rust", Some(&key())).await.unwrap_err();

    assert!(!err.is_authentication());
    assert_eq!(
        err.to_string(),
        "Error generating content: You exceeded your current quota"
    );
    assert!(matches!(err, GenerationError::Api { status: 429, .. }));
}

#[tokio::test]
async fn test_empty_choices() {
    let mut server = Server::new_async().await;
    let _mock = mock_completion(&mut server, 200, r#"{"choices":[]}"#).await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    let err = client.generate("rust", Some(&key())).await.unwrap_err();

    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = mock_completion(&mut server, 200, "not json").await;

    let client = CompletionClient::from_config(&test_config(&server)).unwrap();
    let err = client.generate("rust", Some(&key())).await.unwrap_err();

    assert!(matches!(err, GenerationError::Transport(_)));
}
