//! # Server Endpoint Tests
//!
//! This file contains integration tests for the `vibecheck-server` endpoints,
//! including health checks and error handling for invalid input.

mod common;

use anyhow::Result;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_root_and_health_check_endpoints() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;

    // --- Test Root Endpoint ---
    let root_response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request to /");

    // Assert
    assert!(root_response.status().is_success());
    assert_eq!("vibecheck server is running.", root_response.text().await?);

    // --- Test Health Check Endpoint ---
    let health_response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request to /health");

    // Assert
    assert!(health_response.status().is_success());
    assert_eq!("OK", health_response.text().await?);

    Ok(())
}

#[tokio::test]
async fn test_moderate_malformed_json() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let upstream = app.mock_any_upstream().await;
    // This JSON is syntactically invalid (missing closing brace).
    let malformed_body = r#"{"text": "hello""#;

    // Act
    let response = app
        .client
        .post(format!("{}/moderate", app.address))
        .header("Content-Type", "application/json")
        .body(malformed_body)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await?;
    assert!(body["error"].is_string(), "body: {body}");
    assert_eq!(0, upstream.hits_async().await);

    Ok(())
}

#[tokio::test]
async fn test_moderate_without_json_body_requires_text() -> Result<()> {
    let app = TestApp::spawn().await?;
    let upstream = app.mock_any_upstream().await;
    let url = format!("{}/moderate", app.address);

    let requests = [
        // No body and no content type at all.
        app.client.post(&url),
        // An empty JSON body.
        app.client
            .post(&url)
            .header("Content-Type", "application/json"),
        // A body the server does not read as JSON.
        app.client
            .post(&url)
            .header("Content-Type", "text/plain")
            .body("hello"),
    ];

    for request in requests {
        let response = request.send().await?;

        assert_eq!(400, response.status().as_u16());
        let body: serde_json::Value = response.json().await?;
        assert_eq!(
            body,
            json!({ "error": "Text is required in the request body." })
        );
    }
    assert_eq!(0, upstream.hits_async().await);

    Ok(())
}

#[tokio::test]
async fn test_moderate_non_string_text_is_unprocessable_json() -> Result<()> {
    let app = TestApp::spawn().await?;
    let upstream = app.mock_any_upstream().await;

    for payload in [json!({ "text": 5 }), json!({ "text": ["hi"] }), json!("hi")] {
        let response = app.moderate(&payload).await;

        assert_eq!(422, response.status().as_u16(), "payload: {payload}");
        let body: serde_json::Value = response.json().await?;
        assert!(body["error"].is_string(), "payload: {payload}, body: {body}");
    }
    assert_eq!(0, upstream.hits_async().await);

    Ok(())
}

#[tokio::test]
async fn test_moderate_missing_text_field() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;

    for payload in [
        json!({}),
        json!({ "message": "hello" }),
        json!({ "text": null, "lang": "en" }),
    ] {
        // Act
        let response = app.moderate(&payload).await;

        // Assert
        assert_eq!(400, response.status().as_u16(), "payload: {payload}");
        let body: serde_json::Value = response.json().await?;
        assert_eq!(
            body,
            json!({ "error": "Text is required in the request body." })
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_get_on_moderate_is_method_not_allowed() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .get(format!("{}/moderate", app.address))
        .send()
        .await?;

    // Only POST is routed.
    assert_eq!(405, response.status().as_u16());
    Ok(())
}
