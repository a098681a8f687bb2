use agarathi_illustrator::{
    GenerationError, HttpIllustrator, ImageParams, PromptSettings, request_illustration,
};
use agarathi_types::{Definition, WordEntry};
use httpmock::Method::POST;
use httpmock::MockServer;

fn illustrator(server: &MockServer, key: &str) -> HttpIllustrator {
    HttpIllustrator::new(
        reqwest::Client::new(),
        key.to_string(),
        server.url("/v1/images"),
        "stable-diffusion-v1-5".to_string(),
    )
}

fn apple() -> WordEntry {
    let mut entry = WordEntry::new("apple");
    entry
        .meaning_mut("noun")
        .definitions
        .push(Definition::new("a round fruit"));
    entry
}

#[tokio::test]
async fn sends_fixed_parameters_and_returns_first_url() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/images")
                .header("authorization", "Bearer secret")
                .body_contains("\"numberResults\":1")
                .body_contains("\"outputFormat\":\"PNG\"")
                .body_contains("\"width\":512")
                .body_contains("Meaning: a round fruit");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data":[{"imageURL":"https://img.example/apple.png"}]}"#);
        })
        .await;

    let illustration = request_illustration(
        &illustrator(&server, "secret"),
        &apple(),
        &PromptSettings::default(),
        &ImageParams::default(),
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(illustration.image_url, "https://img.example/apple.png");
    assert!(illustration.prompt.contains("Word: \"apple\""));
}

#[tokio::test]
async fn empty_data_is_an_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data":[]}"#);
        })
        .await;

    let err = request_illustration(
        &illustrator(&server, "secret"),
        &apple(),
        &PromptSettings::default(),
        &ImageParams::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GenerationError::EmptyResult));
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images");
            then.status(429);
        })
        .await;

    let err = request_illustration(
        &illustrator(&server, "secret"),
        &apple(),
        &PromptSettings::default(),
        &ImageParams::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GenerationError::RateLimitExceeded));
}

#[tokio::test]
async fn missing_key_never_calls_the_provider() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images");
            then.status(200);
        })
        .await;

    let err = request_illustration(
        &illustrator(&server, ""),
        &apple(),
        &PromptSettings::default(),
        &ImageParams::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, GenerationError::AuthenticationError));
    assert_eq!(mock.hits_async().await, 0);
}
