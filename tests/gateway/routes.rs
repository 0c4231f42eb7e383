use crate::support::GatewayTestServer;
use reqwest::StatusCode;
use serde_json::{Value, json};

const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

pub async fn post_json(
    server: &GatewayTestServer,
    path: &str,
    body: Value,
) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(server.url(path))
        .json(&body)
        .send()
        .await
        .expect("request should complete");
    let status = response.status();
    let body = response.json().await.expect("response should be json");
    (status, body)
}

#[tokio::test]
async fn health_returns_fixed_status() {
    let server = GatewayTestServer::start_stub().await;
    let body: Value = reqwest::get(server.url("/health"))
        .await
        .expect("health request should complete")
        .json()
        .await
        .expect("health should be json");
    assert_eq!(body, json!({ "status": "OK" }));
}

#[tokio::test]
async fn generate_round_trip() {
    let server = GatewayTestServer::start_stub().await;
    let (status, body) = post_json(
        &server,
        "/api/generate",
        json!({ "originalText": "今日はいい天気ですね", "severity": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["rewrittenText"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body["explanation"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn generate_accepts_level_alias() {
    let server = GatewayTestServer::start_stub().await;
    let (status, _) = post_json(
        &server,
        "/api/generate",
        json!({ "originalText": "hello", "level": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn out_of_range_severity_is_bad_request() {
    let server = GatewayTestServer::start_stub().await;
    for severity in [0, 6] {
        let (status, body) = post_json(
            &server,
            "/api/generate",
            json!({ "originalText": "hello", "severity": severity }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|msg| msg.contains("severity"))
        );
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = GatewayTestServer::start_stub().await;
    let response = reqwest::Client::new()
        .post(server.url("/api/replies"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("error should be json");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|msg| msg.contains("Invalid JSON"))
    );
}

#[tokio::test]
async fn replies_cover_all_archetypes() {
    let server = GatewayTestServer::start_stub().await;
    let (status, body) = post_json(&server, "/api/replies", json!({ "text": "投稿" })).await;
    assert_eq!(status, StatusCode::OK);

    let replies = body.as_array().expect("replies should be an array");
    assert_eq!(replies.len(), 4);
    let mut types: Vec<_> = replies
        .iter()
        .map(|reply| reply["type"].as_str().unwrap_or_default().to_string())
        .collect();
    types.sort();
    assert_eq!(
        types,
        ["EXCESSIVE_DEFENSE", "LOGICAL_CRITICISM", "NITPICKING", "OFF_TARGET"]
    );
    assert!(
        replies
            .iter()
            .all(|reply| reply["id"].as_str().is_some_and(|id| !id.is_empty()))
    );
}

#[tokio::test]
async fn empty_reply_text_is_bad_request() {
    let server = GatewayTestServer::start_stub().await;
    let (status, _) = post_json(&server, "/api/replies", json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn image_then_tweet_with_image() {
    use base64::Engine as _;

    let server = GatewayTestServer::start_stub().await;
    let (status, image) = post_json(
        &server,
        "/api/image",
        json!({ "text": "炎上", "style": "MEME", "aspectRatio": "16:9" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let image_url = image["imageUrl"].as_str().expect("imageUrl should be set");
    let payload = image_url
        .strip_prefix("data:image/png;base64,")
        .expect("image should be a PNG data URL");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("payload should be base64");
    assert_eq!(bytes[..4], PNG_MAGIC);
    assert!(
        image["promptUsed"]
            .as_str()
            .is_some_and(|prompt| prompt.ends_with(", internet meme style"))
    );

    let (status, tweet) = post_json(
        &server,
        "/api/tweet",
        json!({ "text": "炎上しました", "imageUrl": image_url }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tweet["success"], true);
    assert!(
        tweet["tweetUrl"]
            .as_str()
            .is_some_and(|url| url.starts_with("https://x.com/"))
    );
}

#[tokio::test]
async fn unsupported_aspect_ratio_is_bad_request() {
    let server = GatewayTestServer::start_stub().await;
    let (status, _) = post_json(
        &server,
        "/api/image",
        json!({ "text": "炎上", "aspectRatio": "5:4" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tweet_length_is_checked_after_suffixes() {
    let server = GatewayTestServer::start_stub().await;

    let (_, exact) = post_json(
        &server,
        "/api/tweet",
        json!({
            "text": "あ".repeat(280),
            "addHashtag": false,
            "addDisclaimer": false
        }),
    )
    .await;
    assert_eq!(exact["success"], true);

    let (status, over) =
        post_json(&server, "/api/tweet", json!({ "text": "あ".repeat(280) })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(over["success"], false);
    assert!(
        over["errorMessage"]
            .as_str()
            .is_some_and(|msg| msg.contains("280"))
    );
}
