use crate::routes::post_json;
use crate::support::GatewayTestServer;
use base64::Engine as _;
use enjo::config::{Backend, Config, TwitterConfig};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn vertex_config(server: &MockServer, twitter: bool) -> Config {
    let mut config = Config {
        backend: Backend::Vertex,
        ..Config::default()
    };
    config.vertex.project_id = Some("demo".into());
    config.vertex.access_token = Some("ya29.integration".into());
    config.vertex.endpoint = Some(server.uri());
    if twitter {
        config.twitter = Some(TwitterConfig {
            access_token: "user-token".into(),
            api_base: server.uri(),
            upload_base: server.uri(),
        });
    }
    config
}

async fn mount_gemini(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r":generateContent$"))
        .and(header("authorization", "Bearer ya29.integration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn rewrite_uses_two_gemini_calls() {
    let vertex = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1/projects/demo/locations/us-central1/publishers/google/models/gemini-2.5-flash:generateContent",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "generated" }] } }]
        })))
        .expect(2)
        .mount(&vertex)
        .await;

    let server = GatewayTestServer::start(vertex_config(&vertex, false)).await;
    let (status, body) = post_json(
        &server,
        "/api/generate",
        json!({ "originalText": "今日はいい天気ですね", "severity": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "rewrittenText": "generated", "explanation": "generated" })
    );
}

#[tokio::test]
async fn vertex_outage_is_bad_gateway() {
    let vertex = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend unavailable"))
        .mount(&vertex)
        .await;

    let server = GatewayTestServer::start(vertex_config(&vertex, false)).await;
    let (status, body) = post_json(&server, "/api/replies", json!({ "text": "投稿" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|msg| msg.contains("failed to generate reply"))
    );
}

#[tokio::test]
async fn image_flows_through_gemini_then_imagen() {
    let vertex = MockServer::start().await;
    mount_gemini(&vertex, "A phone on fire").await;
    Mock::given(method("POST"))
        .and(path_regex(r"imagen-3\.0-generate-001:predict$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{
                "bytesBase64Encoded": base64::engine::general_purpose::STANDARD.encode(PNG_HEADER),
                "mimeType": "image/png"
            }]
        })))
        .expect(1)
        .mount(&vertex)
        .await;

    let server = GatewayTestServer::start(vertex_config(&vertex, false)).await;
    let (status, body) = post_json(
        &server,
        "/api/image",
        json!({ "text": "炎上", "style": "REALISTIC" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["promptUsed"], "A phone on fire, photorealistic style");
    assert_eq!(body["imageUrl"], "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn tweet_without_twitter_config_is_unavailable() {
    let vertex = MockServer::start().await;
    let server = GatewayTestServer::start(vertex_config(&vertex, false)).await;
    let (status, body) = post_json(&server, "/api/tweet", json!({ "text": "hello" })).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn tweet_with_image_uploads_then_posts() {
    let vertex = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/media/upload"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "555" }
        })))
        .expect(1)
        .mount(&vertex)
        .await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "999" }
        })))
        .expect(1)
        .mount(&vertex)
        .await;

    let server = GatewayTestServer::start(vertex_config(&vertex, true)).await;
    let image_url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(PNG_HEADER)
    );
    let (status, body) = post_json(
        &server,
        "/api/tweet",
        json!({ "text": "炎上中", "imageUrl": image_url }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["tweetId"], "999");
    assert_eq!(body["tweetUrl"], "https://x.com/i/web/status/999");

    let requests = vertex
        .received_requests()
        .await
        .expect("mock server should record requests");
    let tweet = requests
        .iter()
        .find(|request| request.url.path() == "/2/tweets")
        .expect("tweet request should be recorded");
    let sent: serde_json::Value = serde_json::from_slice(&tweet.body).expect("tweet body json");
    assert_eq!(sent["media"]["media_ids"], json!(["555"]));
    assert_eq!(
        sent["text"],
        "炎上中 #炎上シミュレーター\n\n※炎上シミュレーターで生成"
    );
}

#[tokio::test]
async fn failed_upload_never_posts() {
    let vertex = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/media/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad media"))
        .mount(&vertex)
        .await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&vertex)
        .await;

    let server = GatewayTestServer::start(vertex_config(&vertex, true)).await;
    let image_url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(PNG_HEADER)
    );
    let (_, body) = post_json(
        &server,
        "/api/tweet",
        json!({ "text": "x", "imageUrl": image_url }),
    )
    .await;
    assert_eq!(body["success"], false);
    assert!(
        body["errorMessage"]
            .as_str()
            .is_some_and(|msg| msg.contains("failed to upload media"))
    );
}
