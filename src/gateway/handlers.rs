use crate::error::EnjoError;
use crate::media::decode_data_url;
use crate::publish::TweetOptions;
use crate::simulator::{GenerationRequest, ImageRequest};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::{AppState, HEALTH_STATUS, TextBody, TweetBody, TweetResponse};

pub(super) fn status_for(error: &EnjoError) -> StatusCode {
    match error {
        EnjoError::InvalidArgument(_) | EnjoError::Validation(_) => StatusCode::BAD_REQUEST,
        EnjoError::GenerationFailed { .. }
        | EnjoError::PromptGenerationFailed(_)
        | EnjoError::ImageGenerationFailed(_)
        | EnjoError::MediaUploadFailed(_)
        | EnjoError::PublishFailed(_) => StatusCode::BAD_GATEWAY,
        EnjoError::PublishingDisabled => StatusCode::SERVICE_UNAVAILABLE,
        EnjoError::Config(_) | EnjoError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(super) fn error_response(error: &EnjoError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %error, "request failed");
    } else {
        tracing::debug!(status = status.as_u16(), error = %error, "request rejected");
    }
    let body = serde_json::json!({ "error": error.to_string() });
    (status, Json(body)).into_response()
}

fn rejection_response(rejection: &JsonRejection) -> Response {
    let body = serde_json::json!({ "error": format!("Invalid JSON: {}", rejection.body_text()) });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// GET /health
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": HEALTH_STATUS }))
}

/// `POST /api/generate`: rewrite and explain
pub(super) async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    match state
        .simulator
        .rewrite_and_explain(&request.original_text, request.severity)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(&error),
    }
}

/// `POST /api/replies`: four typed replies
pub(super) async fn handle_replies(
    State(state): State<AppState>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    match state.simulator.generate_replies(&request.text).await {
        Ok(replies) => (StatusCode::OK, Json(replies)).into_response(),
        Err(error) => error_response(&error),
    }
}

/// `POST /api/image`: image prompt plus rendered PNG
pub(super) async fn handle_image(
    State(state): State<AppState>,
    body: Result<Json<ImageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    match state.simulator.generate_image(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(&error),
    }
}

/// `POST /api/tweet`: publish, optionally with a `data:` URL image
///
/// Publishing outcomes are reported in the body (`success: false` with an
/// `errorMessage`); only a malformed request is an HTTP error.
pub(super) async fn handle_tweet(
    State(state): State<AppState>,
    body: Result<Json<TweetBody>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(&rejection),
    };

    let image = match request.image_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => match decode_data_url(url) {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                return error_response(&EnjoError::invalid(format!("imageUrl: {error}")));
            }
        },
        None => None,
    };

    let Some(poster) = state.poster.as_ref() else {
        let error = EnjoError::PublishingDisabled;
        return (
            status_for(&error),
            Json(TweetResponse::failed(error.to_string())),
        )
            .into_response();
    };

    let options = TweetOptions {
        add_hashtag: request.add_hashtag,
        add_disclaimer: request.add_disclaimer,
    };
    let outcome = match image {
        Some(bytes) => {
            poster
                .post_tweet_with_image(&request.text, &bytes, options)
                .await
        }
        None => poster.post_tweet(&request.text, options).await,
    };

    let response = match outcome {
        Ok(result) => TweetResponse {
            success: true,
            tweet_id: Some(result.id),
            tweet_url: Some(result.url),
            error_message: None,
        },
        Err(error) => {
            tracing::warn!(error = %error, "tweet not posted");
            TweetResponse::failed(error.to_string())
        }
    };
    (StatusCode::OK, Json(response)).into_response()
}
