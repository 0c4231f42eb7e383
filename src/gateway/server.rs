use super::handlers::{
    handle_generate, handle_health, handle_image, handle_replies, handle_tweet,
};
use super::{AppState, MAX_BODY_SIZE};
use crate::app::backends::Backends;
use crate::config::{Config, GatewayConfig};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the HTTP gateway on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the gateway would be reachable from other machines.\n\
             Fix: use --host 127.0.0.1 (default) or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    // Names are resolved by the bind; IPv6 literals may arrive bracketed.
    let listener = tokio::net::TcpListener::bind((host.trim_matches(['[', ']']), port))
        .await
        .with_context(|| format!("bind gateway socket on {host}:{port}"))?;

    run_gateway_with_listener(host, listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let backends = Backends::from_config(&config).context("build collaborators")?;
    print_gateway_banner(&display_addr, backends.poster.is_some());

    let app = build_app(AppState::from(backends), &config.gateway);
    axum::serve(listener, app)
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str, posting_enabled: bool) {
    tracing::info!(addr = display_addr, "gateway listening");
    println!("Gateway listening on {display_addr}");
    println!("  GET  /health");
    println!("  POST /api/generate");
    println!("  POST /api/replies");
    println!("  POST /api/image");
    if posting_enabled {
        println!("  POST /api/tweet");
    } else {
        println!("  POST /api/tweet (posting disabled)");
    }
}

/// Router with every route and layer applied.
pub fn build_app(state: AppState, gateway: &GatewayConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(handle_health))
        .route("/api/generate", post(handle_generate))
        .route("/api/replies", post(handle_replies))
        .route("/api/image", post(handle_image))
        .route("/api/tweet", post(handle_tweet))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(gateway.request_timeout_secs),
        ));

    if !gateway.cors_origins.is_empty() {
        let origins: Vec<_> = gateway
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ]),
        );
    }

    app
}
