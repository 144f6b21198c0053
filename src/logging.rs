use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::middleware::error_handling::HandledFailure;

/// Records one line per request with its outcome.
///
/// Failures are already logged at `error` by the boundary, so a failed
/// request is only summarised here at `warn`, tagged with the failure kind
/// the boundary left on the response.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = uuid::Uuid::new_v4();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    let failure = response.extensions().get::<HandledFailure>().map(|f| f.0);

    if response.status().is_client_error() || response.status().is_server_error() {
        warn!(
            %request_id,
            %method,
            %path,
            status,
            latency_ms,
            failure = failure.unwrap_or("rejected"),
            "Request failed"
        );
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` (default `info`) applies to
/// this crate with noisy dependencies held at `warn`. `LOG_FORMAT=json`
/// switches to JSON lines.
pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http=warn,hyper=warn",
            env!("CARGO_CRATE_NAME"),
            log_level
        ))
    });

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init();
    }
}
