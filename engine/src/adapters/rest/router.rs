// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! REST API router configuration

use super::handlers::{AppState, get_analytics, get_reviews, health, not_found};
use super::middleware::{handle_panic, log_requests, rate_limit, request_timeout};
use super::rate_limiter::RateLimiter;
use crate::infrastructure::{Config, CorsConfig};
use axum::http::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS,
};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::CompressionLevel;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::warn;

const CORS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Build the REST API router with its middleware stack
pub fn build_router(state: AppState, config: &Config) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/api/v1/reviews", get(get_reviews))
        .route("/api/v1/analytics", get(get_analytics))
        .fallback(not_found)
        .with_state(state);
    with_middleware(routes, config)
}

/// Wrap `routes` in the service middleware
///
/// Layers run outermost first: security headers, panic recovery, CORS,
/// compression, rate limiting, access log, request timeout.
fn with_middleware(routes: Router, config: &Config) -> Router {
    let limiter = Arc::new(RateLimiter::new(&config.rate_limit));

    routes
        .layer(middleware::from_fn_with_state(
            config.server.request_timeout(),
            request_timeout,
        ))
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn_with_state(limiter, rate_limit))
        .layer(CompressionLayer::new().quality(CompressionLevel::Fastest))
        .layer(cors_layer(&config.cors))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            // Wildcards cannot be combined with credentials
            if origin == "*" {
                warn!("Ignoring wildcard CORS origin");
                return None;
            }
            HeaderValue::from_str(origin)
                .inspect_err(|e| warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            ORIGIN,
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
