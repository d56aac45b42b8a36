// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! REST API handlers using axum

use crate::application::Application;
use crate::domain::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::domain::{AnalyticsData, PaginatedReviews, QueryError, ReviewsQuery};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{debug, error, warn};

/// Shared application state
pub type AppState = Arc<Application>;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Error body returned for every non-2xx response produced by this service
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub fn error_response(status: StatusCode, error: &str, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        }),
    )
}

/// Map a query failure to a response without leaking its cause
fn query_error_response(err: &QueryError, message: &str) -> ApiError {
    if err.is_cancelled() {
        warn!(error = %err, "Request cancelled by shutdown");
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "service_unavailable",
            "Server is shutting down",
        );
    }
    error!(error = %err, "Request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
}

/// Query string of `GET /api/v1/reviews`
///
/// Kept as raw strings: a missing or empty number takes its default, a
/// malformed one reads as 0 and is then normalized by the use case. When a
/// key is repeated the first value is used.
#[derive(Debug, Default)]
pub struct ReviewsParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub topic: Option<String>,
    pub sentiment: Option<String>,
}

impl ReviewsParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "topic" => &mut params.topic,
                "sentiment" => &mut params.sentiment,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn into_query(self) -> ReviewsQuery {
        ReviewsQuery {
            page: parse_number(self.page.as_deref(), DEFAULT_PAGE),
            limit: parse_number(self.limit.as_deref(), DEFAULT_LIMIT),
            topic: self.topic,
            sentiment: self.sentiment,
        }
    }
}

fn parse_number(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or(0),
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub version: &'static str,
}

// ===== Handlers =====

/// GET /api/v1/reviews - One page of reviews
pub async fn get_reviews(
    State(app): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PaginatedReviews>, ApiError> {
    let query = ReviewsParams::from_pairs(pairs).into_query();
    debug!(?query, "REST Get reviews request");

    let result = app
        .get_paginated_reviews()
        .execute(query, app.shutdown_token())
        .await
        .map_err(|e| query_error_response(&e, "Failed to get reviews"))?;

    Ok(Json(result))
}

/// GET /api/v1/analytics - Every review and prediction
pub async fn get_analytics(State(app): State<AppState>) -> Result<Json<AnalyticsData>, ApiError> {
    debug!("REST Get analytics request");

    let result = app
        .get_analytics_data()
        .execute(app.shutdown_token())
        .await
        .map_err(|e| query_error_response(&e, "Failed to get analytics data"))?;

    Ok(Json(result))
}

/// GET /health
pub async fn health(State(app): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: OffsetDateTime::now_utc(),
        version: app.version(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    error_response(StatusCode::NOT_FOUND, "not_found", "Route not found")
}
