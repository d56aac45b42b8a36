// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! REST API Driving Adapter
//!
//! Exposes the review queries as JSON over HTTP:
//! - `GET /api/v1/reviews`: one page of reviews, optionally filtered
//! - `GET /api/v1/analytics`: the full merged dataset
//! - `GET /health`: liveness probe

pub mod handlers;
pub mod middleware;
pub mod rate_limiter;
pub mod router;
pub mod server;

pub use router::build_router;
pub use server::{serve_on_tcp, shutdown_signal};
