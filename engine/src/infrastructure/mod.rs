// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod config;
pub mod json_repository;
pub mod logging;

pub use config::{Config, CorsConfig, DataConfig, LoggerConfig, RateLimitConfig, ServerConfig};
pub use json_repository::JsonReviewRepository;
