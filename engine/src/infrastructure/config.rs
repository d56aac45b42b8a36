// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Service configuration
//!
//! Read from a YAML file (every key optional, a missing file means all
//! defaults), then overridden by environment variables. Numeric variables
//! that fail to parse or are zero are ignored.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REVIEWS_PATH: &str = "data/siteReviews.json";
const DEFAULT_PREDICTIONS_PATH: &str = "data/reviews.json";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_shutdown_timeout() -> u64 {
    DEFAULT_SHUTDOWN_TIMEOUT_SECS
}

fn default_reviews_path() -> PathBuf {
    PathBuf::from(DEFAULT_REVIEWS_PATH)
}

fn default_predictions_path() -> PathBuf {
    PathBuf::from(DEFAULT_PREDICTIONS_PATH)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

fn default_max_requests() -> u32 {
    DEFAULT_RATE_LIMIT_MAX_REQUESTS
}

fn default_window_secs() -> u64 {
    DEFAULT_RATE_LIMIT_WINDOW_SECS
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logger: LoggerConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds a single request may take before a 408 is returned
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Seconds to drain in-flight requests after a shutdown signal
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_reviews_path")]
    pub reviews_path: PathBuf,
    #[serde(default = "default_predictions_path")]
    pub predictions_path: PathBuf,
    /// Load both files at startup instead of on the first request
    #[serde(default)]
    pub preload: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            reviews_path: default_reviews_path(),
            predictions_path: default_predictions_path(),
            preload: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LogFormat {
    #[default]
    Console,
    Json,
}

impl From<String> for LogFormat {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Console
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Log file appended to in addition to stdout
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            output_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per client IP within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not
    /// exist, then apply process environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(host) = var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_positive(var("SERVER_PORT")) {
            self.server.port = port;
        }
        if let Some(timeout) = parse_positive(var("SERVER_REQUEST_TIMEOUT")) {
            self.server.request_timeout = timeout;
        }
        if let Some(timeout) = parse_positive(var("SERVER_SHUTDOWN_TIMEOUT")) {
            self.server.shutdown_timeout = timeout;
        }

        if let Some(path) = var("REVIEWS_PATH") {
            self.data.reviews_path = PathBuf::from(path);
        }
        if let Some(path) = var("PREDICTIONS_PATH") {
            self.data.predictions_path = PathBuf::from(path);
        }
        if let Some(preload) = var("DATA_PRELOAD").as_deref().and_then(parse_bool) {
            self.data.preload = preload;
        }

        if let Some(level) = var("LOG_LEVEL") {
            self.logger.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logger.format = LogFormat::from(format);
        }
        if let Some(path) = var("LOG_OUTPUT_PATH") {
            self.logger.output_path = Some(PathBuf::from(path));
        }

        if let Some(origins) = var("CORS_ALLOWED_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
            if !origins.is_empty() {
                self.cors.allowed_origins = origins;
            }
        }

        if let Some(max) = parse_positive(var("RATE_LIMIT_MAX_REQUESTS")) {
            self.rate_limit.max_requests = max;
        }
        if let Some(window) = parse_positive(var("RATE_LIMIT_WINDOW_SECS")) {
            self.rate_limit.window_secs = window;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            bail!("server.host must not be empty");
        }
        if self.server.request_timeout == 0 {
            bail!("server.request_timeout must be greater than zero");
        }
        if self.rate_limit.max_requests == 0 || self.rate_limit.window_secs == 0 {
            bail!("rate_limit.max_requests and rate_limit.window_secs must be greater than zero");
        }
        if self.data.reviews_path.as_os_str().is_empty()
            || self.data.predictions_path.as_os_str().is_empty()
        {
            bail!("data.reviews_path and data.predictions_path must be set");
        }
        Ok(())
    }
}

fn parse_positive<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v != T::default())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
