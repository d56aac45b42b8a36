// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Tracing subscriber setup

use super::config::{LogFormat, LoggerConfig};
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Map a configured level name to a filter, defaulting to INFO
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" | "critical" | "fatal" | "panic" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` directives, when set, refine the configured level. The returned
/// guard flushes the log file and must be held until shutdown.
pub fn init(config: &LoggerConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(&config.level).into())
        .from_env_lossy();

    let (writer, guard) = match config.output_path.as_deref() {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let (file_writer, guard) = tracing_appender::non_blocking(file);
            (
                BoxMakeWriter::new(std::io::stdout.and(file_writer)),
                Some(guard),
            )
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Console => builder.try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
