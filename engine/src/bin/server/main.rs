// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use reviews_engine::adapters::rest::{build_router, serve_on_tcp, shutdown_signal};
use reviews_engine::application::Application;
use reviews_engine::infrastructure::{Config, JsonReviewRepository, logging};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;
    let _log_guard = logging::init(&config.logger)?;

    info!(
        version = reviews_engine::SERVICE_VERSION,
        address = %config.server.address(),
        reviews_path = %config.data.reviews_path.display(),
        predictions_path = %config.data.predictions_path.display(),
        "Starting reviews backend"
    );

    let shutdown = CancellationToken::new();
    let repository = Arc::new(JsonReviewRepository::new(
        &config.data.reviews_path,
        &config.data.predictions_path,
    ));

    if config.data.preload
        && let Err(e) = repository.ensure_loaded(&shutdown).await
    {
        warn!(error = %e, "Preloading review data failed, will retry on first request");
    }

    let app = Arc::new(Application::new(repository, shutdown.clone()));
    let router = build_router(app, &config);

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!(error = %e, "Signal handling unavailable, shutting down");
        }
        signal_token.cancel();
    });

    serve_on_tcp(
        &config.server.address(),
        router,
        shutdown,
        config.server.shutdown_timeout(),
    )
    .await?;

    info!("Reviews backend stopped");
    Ok(())
}
