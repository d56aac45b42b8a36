// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! TCP transport and graceful shutdown

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Serve `app` on `addr` until `shutdown` is cancelled
///
/// After cancellation in-flight requests get `drain_timeout` to finish;
/// whatever is still running then is dropped.
pub async fn serve_on_tcp(
    addr: &str,
    app: Router,
    shutdown: CancellationToken,
    drain_timeout: Duration,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("failed to read bound address")?;
    info!(address = %local_addr, "REST API server listening");

    let graceful = shutdown.clone();
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { graceful.cancelled().await });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut handle => {
            return joined.context("server task failed")?.context("server error");
        }
        () = shutdown.cancelled() => {}
    }

    info!(timeout_secs = drain_timeout.as_secs(), "Shutting down server");
    match tokio::time::timeout(drain_timeout, &mut handle).await {
        Ok(joined) => {
            joined.context("server task failed")?.context("server error")?;
            info!("Server stopped");
        }
        Err(_) => {
            handle.abort();
            warn!("Server did not drain in time, remaining connections dropped");
        }
    }
    Ok(())
}

/// Resolve on SIGINT or SIGTERM
#[cfg(unix)]
pub async fn shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate()).context("Failed to setup SIGTERM handler")?;
    let mut sigint = signal(SignalKind::interrupt()).context("Failed to setup SIGINT handler")?;

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM"),
        _ = sigint.recv() => info!("Received SIGINT"),
    }
    Ok(())
}

#[cfg(not(unix))]
pub async fn shutdown_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;
    info!("Received ctrl-c");
    Ok(())
}
