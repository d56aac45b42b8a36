// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Repository port for reading reviews
//! Implementations live in the infrastructure layer

use crate::domain::error::Result;
use crate::domain::{Prediction, Review, ReviewFilter};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Read-only access to the merged review dataset
///
/// Each call may trigger the initial load. `cancel` is consulted around that
/// load only; queries against already loaded data always complete.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Reviews matching `filter`, skipping `offset` and returning at most `limit`
    async fn query(
        &self,
        offset: usize,
        limit: usize,
        filter: &ReviewFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<Review>>;

    /// Number of reviews matching `filter`
    async fn count(&self, filter: &ReviewFilter, cancel: &CancellationToken) -> Result<usize>;

    /// Independent copies of every review and every prediction
    async fn all_for_analytics(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Review>, Vec<Prediction>)>;
}
