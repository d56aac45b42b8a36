// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! GetAnalyticsData use case

use crate::domain::ports::ReviewRepository;
use crate::domain::{AnalyticsData, QueryError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[async_trait]
pub trait GetAnalyticsData: Send + Sync {
    async fn execute(&self, cancel: &CancellationToken) -> Result<AnalyticsData, QueryError>;
}

pub struct GetAnalyticsDataUseCase {
    repository: Arc<dyn ReviewRepository>,
}

impl GetAnalyticsDataUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetAnalyticsData for GetAnalyticsDataUseCase {
    async fn execute(&self, cancel: &CancellationToken) -> Result<AnalyticsData, QueryError> {
        info!("Getting analytics data");

        let (reviews, predictions) = self
            .repository
            .all_for_analytics(cancel)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to get analytics data");
                QueryError::Analytics(e)
            })?;

        info!(
            total_reviews = reviews.len(),
            total_predictions = predictions.len(),
            "Successfully retrieved analytics data"
        );

        Ok(AnalyticsData {
            reviews,
            predictions,
        })
    }
}
