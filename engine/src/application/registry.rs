// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Composition root
//! Builds every use case from one repository and hands them to the adapters

use crate::domain::ports::ReviewRepository;
use crate::domain::use_cases::{
    GetAnalyticsData, GetAnalyticsDataUseCase, GetPaginatedReviews, GetPaginatedReviewsUseCase,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct Application {
    get_paginated_reviews: Arc<dyn GetPaginatedReviews>,
    get_analytics_data: Arc<dyn GetAnalyticsData>,
    shutdown: CancellationToken,
    version: &'static str,
}

impl Application {
    /// Wire the use cases around `repository`
    ///
    /// `shutdown` is handed to every query, so requests that would start a
    /// data load after shutdown began fail fast instead.
    pub fn new(repository: Arc<dyn ReviewRepository>, shutdown: CancellationToken) -> Self {
        Self {
            get_paginated_reviews: Arc::new(GetPaginatedReviewsUseCase::new(repository.clone())),
            get_analytics_data: Arc::new(GetAnalyticsDataUseCase::new(repository)),
            shutdown,
            version: crate::SERVICE_VERSION,
        }
    }

    pub fn get_paginated_reviews(&self) -> &Arc<dyn GetPaginatedReviews> {
        &self.get_paginated_reviews
    }

    pub fn get_analytics_data(&self) -> &Arc<dyn GetAnalyticsData> {
        &self.get_analytics_data
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    pub fn version(&self) -> &'static str {
        self.version
    }
}
