// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Mock repository implementation for testing
//! Serves a fixed dataset, or fails every call when built with `failing`

use super::ReviewRepository;
use crate::domain::error::Result;
use crate::domain::{DataFile, Dataset, LoadError, Prediction, Review, ReviewFilter, StoreError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Default)]
pub struct MockRepository {
    dataset: Arc<Dataset>,
    failing: bool,
    calls: Arc<AtomicUsize>,
}

impl MockRepository {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            ..Self::default()
        }
    }

    /// A repository whose every call fails as if the reviews file were missing
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of port calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn snapshot(&self, cancel: &CancellationToken) -> Result<&Dataset> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if self.failing {
            return Err(LoadError::Io {
                file: DataFile::Reviews,
                path: PathBuf::from("missing.json"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into());
        }
        Ok(self.dataset.as_ref())
    }
}

#[async_trait]
impl ReviewRepository for MockRepository {
    async fn query(
        &self,
        offset: usize,
        limit: usize,
        filter: &ReviewFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<Review>> {
        Ok(self.snapshot(cancel)?.query(offset, limit, filter))
    }

    async fn count(&self, filter: &ReviewFilter, cancel: &CancellationToken) -> Result<usize> {
        Ok(self.snapshot(cancel)?.count(filter))
    }

    async fn all_for_analytics(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Review>, Vec<Prediction>)> {
        let dataset = self.snapshot(cancel)?;
        Ok((dataset.reviews().to_vec(), dataset.predictions().to_vec()))
    }
}
