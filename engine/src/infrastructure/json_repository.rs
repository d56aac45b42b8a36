// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! JSON file review repository
//! Lazily loads the reviews and predictions files once, then serves every
//! query from the merged in-memory dataset

use crate::domain::error::Result;
use crate::domain::ports::ReviewRepository;
use crate::domain::{DataFile, Dataset, LoadError, Prediction, Review, ReviewFilter, StoreError};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Top-level shape of the reviews file
#[derive(Deserialize)]
struct ReviewsDocument {
    reviews: Vec<Review>,
}

enum LoadState {
    Unloaded,
    Loaded(Arc<Dataset>),
}

/// Review repository backed by two JSON files
///
/// Starts `Unloaded`. The first successful `ensure_loaded` (explicit or
/// through any query) moves it to `Loaded` for the rest of the process
/// lifetime. A failed load leaves it `Unloaded`, so the next call retries.
pub struct JsonReviewRepository {
    reviews_path: PathBuf,
    predictions_path: PathBuf,
    state: RwLock<LoadState>,
}

impl JsonReviewRepository {
    pub fn new(reviews_path: impl Into<PathBuf>, predictions_path: impl Into<PathBuf>) -> Self {
        Self {
            reviews_path: reviews_path.into(),
            predictions_path: predictions_path.into(),
            state: RwLock::new(LoadState::Unloaded),
        }
    }

    pub async fn is_loaded(&self) -> bool {
        matches!(*self.state.read().await, LoadState::Loaded(_))
    }

    /// Load and merge both files unless already done, returning the dataset
    ///
    /// `cancel` is checked before reading the files and again once the merge
    /// is done. A dataset that finished loading is kept even if the token
    /// fired meanwhile.
    pub async fn ensure_loaded(&self, cancel: &CancellationToken) -> Result<Arc<Dataset>> {
        if let LoadState::Loaded(dataset) = &*self.state.read().await {
            return Ok(Arc::clone(dataset));
        }

        let mut state = self.state.write().await;
        // Another caller may have loaded while we waited for the write lock
        if let LoadState::Loaded(dataset) = &*state {
            return Ok(Arc::clone(dataset));
        }

        if cancel.is_cancelled() {
            debug!("Review data load cancelled before start");
            return Err(StoreError::Cancelled);
        }

        let dataset = match self.load().await {
            Ok(dataset) => Arc::new(dataset),
            Err(e) => {
                warn!(
                    reviews_path = %self.reviews_path.display(),
                    predictions_path = %self.predictions_path.display(),
                    error = %e,
                    "Failed to load review data"
                );
                return Err(e.into());
            }
        };
        *state = LoadState::Loaded(Arc::clone(&dataset));

        info!(
            reviews = dataset.reviews().len(),
            predictions = dataset.predictions().len(),
            "Review data loaded"
        );

        if cancel.is_cancelled() {
            debug!("Review data load finished after cancellation");
            return Err(StoreError::Cancelled);
        }
        Ok(dataset)
    }

    async fn load(&self) -> std::result::Result<Dataset, LoadError> {
        let document: ReviewsDocument = read_json(DataFile::Reviews, &self.reviews_path).await?;
        let predictions: Vec<Prediction> =
            read_json(DataFile::Predictions, &self.predictions_path).await?;
        Dataset::merge(document.reviews, predictions)
    }
}

async fn read_json<T: DeserializeOwned>(
    file: DataFile,
    path: &Path,
) -> std::result::Result<T, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Io {
            file,
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        file,
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl ReviewRepository for JsonReviewRepository {
    async fn query(
        &self,
        offset: usize,
        limit: usize,
        filter: &ReviewFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<Review>> {
        let dataset = self.ensure_loaded(cancel).await?;
        Ok(dataset.query(offset, limit, filter))
    }

    async fn count(&self, filter: &ReviewFilter, cancel: &CancellationToken) -> Result<usize> {
        let dataset = self.ensure_loaded(cancel).await?;
        Ok(dataset.count(filter))
    }

    async fn all_for_analytics(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(Vec<Review>, Vec<Prediction>)> {
        let dataset = self.ensure_loaded(cancel).await?;
        Ok((dataset.reviews().to_vec(), dataset.predictions().to_vec()))
    }
}
