// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Domain-level errors
//! Loading is the only thing that can fail; everything after it is pure

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two data files a load error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Reviews,
    Predictions,
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFile::Reviews => f.write_str("reviews"),
            DataFile::Predictions => f.write_str("predictions"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {file} file '{}': {source}", path.display())]
    Io {
        file: DataFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file} file '{}': {source}", path.display())]
    Parse {
        file: DataFile,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate review id {0} in reviews file")]
    DuplicateReviewId(i64),
}

/// Errors returned through the repository port
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("operation cancelled")]
    Cancelled,
}

/// Errors returned by the query use cases, carrying the failing step
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to get total reviews count: {0}")]
    Count(#[source] StoreError),

    #[error("failed to get reviews: {0}")]
    Reviews(#[source] StoreError),

    #[error("failed to get analytics data: {0}")]
    Analytics(#[source] StoreError),
}

impl QueryError {
    pub fn store_error(&self) -> &StoreError {
        match self {
            QueryError::Count(e) | QueryError::Reviews(e) | QueryError::Analytics(e) => e,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.store_error(), StoreError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
