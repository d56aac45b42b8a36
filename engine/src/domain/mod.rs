// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod queries;
pub mod use_cases;
pub mod value_objects;

pub use entities::{Dataset, Prediction, Review};
pub use error::{DataFile, LoadError, QueryError, StoreError};
pub use queries::{AnalyticsData, PaginatedReviews, ReviewsQuery};
pub use value_objects::{Pagination, ReviewFilter};
