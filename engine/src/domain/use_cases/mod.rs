// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod get_analytics_data;
pub mod get_paginated_reviews;

pub use get_analytics_data::{GetAnalyticsData, GetAnalyticsDataUseCase};
pub use get_paginated_reviews::{GetPaginatedReviews, GetPaginatedReviewsUseCase};
