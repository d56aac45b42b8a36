// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! GetPaginatedReviews query and response

use crate::domain::{Pagination, Review, ReviewFilter};
use serde::Serialize;

/// Raw page request as received from a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsQuery {
    pub page: i64,
    pub limit: i64,
    pub topic: Option<String>,
    pub sentiment: Option<String>,
}

impl ReviewsQuery {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            topic: None,
            sentiment: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::normalize(self.page, self.limit)
    }

    pub fn filter(&self) -> ReviewFilter {
        ReviewFilter::new(self.topic.clone(), self.sentiment.clone())
    }
}

/// One page of reviews plus the totals a client needs to page through them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedReviews {
    pub reviews: Vec<Review>,
    pub total: usize,
    pub page: u64,
    pub limit: usize,
    pub total_pages: usize,
}
