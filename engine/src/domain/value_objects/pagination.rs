// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Pagination value object

use crate::domain::constants::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

/// A normalized page request
///
/// `page >= 1` and `1 <= limit <= MAX_LIMIT` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: usize,
}

impl Pagination {
    /// Normalize raw client input
    ///
    /// A page below 1 becomes 1. A limit outside `1..=MAX_LIMIT` becomes
    /// `DEFAULT_LIMIT` rather than being clamped.
    pub fn normalize(page: i64, limit: i64) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page };
        let limit = if (1..=MAX_LIMIT).contains(&limit) {
            limit
        } else {
            DEFAULT_LIMIT
        };
        Self {
            page: page.unsigned_abs(),
            limit: limit.unsigned_abs() as usize,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of matching reviews before this page, saturating on huge pages
    pub fn offset(&self) -> usize {
        let offset = (self.page - 1).saturating_mul(self.limit as u64);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}
