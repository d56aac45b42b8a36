// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! GetPaginatedReviews use case
//! Normalizes the page request, then counts and slices through the repository

use crate::domain::ports::ReviewRepository;
use crate::domain::{PaginatedReviews, QueryError, ReviewsQuery};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[async_trait]
pub trait GetPaginatedReviews: Send + Sync {
    async fn execute(
        &self,
        query: ReviewsQuery,
        cancel: &CancellationToken,
    ) -> Result<PaginatedReviews, QueryError>;
}

pub struct GetPaginatedReviewsUseCase {
    repository: Arc<dyn ReviewRepository>,
}

impl GetPaginatedReviewsUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetPaginatedReviews for GetPaginatedReviewsUseCase {
    async fn execute(
        &self,
        query: ReviewsQuery,
        cancel: &CancellationToken,
    ) -> Result<PaginatedReviews, QueryError> {
        let pagination = query.pagination();
        let filter = query.filter();
        let offset = pagination.offset();

        info!(
            page = pagination.page(),
            limit = pagination.limit(),
            topic = filter.topic().unwrap_or_default(),
            sentiment = filter.sentiment().unwrap_or_default(),
            offset,
            "Getting paginated reviews"
        );

        // Count and slice are separate reads; safe because loaded data never changes
        let total = self
            .repository
            .count(&filter, cancel)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count reviews");
                QueryError::Count(e)
            })?;

        let reviews = self
            .repository
            .query(offset, pagination.limit(), &filter, cancel)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query reviews");
                QueryError::Reviews(e)
            })?;

        let total_pages = pagination.total_pages(total);

        info!(
            total_reviews = total,
            returned = reviews.len(),
            total_pages,
            "Successfully retrieved paginated reviews"
        );

        Ok(PaginatedReviews {
            reviews,
            total,
            page: pagination.page(),
            limit: pagination.limit(),
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dataset::tests::{prediction, review};
    use crate::domain::ports::MockRepository;
    use crate::domain::{Dataset, StoreError};

    fn use_case_with(total: i64) -> (GetPaginatedReviewsUseCase, Arc<MockRepository>) {
        let dataset = Dataset::merge(
            (1..=total).map(review).collect(),
            vec![prediction(2, &["price"], &["negative"])],
        )
        .unwrap();
        let repo = Arc::new(MockRepository::new(dataset));
        (GetPaginatedReviewsUseCase::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_pages_through_45_reviews() {
        let (use_case, _) = use_case_with(45);
        let cancel = CancellationToken::new();

        let page3 = use_case
            .execute(ReviewsQuery::new(3, 20), &cancel)
            .await
            .unwrap();
        assert_eq!(page3.total, 45);
        assert_eq!(page3.total_pages, 3);
        assert_eq!(page3.page, 3);
        assert_eq!(page3.limit, 20);
        assert_eq!(page3.reviews.len(), 5);
        assert_eq!(page3.reviews[0].id, 41);

        let page4 = use_case
            .execute(ReviewsQuery::new(4, 20), &cancel)
            .await
            .unwrap();
        assert!(page4.reviews.is_empty());
        assert_eq!(page4.total, 45);
        assert_eq!(page4.total_pages, 3);
    }

    #[tokio::test]
    async fn test_page_size_matches_remaining_reviews() {
        let (use_case, _) = use_case_with(45);
        let cancel = CancellationToken::new();

        for limit in [1_i64, 7, 20, 45, 100] {
            for page in 1..=8_i64 {
                let result = use_case
                    .execute(ReviewsQuery::new(page, limit), &cancel)
                    .await
                    .unwrap();
                let offset = (page - 1) * limit;
                let expected = limit.min((45 - offset).max(0));
                assert_eq!(result.reviews.len() as i64, expected, "page={page} limit={limit}");
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_input_is_normalized() {
        let (use_case, _) = use_case_with(45);
        let cancel = CancellationToken::new();

        let result = use_case
            .execute(ReviewsQuery::new(0, 500), &cancel)
            .await
            .unwrap();
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 20);
        assert_eq!(result.reviews.len(), 20);
        assert_eq!(result.reviews[0].id, 1);
    }

    #[tokio::test]
    async fn test_unknown_topic_returns_empty_page() {
        let (use_case, _) = use_case_with(45);
        let query = ReviewsQuery::new(1, 20).with_topic("billing");

        let result = use_case
            .execute(query, &CancellationToken::new())
            .await
            .unwrap();
        assert!(result.reviews.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[tokio::test]
    async fn test_filters_by_topic_and_sentiment() {
        let (use_case, _) = use_case_with(10);
        let query = ReviewsQuery::new(1, 20)
            .with_topic("price")
            .with_sentiment("negative");

        let result = use_case
            .execute(query, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.reviews[0].id, 2);
    }

    #[tokio::test]
    async fn test_count_failure_is_wrapped() {
        let repo = Arc::new(MockRepository::failing());
        let use_case = GetPaginatedReviewsUseCase::new(repo.clone());

        let err = use_case
            .execute(ReviewsQuery::new(1, 20), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::Count(StoreError::Load(_))));
        assert!(err.to_string().starts_with("failed to get total reviews count"));
        // The slice is never requested after a failed count
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_token_is_reported() {
        let (use_case, _) = use_case_with(5);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = use_case
            .execute(ReviewsQuery::new(1, 20), &cancel)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }
}
