// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Merged, immutable review dataset

use crate::domain::{LoadError, Prediction, Review, ReviewFilter};
use std::collections::{HashMap, HashSet};

/// Reviews with their predictions merged in, plus the raw predictions
///
/// Built once per successful load and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    reviews: Vec<Review>,
    predictions: Vec<Prediction>,
}

impl Dataset {
    /// Merge predictions into reviews by id
    ///
    /// Every review whose id has a prediction gets that prediction's topics
    /// and sentiments. When several predictions share an id the last one in
    /// file order wins. Review ids must be unique.
    pub fn merge(mut reviews: Vec<Review>, predictions: Vec<Prediction>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(reviews.len());
        for review in &reviews {
            if !seen.insert(review.id) {
                return Err(LoadError::DuplicateReviewId(review.id));
            }
        }

        let by_id: HashMap<i64, &Prediction> = predictions.iter().map(|p| (p.id, p)).collect();

        for review in &mut reviews {
            if let Some(prediction) = by_id.get(&review.id) {
                review.topics = prediction.topics.clone();
                review.sentiments = prediction.sentiments.clone();
            }
        }

        Ok(Self {
            reviews,
            predictions,
        })
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Number of reviews matching `filter`
    pub fn count(&self, filter: &ReviewFilter) -> usize {
        if filter.is_empty() {
            return self.reviews.len();
        }
        self.reviews.iter().filter(|r| filter.matches(r)).count()
    }

    /// Window `[offset, offset + limit)` of the reviews matching `filter`, in file order
    pub fn query(&self, offset: usize, limit: usize, filter: &ReviewFilter) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| filter.matches(r))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}
