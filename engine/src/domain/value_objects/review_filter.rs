// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::domain::Review;

/// Optional topic and sentiment constraints, combined with AND
///
/// An empty string means "no constraint", same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    topic: Option<String>,
    sentiment: Option<String>,
}

impl ReviewFilter {
    pub fn new(topic: Option<String>, sentiment: Option<String>) -> Self {
        Self {
            topic: topic.filter(|t| !t.is_empty()),
            sentiment: sentiment.filter(|s| !s.is_empty()),
        }
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn sentiment(&self) -> Option<&str> {
        self.sentiment.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.sentiment.is_none()
    }

    pub fn matches(&self, review: &Review) -> bool {
        self.topic().is_none_or(|t| review.has_topic(t))
            && self.sentiment().is_none_or(|s| review.has_sentiment(s))
    }
}
