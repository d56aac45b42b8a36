// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Review and Prediction records as they appear in the data files

use serde::{Deserialize, Serialize};

/// A single customer review
///
/// `topics` and `sentiments` are empty in the reviews file and get filled in
/// from the prediction with the same id when the dataset is merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: String,
    pub status: Option<String>,
    pub product: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sentiments: Vec<String>,
}

impl Review {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    pub fn has_sentiment(&self, sentiment: &str) -> bool {
        self.sentiments.iter().any(|s| s == sentiment)
    }
}

/// Model output for one review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub sentiments: Vec<String>,
}
