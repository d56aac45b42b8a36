// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::domain::{Prediction, Review};
use serde::Serialize;

/// Full merged dataset for client-side aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsData {
    pub reviews: Vec<Review>,
    pub predictions: Vec<Prediction>,
}
