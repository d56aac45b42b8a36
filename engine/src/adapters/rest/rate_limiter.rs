// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Per-client token bucket rate limiter

use crate::infrastructure::RateLimitConfig;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Bucket count above which idle buckets are dropped
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Each key gets `max_requests` tokens, refilled continuously over `window_secs`
pub struct RateLimiter {
    capacity: f64,
    refill_per_sec: f64,
    window: Duration,
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let capacity = f64::from(config.max_requests);
        let window_secs = config.window_secs.max(1);
        Self {
            capacity,
            refill_per_sec: capacity / window_secs as f64,
            window: Duration::from_secs(window_secs),
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Take one token for `key`, returning false when its bucket is empty
    pub async fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().await;

        if buckets.len() > PRUNE_THRESHOLD {
            // A bucket idle for a whole window is full again, same as a new one
            let window = self.window;
            buckets.retain(|_, b| now.duration_since(b.last_refill) < window);
        }

        let bucket = buckets.entry(key.to_string()).or_insert_with(|| Bucket {
            tokens: self.capacity,
            last_refill: now,
        });
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.capacity);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
