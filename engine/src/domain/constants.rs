// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Pagination limits shared by the query use cases

/// Page used when the requested page is below 1
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the requested limit is missing or out of range
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a client may request
pub const MAX_LIMIT: i64 = 100;
