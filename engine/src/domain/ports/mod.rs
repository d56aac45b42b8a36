// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod mock_repository;
pub mod review_repository;

pub use mock_repository::MockRepository;
pub use review_repository::ReviewRepository;
