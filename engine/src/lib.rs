// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Correctness
#![deny(clippy::indexing_slicing)]
#![deny(clippy::string_slice)]
#![deny(clippy::cast_possible_wrap)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

//! Reviews backend engine
//!
//! Serves paginated, filterable customer reviews and the merged analytics
//! dataset from two static JSON files held in memory.
//!
//! Layout:
//! - `domain`: review model, pagination rules, repository port, use cases
//! - `infrastructure`: JSON file repository, configuration, logging
//! - `application`: composition root shared by the adapters
//! - `adapters`: REST API (axum)

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
