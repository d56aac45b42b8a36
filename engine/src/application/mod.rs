// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Application layer
//! Wires the repository into the use cases for the driving adapters

pub mod registry;

pub use registry::Application;
