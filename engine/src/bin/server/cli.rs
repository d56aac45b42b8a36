// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use clap::Parser;
use reviews_engine::infrastructure::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// Reviews API server
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// YAML configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}
