// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Result, TrackerError};
use tracing_subscriber::EnvFilter;

/// Pick the log filter: explicit flag, then `RUST_LOG`, then the config value.
pub fn resolve_filter(flag: Option<&str>, env: Option<&str>, configured: &str) -> String {
    let given = |s: &&str| !s.trim().is_empty();
    flag.filter(given)
        .or(env.filter(given))
        .unwrap_or(configured)
        .to_string()
}

/// Install the stderr subscriber. Stdout stays reserved for tables and JSON.
pub fn init(filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_new(filter).map_err(|_| TrackerError::LogFilter(filter.to_string()))?;
    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
