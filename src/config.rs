// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Result, TrackerError};
use crate::models::{ALL_CATEGORIES, DEFAULT_CATEGORIES};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "ExpenseTracker", "expense-tracker"));

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Categories offered by the form, in display order.
    pub categories: Vec<String>,
    pub currency_symbol: String,
    pub log_level: String,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            currency_symbol: "$".to_string(),
            log_level: "warn".to_string(),
            prompt: "expenses> ".to_string(),
        }
    }
}

impl Settings {
    pub fn default_category(&self) -> &str {
        self.categories.first().map(String::as_str).unwrap_or_default()
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(TrackerError::InvalidConfig(
                "at least one category is required".into(),
            ));
        }
        if self.categories.iter().any(|c| c == ALL_CATEGORIES) {
            return Err(TrackerError::InvalidConfig(format!(
                "'{}' is reserved for the category filter",
                ALL_CATEGORIES
            )));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(TrackerError::NoConfigDir)?;
    Ok(proj.config_dir().join(CONFIG_FILE))
}

/// Load settings from `path`, or from the platform config dir when no path
/// is given. Only the default location may be absent.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) => read(p),
        None => {
            let p = config_path()?;
            if p.exists() {
                read(&p)
            } else {
                debug!(path = %p.display(), "no config file, using defaults");
                Ok(Settings::default())
            }
        }
    }
}

fn read(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path).map_err(|source| TrackerError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings =
        serde_json::from_str(&raw).map_err(|source| TrackerError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
    settings.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(settings)
}
