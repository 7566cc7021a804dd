// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Recondesk", "recondesk"));

const LOCAL_NAMES: [&str; 2] = ["recondesk.toml", ".recondesk.toml"];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub currency: String,
    pub account_label: String,
    pub date_format: String,
    pub data: Option<PathBuf>,
    pub as_of: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "AED".to_string(),
            account_label: "Checking Account *9041".to_string(),
            date_format: "%d-%m-%Y".to_string(),
            data: None,
            as_of: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        // Relative feed paths are resolved against the config file's directory.
        if let (Some(data), Some(base)) = (cfg.data.as_ref(), path.parent()) {
            if data.is_relative() {
                cfg.data = Some(base.join(data));
            }
        }
        Ok(cfg)
    }

    /// Explicit path, then the working directory, then the platform config dir.
    pub fn find_and_load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        for name in LOCAL_NAMES {
            let p = Path::new(name);
            if p.exists() {
                return Self::load_from_file(p);
            }
        }
        if let Some(p) = config_path().filter(|p| p.exists()) {
            return Self::load_from_file(&p);
        }
        Ok(Self::default())
    }

    /// Anchor for "last N days" filters.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("recondesk.toml"))
}
