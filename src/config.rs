// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a
//! valid configuration. The CLI layers its flags on top of whatever was loaded.
//!
//! ```json
//! {
//!   "edit_check": "aligned_mask",
//!   "parallel": { "enabled": true, "workers": 4, "min_tokens": 64 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How an edit-distance posting hit is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCheck {
    /// Gap-aligned cost of the two deletion masks. No DP.
    #[default]
    AlignedMask,
    /// Bounded Levenshtein DP between the document token and the keyword.
    Levenshtein,
}

/// Sharding of document tokens across rayon workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    pub enabled: bool,
    /// Number of token shards.
    pub workers: usize,
    /// Documents with fewer distinct tokens are matched on the calling thread.
    pub min_tokens: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            workers: 4,
            min_tokens: 64,
        }
    }
}

impl ParallelConfig {
    /// Should a document with `distinct_tokens` tokens be sharded?
    #[inline]
    pub fn applies_to(&self, distinct_tokens: usize) -> bool {
        self.enabled && self.workers > 1 && distinct_tokens >= self.min_tokens
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub edit_check: EditCheck,
    pub parallel: ParallelConfig,
}

/// Failure to load a [`MatcherConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl MatcherConfig {
    /// Sequential matching, everything else default.
    pub fn sequential() -> Self {
        Self {
            parallel: ParallelConfig {
                enabled: false,
                ..ParallelConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel.workers == 0 {
            return Err(ConfigError::Invalid(
                "parallel.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
