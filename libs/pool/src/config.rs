//! Pool Configuration Module
//!
//! Constructor-time configuration for a pool instance. Supports loading
//! from TOML files for deployments that provision pools from disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of chunks a stream is split into unless configured otherwise.
///
/// Protocol constant: chunk sizing is `total_amount / stream_count` per
/// step, with the division remainder absorbed by the final chunk.
pub const DEFAULT_STREAM_COUNT: u32 = 10;

/// Pool construction parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolConfig {
    /// Initial reserve of token A.
    pub reserve_a: u128,

    /// Initial reserve of token B.
    pub reserve_b: u128,

    /// Chunks per stream. Fixed for every stream the pool creates.
    #[serde(default = "default_stream_count")]
    pub stream_count: u32,
}

fn default_stream_count() -> u32 {
    DEFAULT_STREAM_COUNT
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            reserve_a: 0,
            reserve_b: 0,
            stream_count: DEFAULT_STREAM_COUNT,
        }
    }
}

impl PoolConfig {
    pub fn new(reserve_a: u128, reserve_b: u128) -> Self {
        Self {
            reserve_a,
            reserve_b,
            stream_count: DEFAULT_STREAM_COUNT,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pool config: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse pool config: {}", path.display()))?;
        Ok(config)
    }
}
