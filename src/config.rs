use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shard configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShardConfig {
    /// Directory holding the shard's property buckets
    pub data_dir: PathBuf,
}

impl Default for ShardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl ShardConfig {
    /// Create a configuration rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
