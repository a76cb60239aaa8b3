//! Error types for blend configuration and mode lookup.
//!
//! Blend formulas never fail. These errors come from the edges: parsing a
//! mode or group name, and loading a [`BlendConfig`](crate::BlendConfig)
//! from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for blend operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Mode name did not match any [`BlendMode`](crate::BlendMode).
    #[error("unknown blend mode: {0}")]
    UnknownMode(String),

    /// Group name did not match any [`BlendGroup`](crate::BlendGroup).
    #[error("unknown blend group: {0}")]
    UnknownGroup(String),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for blend operations.
pub type OpsResult<T> = Result<T, OpsError>;
