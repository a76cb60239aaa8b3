//! Blend configuration.
//!
//! A [`BlendConfig`] controls the two behaviors of [`crate::blend`] that are
//! policy rather than math: the opaque shortcut and the dissolve decision
//! source. It loads from YAML:
//!
//! ```yaml
//! opaque_fast_path: true
//! dissolve: position-hash
//! seed: 42
//! ```
//!
//! Missing keys take their defaults; unknown keys are an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{OpsError, OpsResult};

/// Where Dissolve gets its decision value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DissolveSource {
    /// Uniform draw in [0, 1) from a random generator.
    #[default]
    Random,
    /// [`position_hash`](crate::position_hash) of the sample position.
    /// Calls without a position fall back to a random draw.
    PositionHash,
}

/// Dispatch policy for [`crate::blend_with_config`] and [`crate::BlendEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendConfig {
    /// Return an opaque blend color unchanged for modes whose formula does
    /// not involve alpha. Disable to always evaluate the mode formula.
    pub opaque_fast_path: bool,
    /// Decision source for Dissolve.
    pub dissolve: DissolveSource,
    /// Seed for [`crate::BlendEngine`]'s generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            opaque_fast_path: true,
            dissolve: DissolveSource::Random,
            seed: None,
        }
    }
}

impl BlendConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// [`OpsError::ConfigNotFound`] if the path does not exist, otherwise
    /// I/O or YAML errors.
    pub fn from_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpsError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), ?config, "Loaded blend config");
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builder: set the opaque shortcut.
    pub fn with_opaque_fast_path(mut self, enabled: bool) -> Self {
        self.opaque_fast_path = enabled;
        self
    }

    /// Builder: set the dissolve source.
    pub fn with_dissolve(mut self, source: DissolveSource) -> Self {
        self.dissolve = source;
        self
    }

    /// Builder: set the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
