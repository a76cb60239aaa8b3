//! CLI command implementations

pub mod blend;
pub mod modes;
pub mod table;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use layermix_core::Rgba;
use layermix_ops::BlendConfig;

/// Load the blend config from `path`, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<BlendConfig> {
    match path {
        Some(p) => BlendConfig::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display())),
        None => {
            debug!("No config file, using defaults");
            Ok(BlendConfig::default())
        }
    }
}

/// Format a color for output.
pub fn format_color(color: Rgba, hex: bool) -> String {
    if hex && color.to_array().iter().all(|v| v.is_finite()) {
        color.to_hex(true)
    } else {
        color.to_string()
    }
}
