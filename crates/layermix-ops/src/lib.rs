//! # layermix-ops
//!
//! Photoshop-style layer blend modes for straight-alpha [`Rgba`] colors.
//!
//! # Modules
//!
//! - [`mode`] - [`BlendMode`] and [`BlendGroup`]
//! - [`modes`] - one pure function per mode, grouped like the layer panel
//! - [`composite`] - [`blend`] dispatch with the alpha fast paths
//! - [`config`] - [`BlendConfig`], loadable from YAML
//! - [`engine`] - [`BlendEngine`], a config with its own seeded generator
//!
//! # Example
//!
//! ```rust
//! use layermix_core::Rgba;
//! use layermix_ops::{blend, screen, BlendMode};
//!
//! let base = Rgba::BLACK;
//! let top = Rgba::WHITE;
//!
//! // Through dispatch
//! assert_eq!(blend(base, top, BlendMode::Screen, None), Rgba::WHITE);
//!
//! // Or call the formula directly
//! assert_eq!(screen(base, top), Rgba::WHITE);
//! ```
//!
//! # Common Operations
//!
//! ## Named modes
//!
//! ```rust
//! use layermix_ops::{BlendGroup, BlendMode};
//!
//! let mode: BlendMode = "color-burn".parse().unwrap();
//! assert_eq!(mode.group(), BlendGroup::Darken);
//! assert_eq!(BlendGroup::Contrast.modes().count(), 7);
//! ```
//!
//! ## Reproducible dissolve
//!
//! ```rust,ignore
//! use layermix_ops::{BlendConfig, BlendEngine, BlendMode};
//!
//! let config = BlendConfig::from_file("blend.yaml")?;
//! let mut engine = BlendEngine::new(config);
//! let out = engine.blend(base, top, BlendMode::Dissolve, Some(position));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod composite;
pub mod config;
pub mod engine;
pub mod mode;
pub mod modes;

pub use composite::{blend, blend_with_config, BlendFn};
pub use config::{BlendConfig, DissolveSource};
pub use engine::BlendEngine;
pub use error::{OpsError, OpsResult};
pub use mode::{BlendGroup, BlendMode};
pub use modes::*;

pub use layermix_core::{Position, Rgba};
