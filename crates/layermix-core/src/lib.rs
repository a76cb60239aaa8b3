//! # layermix-core
//!
//! Core value types for the layermix blend engine.
//!
//! - [`Rgba`] - straight-alpha color with four `f32` channels
//! - [`Position`] - 2D sample coordinate (used by dissolve)
//! - [`luminance_rec709`] and the Rec.709 weights
//! - [`CoreError`] - parse failures for colors and positions
//!
//! ## Crate Structure
//!
//! ```text
//! layermix-core (this crate)
//!    ^
//!    |
//!    +-- layermix-ops (blend modes, dispatch, engine)
//!    +-- layermix-cli
//!    +-- layermix-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`Rgba`] and [`Position`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod position;

pub use color::{
    clamp01, luminance_rec709, Rgba, DEFAULT_TOLERANCE, REC601_LUMA, REC709_LUMA, REC709_LUMA_B,
    REC709_LUMA_G, REC709_LUMA_R,
};
pub use error::{CoreError, CoreResult};
pub use position::Position;

/// Prelude module for convenient imports.
///
/// ```
/// use layermix_core::prelude::*;
/// let c = Rgba::rgb(0.5, 0.5, 0.5);
/// ```
pub mod prelude {
    pub use crate::color::{clamp01, luminance_rec709, Rgba};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::position::Position;
}
