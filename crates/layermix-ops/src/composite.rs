//! Blend dispatch.
//!
//! [`blend`] is the single entry point: it applies the alpha fast paths and
//! routes to the per-mode formula in [`crate::modes`]. No formula logic
//! lives here.
//!
//! # Fast paths
//!
//! In order, before any formula runs:
//!
//! 1. `blend.a <= 0` returns `base` unchanged, for every mode.
//! 2. `blend.a >= 1` returns `blend` unchanged, unless the mode is
//!    special-alpha ([`BlendMode::is_special_alpha`]) or
//!    [`BlendConfig::opaque_fast_path`] is off.
//!
//! # Example
//!
//! ```rust
//! use layermix_core::Rgba;
//! use layermix_ops::{blend, BlendMode};
//!
//! let base = Rgba::rgb(1.0, 0.0, 0.0);
//! let top = Rgba::new(0.0, 1.0, 0.0, 0.5);
//! let out = blend(base, top, BlendMode::Multiply, None);
//! assert_eq!(out, Rgba::new(0.0, 0.0, 0.0, 0.5));
//! ```

use layermix_core::{Position, Rgba};
use rand::Rng;
use tracing::trace;

use crate::config::{BlendConfig, DissolveSource};
use crate::mode::BlendMode;
use crate::modes::*;

/// Signature shared by every deterministic mode formula.
pub type BlendFn = fn(Rgba, Rgba) -> Rgba;

impl BlendMode {
    /// The raw formula for this mode, without fast paths.
    ///
    /// `None` for [`BlendMode::Dissolve`], which needs a decision value; see
    /// [`dissolve_with`].
    pub fn function(self) -> Option<BlendFn> {
        let f: BlendFn = match self {
            Self::Normal => normal,
            Self::Dissolve => return None,
            Self::Behind => behind,
            Self::Clear => clear,
            Self::Darken => darken,
            Self::Multiply => multiply,
            Self::ColorBurn => color_burn,
            Self::LinearBurn => linear_burn,
            Self::DarkerColor => darker_color,
            Self::Lighten => lighten,
            Self::Screen => screen,
            Self::ColorDodge => color_dodge,
            Self::LinearDodge => linear_dodge,
            Self::LighterColor => lighter_color,
            Self::Overlay => overlay,
            Self::SoftLight => soft_light,
            Self::HardLight => hard_light,
            Self::VividLight => vivid_light,
            Self::LinearLight => linear_light,
            Self::PinLight => pin_light,
            Self::HardMix => hard_mix,
            Self::Difference => difference,
            Self::Exclusion => exclusion,
            Self::Subtract => subtract,
            Self::Divide => divide,
            Self::Hue => hue,
            Self::Saturation => saturation,
            Self::Color => color,
            Self::Luminosity => luminosity,
        };
        Some(f)
    }
}

/// Blends `blend` onto `base` with the default [`BlendConfig`].
///
/// `position` only matters for [`BlendMode::Dissolve`], and only when the
/// config asks for [`DissolveSource::PositionHash`]. With the default config
/// dissolve draws from the thread-local generator.
pub fn blend(base: Rgba, blend: Rgba, mode: BlendMode, position: Option<Position>) -> Rgba {
    blend_with_config(
        base,
        blend,
        mode,
        position,
        &BlendConfig::default(),
        &mut rand::thread_rng(),
    )
}

/// Blends with an explicit config and random generator.
///
/// The generator is touched only by a [`BlendMode::Dissolve`] call that
/// needs a random draw.
pub fn blend_with_config<R: Rng + ?Sized>(
    base: Rgba,
    blend: Rgba,
    mode: BlendMode,
    position: Option<Position>,
    config: &BlendConfig,
    rng: &mut R,
) -> Rgba {
    if blend.is_transparent() {
        trace!(%mode, "transparent blend, base unchanged");
        return base;
    }
    if config.opaque_fast_path && blend.is_opaque() && !mode.is_special_alpha() {
        trace!(%mode, "opaque blend, blend unchanged");
        return blend;
    }

    match mode.function() {
        Some(f) => f(base, blend),
        None => {
            let value = match (config.dissolve, position) {
                (DissolveSource::PositionHash, Some(p)) => position_hash(p),
                _ => rng.r#gen::<f32>(),
            };
            trace!(value, threshold = blend.a, "dissolve");
            dissolve_with(base, blend, value)
        }
    }
}
