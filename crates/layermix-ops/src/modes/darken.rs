//! Darken group: darken, multiply, color burn, linear burn, darker color.
//!
//! Output alpha is the minimum of the two input alphas, except for
//! [`darker_color`] which returns one of its inputs whole.

use layermix_core::{clamp01, Rgba};

#[inline]
fn min_alpha(base: Rgba, blend: Rgba) -> f32 {
    base.a.min(blend.a)
}

/// Per-channel minimum.
#[inline]
pub fn darken(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, min_alpha(base, blend), f32::min)
}

/// Per-channel product. Black stays black, white is neutral.
///
/// ```rust
/// use layermix_core::Rgba;
/// use layermix_ops::multiply;
///
/// let out = multiply(Rgba::rgb(0.8, 0.4, 0.2), Rgba::rgb(0.2, 0.6, 0.8));
/// assert!((out.r - 0.16).abs() < 0.01);
/// ```
#[inline]
pub fn multiply(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, min_alpha(base, blend), |a, b| a * b)
}

fn color_burn_channel(base: f32, blend: f32) -> f32 {
    if blend <= 0.0 {
        return 0.0;
    }
    clamp01(1.0 - (1.0 - base) / blend)
}

/// Darken the base by increasing contrast with the blend color.
#[inline]
pub fn color_burn(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, min_alpha(base, blend), color_burn_channel)
}

/// `clamp01(base + blend - 1)`.
#[inline]
pub fn linear_burn(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, min_alpha(base, blend), |a, b| clamp01(a + b - 1.0))
}

/// Whichever whole color has the lower Rec.709 luminance. Ties pick `blend`.
#[inline]
pub fn darker_color(base: Rgba, blend: Rgba) -> Rgba {
    if base.luminance() < blend.luminance() { base } else { blend }
}
