//! Comparative group: difference, exclusion, subtract, divide.
//!
//! Output alpha is `base.a`, except [`subtract`] which subtracts alphas too.

use layermix_core::{clamp01, Rgba};

/// Relative tolerance of the zero test in [`divide`].
pub const DIVIDE_EPSILON: f32 = 1e-6;

/// Absolute floor of the zero test: eight times the smallest subnormal `f32`.
pub const DIVIDE_ZERO_FLOOR: f32 = 8.0 * f32::from_bits(1);

/// Float comparison against zero with a relative tolerance and a subnormal
/// floor. Only zero and the tiniest subnormals pass.
#[inline]
fn approximately_zero(v: f32) -> bool {
    v.abs() < (DIVIDE_EPSILON * v.abs()).max(DIVIDE_ZERO_FLOOR)
}

/// `|base - blend|`. Identical inputs go black.
///
/// ```rust
/// use layermix_core::Rgba;
/// use layermix_ops::difference;
///
/// let out = difference(Rgba::rgb(0.2, 0.5, 0.8), Rgba::rgb(0.8, 0.5, 0.2));
/// assert!((out.r - 0.6).abs() < 1e-6);
/// assert_eq!(out.g, 0.0);
/// ```
#[inline]
pub fn difference(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, |a, b| (a - b).abs())
}

/// `base + blend - 2 * base * blend`. Midtones go gray rather than black.
#[inline]
pub fn exclusion(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, |a, b| a + b - 2.0 * a * b)
}

/// `clamp01(base - blend)` on every channel, alpha included.
#[inline]
pub fn subtract(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, clamp01(base.a - blend.a), |a, b| clamp01(a - b))
}

fn divide_channel(base: f32, blend: f32) -> f32 {
    if approximately_zero(blend) {
        return if blend > 0.0 { f32::INFINITY } else { 0.0 };
    }
    clamp01(base / blend)
}

/// `clamp01(base / blend)`.
///
/// A blend channel that is zero, or a subnormal below [`DIVIDE_ZERO_FLOOR`],
/// yields `f32::INFINITY` when positive and `0.0` otherwise. Any larger blend
/// channel, however small, divides normally and clamps. This is the only
/// formula in the engine that can leave [0, 1].
#[inline]
pub fn divide(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, divide_channel)
}
