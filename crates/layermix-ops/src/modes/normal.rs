//! Normal group: normal, dissolve, behind, clear.
//!
//! These modes replace or mix colors through alpha alone; none of them looks
//! at the relationship between the channel values.

use layermix_core::{Position, Rgba};

/// Standard straight alpha compositing.
///
/// `result = blend * a + base * (1 - a)` per channel with `a = blend.a`.
/// Output alpha accumulates like Porter-Duff over:
/// `min(1, base.a + blend.a * (1 - base.a))`.
///
/// ```rust
/// use layermix_core::Rgba;
/// use layermix_ops::normal;
///
/// let red = Rgba::new(1.0, 0.0, 0.0, 0.5);
/// let blue = Rgba::rgb(0.0, 0.0, 1.0);
/// let out = normal(blue, red);
/// assert!((out.r - 0.5).abs() < 1e-6);
/// assert!((out.b - 0.5).abs() < 1e-6);
/// assert_eq!(out.a, 1.0);
/// ```
#[inline]
pub fn normal(base: Rgba, blend: Rgba) -> Rgba {
    let alpha = blend.a;
    let inv_alpha = 1.0 - alpha;
    let out_a = (base.a + blend.a * (1.0 - base.a)).min(1.0);
    blend.zip_rgb(base, out_a, |bl, ba| bl * alpha + ba * inv_alpha)
}

/// Hash of a sample position into [0, 1).
///
/// `|sin(x * 12.9898 + y * 78.233) * 43758.5453| mod 1`, the classic shader
/// one-liner. Stable for a given position, so a dissolve driven by it does
/// not flicker between calls.
#[inline]
pub fn position_hash(position: Position) -> f32 {
    let h = ((position.x * 12.9898 + position.y * 78.233).sin() * 43758.5453).abs() % 1.0;
    // `%` can land exactly on 1.0 after rounding for huge inputs
    if h >= 1.0 { 0.0 } else { h }
}

/// Dissolve with an explicit decision value in [0, 1).
///
/// Returns `blend` when `value < blend.a`, otherwise `base`. Colors are
/// picked whole; nothing is mixed.
#[inline]
pub fn dissolve_with(base: Rgba, blend: Rgba, value: f32) -> Rgba {
    if value < blend.a { blend } else { base }
}

/// Dissolve using a fresh draw from the thread-local generator.
pub fn dissolve(base: Rgba, blend: Rgba) -> Rgba {
    dissolve_with(base, blend, rand::random::<f32>())
}

/// Dissolve decided by [`position_hash`] instead of a random draw.
#[inline]
pub fn dissolve_at(base: Rgba, blend: Rgba, position: Position) -> Rgba {
    dissolve_with(base, blend, position_hash(position))
}

/// Paint `blend` behind `base`.
///
/// An opaque base hides the blend color entirely. Otherwise the blend color
/// shows through the transparent part of the base.
pub fn behind(base: Rgba, blend: Rgba) -> Rgba {
    if base.a >= 1.0 {
        return base;
    }

    let visible = 1.0 - base.a;
    // base acts as the top layer here
    let background = normal(blend, base);
    let out_a = (base.a + blend.a * visible).min(1.0);
    background.with_alpha(out_a)
}

/// Erase base alpha in proportion to the blend alpha.
#[inline]
pub fn clear(base: Rgba, blend: Rgba) -> Rgba {
    base.with_alpha(base.a * (1.0 - blend.a))
}

/// Hard eraser: any visible blend color makes the result fully transparent.
///
/// Not reachable through [`crate::blend`]; [`BlendMode::Clear`](crate::BlendMode::Clear)
/// maps to the proportional [`clear`].
#[inline]
pub fn clear_eraser(base: Rgba, blend: Rgba) -> Rgba {
    if blend.a > 0.0 { base.with_alpha(0.0) } else { base }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_half_alpha() {
        let base = Rgba::new(0.0, 0.0, 1.0, 0.5);
        let top = Rgba::new(1.0, 0.0, 0.0, 0.5);
        let out = normal(base, top);
        assert_relative_eq!(out.r, 0.5);
        assert_relative_eq!(out.b, 0.5);
        assert_relative_eq!(out.a, 0.75);
    }

    #[test]
    fn test_normal_opaque_is_blend() {
        let base = Rgba::new(0.3, 0.6, 0.9, 0.5);
        let top = Rgba::rgb(0.1, 0.2, 0.3);
        assert_eq!(normal(base, top), top);
    }

    #[test]
    fn test_dissolve_threshold() {
        let base = Rgba::BLACK;
        let top = Rgba::new(1.0, 1.0, 1.0, 0.3);
        assert_eq!(dissolve_with(base, top, 0.29), top);
        assert_eq!(dissolve_with(base, top, 0.3), base);
        assert_eq!(dissolve_with(base, top, 0.9), base);
    }

    #[test]
    fn test_dissolve_random_picks_an_input() {
        let base = Rgba::BLACK;
        let top = Rgba::new(1.0, 1.0, 1.0, 0.5);
        for _ in 0..32 {
            let out = dissolve(base, top);
            assert!(out == base || out == top);
        }
    }

    #[test]
    fn test_position_hash_range_and_stability() {
        for i in 0..200 {
            let p = Position::new(i as f32 * 1.7, i as f32 * 0.3);
            let h = position_hash(p);
            assert!((0.0..1.0).contains(&h), "hash {h} out of range at {p}");
            assert_eq!(h, position_hash(p));
        }
        assert_eq!(position_hash(Position::ZERO), 0.0);
    }

    #[test]
    fn test_dissolve_at_uses_hash() {
        let base = Rgba::BLACK;
        let p = Position::new(12.0, 34.0);
        let h = position_hash(p);
        assert_eq!(dissolve_at(base, Rgba::WHITE.with_alpha(h + 0.01), p).r, 1.0);
        assert_eq!(dissolve_at(base, Rgba::WHITE.with_alpha(h), p), base);
    }

    #[test]
    fn test_behind_opaque_base_wins() {
        let base = Rgba::rgb(0.2, 0.3, 0.4);
        assert_eq!(behind(base, Rgba::new(1.0, 0.0, 0.0, 0.7)), base);
    }

    #[test]
    fn test_behind_transparent_base() {
        let base = Rgba::new(0.0, 0.0, 1.0, 0.25);
        let under = Rgba::new(1.0, 0.0, 0.0, 0.5);
        let out = behind(base, under);
        // normal(under, base): base is the top layer at alpha 0.25
        assert_relative_eq!(out.r, 0.75);
        assert_relative_eq!(out.b, 0.25);
        assert_relative_eq!(out.a, 0.625);
    }

    #[test]
    fn test_clear() {
        let base = Rgba::new(0.4, 0.5, 0.6, 0.8);
        let out = clear(base, Rgba::new(0.0, 0.0, 0.0, 0.25));
        assert_eq!((out.r, out.g, out.b), (0.4, 0.5, 0.6));
        assert_relative_eq!(out.a, 0.6, epsilon = 1e-6);
        assert_eq!(clear(base, Rgba::WHITE).a, 0.0);
    }

    #[test]
    fn test_clear_eraser() {
        let base = Rgba::new(0.4, 0.5, 0.6, 0.8);
        assert_eq!(clear_eraser(base, Rgba::gray(1.0, 0.01)).a, 0.0);
        assert_eq!(clear_eraser(base, Rgba::TRANSPARENT), base);
    }
}
