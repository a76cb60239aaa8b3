//! Lighten group, the mirror image of the darken group.
//!
//! Output alpha is the maximum of the two input alphas, except for
//! [`lighter_color`] which returns one of its inputs whole.

use layermix_core::{clamp01, Rgba};

#[inline]
fn max_alpha(base: Rgba, blend: Rgba) -> f32 {
    base.a.max(blend.a)
}

/// Per-channel maximum.
#[inline]
pub fn lighten(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, max_alpha(base, blend), f32::max)
}

/// Inverse multiply: `1 - (1 - base) * (1 - blend)`.
#[inline]
pub fn screen(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, max_alpha(base, blend), |a, b| {
        1.0 - (1.0 - a) * (1.0 - b)
    })
}

fn color_dodge_channel(base: f32, blend: f32) -> f32 {
    if blend >= 1.0 {
        return 1.0;
    }
    clamp01(base / (1.0 - blend))
}

/// Brighten the base by decreasing contrast with the blend color.
#[inline]
pub fn color_dodge(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, max_alpha(base, blend), color_dodge_channel)
}

/// Additive blend, `clamp01(base + blend)`.
#[inline]
pub fn linear_dodge(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, max_alpha(base, blend), |a, b| clamp01(a + b))
}

/// Whichever whole color has the higher Rec.709 luminance. Ties pick `blend`.
#[inline]
pub fn lighter_color(base: Rgba, blend: Rgba) -> Rgba {
    if base.luminance() > blend.luminance() { base } else { blend }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lighten() {
        let out = lighten(Rgba::new(0.2, 0.8, 0.5, 0.9), Rgba::new(0.6, 0.1, 0.5, 0.4));
        assert_eq!(out, Rgba::new(0.6, 0.8, 0.5, 0.9));
    }

    #[test]
    fn test_screen_black_white() {
        assert_eq!(screen(Rgba::BLACK, Rgba::WHITE), Rgba::WHITE);
        let out = screen(Rgba::gray(0.5, 1.0), Rgba::gray(0.5, 1.0));
        assert_relative_eq!(out.r, 0.75);
    }

    #[test]
    fn test_color_dodge() {
        assert_eq!(color_dodge_channel(0.0, 1.0), 1.0);
        assert_relative_eq!(color_dodge_channel(0.25, 0.5), 0.5);
        assert_eq!(color_dodge_channel(0.8, 0.5), 1.0);
    }

    #[test]
    fn test_linear_dodge_clamps() {
        let out = linear_dodge(Rgba::new(0.75, 0.25, 0.0, 0.2), Rgba::new(0.5, 0.25, 0.0, 0.6));
        assert_eq!(out.r, 1.0);
        assert_relative_eq!(out.g, 0.5);
        assert_eq!(out.a, 0.6);
    }

    #[test]
    fn test_lighter_color() {
        let green = Rgba::rgb(0.0, 1.0, 0.0);
        let red = Rgba::rgb(1.0, 0.0, 0.0);
        assert_eq!(lighter_color(red, green), green);
        assert_eq!(lighter_color(green, red), green);
    }
}
