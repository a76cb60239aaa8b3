//! HSL group: hue, saturation, color, luminosity.
//!
//! Each mode splits both colors into hue, saturation and lightness, swaps
//! one or two components from the blend color into the base, and converts
//! back. Output alpha is `base.a`.
//!
//! The HSL representation is private to this module.

use layermix_core::Rgba;

/// Below this, chroma is treated as zero and hue is undefined.
const ACHROMATIC_EPSILON: f32 = 1e-4;

/// Hue, saturation, lightness and alpha, all in [0, 1]. Hue wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Hsl {
    h: f32,
    s: f32,
    l: f32,
    a: f32,
}

fn rgb_to_hsl(c: Rgba) -> Hsl {
    let (r, g, b) = (c.r, c.g, c.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta <= ACHROMATIC_EPSILON {
        return Hsl { h: 0.0, s: 0.0, l, a: c.a };
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    // max is bitwise one of r, g, b so exact comparison picks the branch
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl { h: h / 6.0, s, l, a: c.a }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn hsl_to_rgb(hsl: Hsl) -> Rgba {
    let Hsl { h, s, l, a } = hsl;
    if s <= ACHROMATIC_EPSILON {
        return Rgba::new(l, l, l, a);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgba::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

/// Blend hue with base saturation and lightness.
pub fn hue(base: Rgba, blend: Rgba) -> Rgba {
    let b = rgb_to_hsl(base);
    let t = rgb_to_hsl(blend);
    hsl_to_rgb(Hsl { h: t.h, ..b })
}

/// Blend saturation with base hue and lightness.
pub fn saturation(base: Rgba, blend: Rgba) -> Rgba {
    let b = rgb_to_hsl(base);
    let t = rgb_to_hsl(blend);
    hsl_to_rgb(Hsl { s: t.s, ..b })
}

/// Blend hue and saturation with base lightness. Colorizes while keeping
/// the brightness structure of the base.
pub fn color(base: Rgba, blend: Rgba) -> Rgba {
    let b = rgb_to_hsl(base);
    let t = rgb_to_hsl(blend);
    hsl_to_rgb(Hsl { h: t.h, s: t.s, ..b })
}

/// Blend lightness with base hue and saturation.
pub fn luminosity(base: Rgba, blend: Rgba) -> Rgba {
    let b = rgb_to_hsl(base);
    let t = rgb_to_hsl(blend);
    hsl_to_rgb(Hsl { l: t.l, ..b })
}
