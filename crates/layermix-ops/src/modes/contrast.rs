//! Contrast group.
//!
//! Every mode here darkens where one input is below 50% gray and lightens
//! where it is above. Output alpha is always `base.a`.

use layermix_core::{clamp01, Rgba};

fn overlay_channel(base: f32, blend: f32) -> f32 {
    if base < 0.5 {
        2.0 * base * blend
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - blend)
    }
}

fn soft_light_channel(base: f32, blend: f32) -> f32 {
    if blend <= 0.5 {
        base - (1.0 - 2.0 * blend) * base * (1.0 - base)
    } else {
        let d = if base < 0.25 {
            ((16.0 * base - 12.0) * base + 4.0) * base
        } else {
            base.sqrt()
        };
        base + (2.0 * blend - 1.0) * (d - base)
    }
}

fn hard_light_channel(base: f32, blend: f32) -> f32 {
    if blend < 0.5 {
        2.0 * base * blend
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - blend)
    }
}

fn vivid_light_channel(base: f32, blend: f32) -> f32 {
    let v = if blend <= 0.5 {
        if blend <= 0.0 {
            0.0
        } else {
            1.0 - (1.0 - base) / (2.0 * blend)
        }
    } else if blend >= 1.0 {
        1.0
    } else {
        base / (2.0 * (1.0 - blend))
    };
    clamp01(v)
}

fn linear_light_channel(base: f32, blend: f32) -> f32 {
    let v = if blend <= 0.5 {
        base + 2.0 * blend - 1.0
    } else {
        base + 2.0 * (blend - 0.5)
    };
    clamp01(v)
}

fn pin_light_channel(base: f32, blend: f32) -> f32 {
    let v = if blend <= 0.5 {
        base.min(2.0 * blend)
    } else {
        base.max(2.0 * (blend - 0.5))
    };
    clamp01(v)
}

fn hard_mix_channel(base: f32, blend: f32) -> f32 {
    if vivid_light_channel(base, blend) < 0.5 { 0.0 } else { 1.0 }
}

/// Multiply where the base is dark, screen where it is light.
///
/// The branch is keyed on the base channel; compare [`hard_light`].
#[inline]
pub fn overlay(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, overlay_channel)
}

/// Softer overlay, like a diffused spotlight.
///
/// Uses the W3C compositing formula: above 50% blend the base is pushed
/// toward `sqrt(base)` (or a cubic for very dark bases).
#[inline]
pub fn soft_light(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, soft_light_channel)
}

/// Overlay with the branch keyed on the blend channel.
#[inline]
pub fn hard_light(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, hard_light_channel)
}

/// Color burn for dark blend channels, color dodge for light ones, both
/// with the blend value doubled around the midpoint.
#[inline]
pub fn vivid_light(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, vivid_light_channel)
}

/// Linear burn below the midpoint, linear dodge above.
#[inline]
pub fn linear_light(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, linear_light_channel)
}

/// Darken below the midpoint, lighten above.
#[inline]
pub fn pin_light(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, pin_light_channel)
}

/// Vivid light posterized to 0 or 1 per channel.
#[inline]
pub fn hard_mix(base: Rgba, blend: Rgba) -> Rgba {
    base.zip_rgb(blend, base.a, hard_mix_channel)
}
