//! Straight-alpha RGBA color values.
//!
//! [`Rgba`] is the only color type the blend engine works with: four `f32`
//! channels in the linear 0..1 model. Channels are not clamped on
//! construction, some blend formulas deliberately overshoot before their
//! own final clamp.
//!
//! # Example
//!
//! ```
//! use layermix_core::Rgba;
//!
//! let red = Rgba::rgb(1.0, 0.0, 0.0);
//! let half = red.with_alpha(0.5);
//! assert_eq!(half.a, 0.5);
//! assert_eq!(red.to_hex(false), "#FF0000");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

// ============================================================================
// Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Rec.601 weights used by [`Rgba::grayscale`].
pub const REC601_LUMA: [f32; 3] = [0.299, 0.587, 0.114];

/// Default tolerance for [`Rgba::approx_eq_default`].
pub const DEFAULT_TOLERANCE: f32 = 0.001;

/// Calculate Rec.709 luminance from RGB values.
///
/// ```
/// use layermix_core::luminance_rec709;
/// let luma = luminance_rec709([0.5, 0.3, 0.2]);
/// assert!((luma - 0.3353).abs() < 0.0001);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// Clamps a value to [0, 1].
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// RGBA color with straight (non-premultiplied) alpha.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel value.
    pub r: f32,
    /// Green channel value.
    pub g: f32,
    /// Blue channel value.
    pub b: f32,
    /// Alpha channel value.
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a grayscale color with equal RGB values.
    #[inline]
    pub const fn gray(v: f32, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    /// Copy with the red channel replaced.
    #[inline]
    pub const fn with_r(self, r: f32) -> Self {
        Self { r, ..self }
    }

    /// Copy with the green channel replaced.
    #[inline]
    pub const fn with_g(self, g: f32) -> Self {
        Self { g, ..self }
    }

    /// Copy with the blue channel replaced.
    #[inline]
    pub const fn with_b(self, b: f32) -> Self {
        Self { b, ..self }
    }

    /// Copy with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Get RGBA values as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Apply a function to RGB channels (preserving alpha).
    #[inline]
    pub fn map_rgb<F: Fn(f32) -> f32>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Apply a function to all channels including alpha.
    #[inline]
    pub fn map<F: Fn(f32) -> f32>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    /// Combine the RGB channels of two colors pairwise, taking `alpha` as
    /// the output alpha.
    #[inline]
    pub fn zip_rgb<F: Fn(f32, f32) -> f32>(self, other: Self, alpha: f32, f: F) -> Self {
        Self::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            alpha,
        )
    }

    /// Linear interpolation on all four channels. `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// `1 - c` on RGB, and on alpha too unless `preserve_alpha`.
    #[inline]
    pub fn invert(self, preserve_alpha: bool) -> Self {
        let inverted = self.map_rgb(|c| 1.0 - c);
        if preserve_alpha {
            inverted
        } else {
            inverted.with_alpha(1.0 - self.a)
        }
    }

    /// Rec.709 relative luminance of the RGB channels.
    #[inline]
    pub fn luminance(self) -> f32 {
        luminance_rec709([self.r, self.g, self.b])
    }

    /// Rec.601 gray value (`0.299 r + 0.587 g + 0.114 b`).
    #[inline]
    pub fn grayscale(self) -> f32 {
        self.r * REC601_LUMA[0] + self.g * REC601_LUMA[1] + self.b * REC601_LUMA[2]
    }

    /// Replace RGB with [`grayscale`](Self::grayscale), keeping alpha.
    #[inline]
    pub fn to_grayscale(self) -> Self {
        Self::gray(self.grayscale(), self.a)
    }

    /// Clamp every channel to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(clamp01)
    }

    /// True when every channel differs by strictly less than `tolerance`.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: f32) -> bool {
        (self.r - other.r).abs() < tolerance
            && (self.g - other.g).abs() < tolerance
            && (self.b - other.b).abs() < tolerance
            && (self.a - other.a).abs() < tolerance
    }

    /// [`approx_eq`](Self::approx_eq) with [`DEFAULT_TOLERANCE`].
    #[inline]
    pub fn approx_eq_default(self, other: Self) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }

    /// Check if color is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Check if color is fully transparent.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Format as `#RRGGBB` or `#RRGGBBAA` (channels clamped, then rounded).
    pub fn to_hex(self, include_alpha: bool) -> String {
        let byte = |v: f32| (clamp01(v) * 255.0).round() as u8;
        if include_alpha {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        } else {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidHex {
            input: input.to_string(),
        };
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let pair = |i: usize| -> CoreResult<f32> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let mut ch = [0.0f32; 3];
                for (slot, c) in ch.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).ok_or_else(invalid)?;
                    *slot = (v * 17) as f32 / 255.0;
                }
                Ok(Self::rgb(ch[0], ch[1], ch[2]))
            }
            6 => Ok(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Ok(Self::new(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgba> for [f32; 4] {
    #[inline]
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = CoreError;

    /// Accepts hex (`#FF8000`), comma separated floats (`1,0.5,0` or
    /// `1,0.5,0,0.25`) and the `rgba(...)` form produced by `Display`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        let body = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(CoreError::InvalidColor {
                input: s.to_string(),
                reason: format!("expected 3 or 4 components, got {}", parts.len()),
            });
        }

        const NAMES: [&str; 4] = ["r", "g", "b", "a"];
        let mut ch = [1.0f32; 4];
        for (i, part) in parts.iter().enumerate() {
            ch[i] = part.parse::<f32>().map_err(|_| CoreError::InvalidComponent {
                what: NAMES[i],
                value: part.to_string(),
            })?;
        }
        Ok(Self::from_array(ch))
    }
}
