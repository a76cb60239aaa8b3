//! Blend mode and blend group enumerations.
//!
//! The 29 modes follow the Photoshop grouping. The enum is the only
//! dispatch key: [`BlendMode::function`] matches on it exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{OpsError, OpsResult};

/// Blend mode for compositing a blend color onto a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    // Normal group
    /// Straight alpha "over".
    #[default]
    Normal,
    /// Stochastic replace, thresholded on blend alpha.
    Dissolve,
    /// Blend painted behind the base.
    Behind,
    /// Erase base alpha by blend alpha.
    Clear,

    // Darken group
    /// Per-channel minimum.
    Darken,
    /// Per-channel product.
    Multiply,
    /// Darken by increasing contrast.
    ColorBurn,
    /// `base + blend - 1`.
    LinearBurn,
    /// Whole color with the lower luminance.
    DarkerColor,

    // Lighten group
    /// Per-channel maximum.
    Lighten,
    /// Inverse multiply.
    Screen,
    /// Brighten by decreasing contrast.
    ColorDodge,
    /// Add.
    LinearDodge,
    /// Whole color with the higher luminance.
    LighterColor,

    // Contrast group
    /// Multiply or screen, keyed on base.
    Overlay,
    /// Gentle overlay.
    SoftLight,
    /// Multiply or screen, keyed on blend.
    HardLight,
    /// Color burn or color dodge, keyed on blend.
    VividLight,
    /// Linear burn or linear dodge, keyed on blend.
    LinearLight,
    /// Darken or lighten, keyed on blend.
    PinLight,
    /// Vivid light thresholded to 0 or 1.
    HardMix,

    // Comparative group
    /// `|base - blend|`.
    Difference,
    /// Low contrast difference.
    Exclusion,
    /// `base - blend`, alpha subtracted too.
    Subtract,
    /// `base / blend`.
    Divide,

    // HSL group
    /// Blend hue, base saturation and lightness.
    Hue,
    /// Blend saturation, base hue and lightness.
    Saturation,
    /// Blend hue and saturation, base lightness.
    Color,
    /// Blend lightness, base hue and saturation.
    Luminosity,
}

/// Semantic group of a [`BlendMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendGroup {
    /// Normal, Dissolve, Behind, Clear.
    Normal,
    /// Darken, Multiply, ColorBurn, LinearBurn, DarkerColor.
    Darken,
    /// Lighten, Screen, ColorDodge, LinearDodge, LighterColor.
    Lighten,
    /// Overlay through HardMix.
    Contrast,
    /// Difference, Exclusion, Subtract, Divide.
    Comparative,
    /// Hue, Saturation, Color, Luminosity.
    Hsl,
}

impl BlendMode {
    /// All modes in declaration (and menu) order.
    pub const ALL: [BlendMode; 29] = [
        Self::Normal,
        Self::Dissolve,
        Self::Behind,
        Self::Clear,
        Self::Darken,
        Self::Multiply,
        Self::ColorBurn,
        Self::LinearBurn,
        Self::DarkerColor,
        Self::Lighten,
        Self::Screen,
        Self::ColorDodge,
        Self::LinearDodge,
        Self::LighterColor,
        Self::Overlay,
        Self::SoftLight,
        Self::HardLight,
        Self::VividLight,
        Self::LinearLight,
        Self::PinLight,
        Self::HardMix,
        Self::Difference,
        Self::Exclusion,
        Self::Subtract,
        Self::Divide,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// The group this mode belongs to.
    pub fn group(self) -> BlendGroup {
        use BlendMode::*;
        match self {
            Normal | Dissolve | Behind | Clear => BlendGroup::Normal,
            Darken | Multiply | ColorBurn | LinearBurn | DarkerColor => BlendGroup::Darken,
            Lighten | Screen | ColorDodge | LinearDodge | LighterColor => BlendGroup::Lighten,
            Overlay | SoftLight | HardLight | VividLight | LinearLight | PinLight | HardMix => {
                BlendGroup::Contrast
            }
            Difference | Exclusion | Subtract | Divide => BlendGroup::Comparative,
            Hue | Saturation | Color | Luminosity => BlendGroup::Hsl,
        }
    }

    /// Kebab-case identifier, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dissolve => "dissolve",
            Self::Behind => "behind",
            Self::Clear => "clear",
            Self::Darken => "darken",
            Self::Multiply => "multiply",
            Self::ColorBurn => "color-burn",
            Self::LinearBurn => "linear-burn",
            Self::DarkerColor => "darker-color",
            Self::Lighten => "lighten",
            Self::Screen => "screen",
            Self::ColorDodge => "color-dodge",
            Self::LinearDodge => "linear-dodge",
            Self::LighterColor => "lighter-color",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft-light",
            Self::HardLight => "hard-light",
            Self::VividLight => "vivid-light",
            Self::LinearLight => "linear-light",
            Self::PinLight => "pin-light",
            Self::HardMix => "hard-mix",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }

    /// Human readable name as shown in a layer panel.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Dissolve => "Dissolve",
            Self::Behind => "Behind",
            Self::Clear => "Clear",
            Self::Darken => "Darken",
            Self::Multiply => "Multiply",
            Self::ColorBurn => "Color Burn",
            Self::LinearBurn => "Linear Burn",
            Self::DarkerColor => "Darker Color",
            Self::Lighten => "Lighten",
            Self::Screen => "Screen",
            Self::ColorDodge => "Color Dodge",
            Self::LinearDodge => "Linear Dodge (Add)",
            Self::LighterColor => "Lighter Color",
            Self::Overlay => "Overlay",
            Self::SoftLight => "Soft Light",
            Self::HardLight => "Hard Light",
            Self::VividLight => "Vivid Light",
            Self::LinearLight => "Linear Light",
            Self::PinLight => "Pin Light",
            Self::HardMix => "Hard Mix",
            Self::Difference => "Difference",
            Self::Exclusion => "Exclusion",
            Self::Subtract => "Subtract",
            Self::Divide => "Divide",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Color => "Color",
            Self::Luminosity => "Luminosity",
        }
    }

    /// Modes whose alpha interacts with the formula, so an opaque blend
    /// color must not short-circuit them.
    pub fn is_special_alpha(self) -> bool {
        matches!(self, Self::Behind | Self::Clear | Self::Dissolve) || self.is_hsl()
    }

    /// Hue, Saturation, Color or Luminosity.
    pub fn is_hsl(self) -> bool {
        self.group() == BlendGroup::Hsl
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop separators so `Color Burn`, `color_burn`,
/// `color-burn` and `ColorBurn` all compare equal.
fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for BlendMode {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        let key = compact(s.trim());
        match key.as_str() {
            "over" => return Ok(Self::Normal),
            "add" => return Ok(Self::LinearDodge),
            "mult" => return Ok(Self::Multiply),
            "sub" => return Ok(Self::Subtract),
            "diff" => return Ok(Self::Difference),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|m| compact(m.name()) == key)
            .ok_or_else(|| OpsError::UnknownMode(s.to_string()))
    }
}

impl BlendGroup {
    /// All groups in menu order.
    pub const ALL: [BlendGroup; 6] = [
        Self::Normal,
        Self::Darken,
        Self::Lighten,
        Self::Contrast,
        Self::Comparative,
        Self::Hsl,
    ];

    /// Modes belonging to this group, in menu order.
    pub fn modes(self) -> impl Iterator<Item = BlendMode> {
        BlendMode::ALL.into_iter().filter(move |m| m.group() == self)
    }

    /// Kebab-case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Contrast => "contrast",
            Self::Comparative => "comparative",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for BlendGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendGroup {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        let key = compact(s.trim());
        Self::ALL
            .into_iter()
            .find(|g| g.name() == key)
            .ok_or_else(|| OpsError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sizes() {
        let sizes: Vec<usize> = BlendGroup::ALL.iter().map(|g| g.modes().count()).collect();
        assert_eq!(sizes, vec![4, 5, 5, 7, 4, 4]);
        assert_eq!(BlendMode::ALL.len(), 29);
    }

    #[test]
    fn test_special_alpha_modes() {
        let special: Vec<BlendMode> = BlendMode::ALL
            .into_iter()
            .filter(|m| m.is_special_alpha())
            .collect();
        assert_eq!(
            special,
            vec![
                BlendMode::Dissolve,
                BlendMode::Behind,
                BlendMode::Clear,
                BlendMode::Hue,
                BlendMode::Saturation,
                BlendMode::Color,
                BlendMode::Luminosity,
            ]
        );
    }

    #[test]
    fn test_parse_names() {
        for mode in BlendMode::ALL {
            assert_eq!(mode.name().parse::<BlendMode>().unwrap(), mode);
            assert_eq!(mode.to_string().parse::<BlendMode>().unwrap(), mode);
        }
        assert_eq!("Color Burn".parse::<BlendMode>().unwrap(), BlendMode::ColorBurn);
        assert_eq!("soft_light".parse::<BlendMode>().unwrap(), BlendMode::SoftLight);
        assert_eq!("HardMix".parse::<BlendMode>().unwrap(), BlendMode::HardMix);
        assert_eq!("add".parse::<BlendMode>().unwrap(), BlendMode::LinearDodge);
        assert_eq!("over".parse::<BlendMode>().unwrap(), BlendMode::Normal);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "glow".parse::<BlendMode>().unwrap_err();
        assert!(matches!(err, OpsError::UnknownMode(ref s) if s == "glow"));
        assert!(matches!("bright".parse::<BlendGroup>(), Err(OpsError::UnknownGroup(_))));
        assert_eq!("HSL".parse::<BlendGroup>().unwrap(), BlendGroup::Hsl);
    }

    #[test]
    fn test_serde_names_match() {
        for mode in BlendMode::ALL {
            let yaml = serde_yaml::to_string(&mode).unwrap();
            assert_eq!(yaml.trim(), mode.name());
        }
    }
}
