//! 2D sample position.
//!
//! Only the dissolve mode looks at positions; every other blend is
//! position independent.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Pixel or sample coordinate.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a position.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = CoreError;

    /// Parses `x,y`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let (x, y) = s.split_once(',').ok_or_else(|| CoreError::InvalidPosition {
            input: s.to_string(),
        })?;
        let parse = |what: &'static str, v: &str| {
            v.trim().parse::<f32>().map_err(|_| CoreError::InvalidComponent {
                what,
                value: v.trim().to_string(),
            })
        };
        Ok(Self::new(parse("x", x)?, parse("y", y)?))
    }
}
