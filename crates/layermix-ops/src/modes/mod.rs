//! Per-mode blend formulas, one submodule per Photoshop group.
//!
//! Every function takes `(base, blend)` straight-alpha colors and returns the
//! blended color. None of them apply the transparent or opaque fast paths;
//! that is [`crate::blend`]'s job.

pub mod comparative;
pub mod contrast;
pub mod darken;
pub mod hsl;
pub mod lighten;
pub mod normal;

pub use comparative::{difference, divide, exclusion, subtract, DIVIDE_EPSILON, DIVIDE_ZERO_FLOOR};
pub use contrast::{
    hard_light, hard_mix, linear_light, overlay, pin_light, soft_light, vivid_light,
};
pub use darken::{color_burn, darken, darker_color, linear_burn, multiply};
pub use hsl::{color, hue, luminosity, saturation};
pub use lighten::{color_dodge, lighten, lighter_color, linear_dodge, screen};
pub use normal::{
    behind, clear, clear_eraser, dissolve, dissolve_at, dissolve_with, normal, position_hash,
};
