//! Blend command

use anyhow::{bail, Result};
use tracing::{debug, warn};

use layermix_core::Rgba;
use layermix_ops::{dissolve_with, BlendConfig, BlendEngine, BlendMode};

use crate::BlendArgs;

pub fn run(args: BlendArgs, mut config: BlendConfig, verbose: u8) -> Result<()> {
    if args.no_fast_path {
        config.opaque_fast_path = false;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    debug!(?config, mode = %args.mode, "blend");

    if verbose > 0 {
        println!(
            "Blending {} onto {} with mode '{}'",
            args.blend,
            args.base,
            args.mode.display_name()
        );
    }

    let result = match args.random {
        Some(value) => fixed_dissolve(&args, value)?,
        None => {
            let mut engine = BlendEngine::new(config);
            engine.blend(args.base, args.blend, args.mode, args.position)
        }
    };

    println!("{}", super::format_color(result, args.hex));
    Ok(())
}

/// Dissolve with a caller-chosen decision value instead of a draw.
fn fixed_dissolve(args: &BlendArgs, value: f32) -> Result<Rgba> {
    if !(0.0..1.0).contains(&value) {
        bail!("--random must be in [0, 1), got {value}");
    }
    if args.mode != BlendMode::Dissolve {
        warn!(mode = %args.mode, "--random only affects dissolve, ignoring");
        return Ok(layermix_ops::blend(args.base, args.blend, args.mode, args.position));
    }
    Ok(dissolve_with(args.base, args.blend, value))
}
