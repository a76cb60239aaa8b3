//! Table command: every mode for one color pair

use anyhow::Result;
use tracing::trace;

use layermix_ops::{BlendConfig, BlendEngine, BlendGroup, BlendMode};

use crate::TableArgs;

/// Prints the raw formula output of each mode, so an opaque blend color
/// still shows what every mode computes. Dissolve goes through the engine
/// since it has no fixed formula.
pub fn run(args: TableArgs, config: BlendConfig, verbose: u8) -> Result<()> {
    let mut engine = BlendEngine::new(config);

    if verbose > 0 {
        println!("base  {}", super::format_color(args.base, args.hex));
        println!("blend {}", super::format_color(args.blend, args.hex));
        println!();
    }

    for group in BlendGroup::ALL {
        println!("{}:", group);
        for mode in group.modes() {
            let result = match mode.function() {
                Some(f) => f(args.base, args.blend),
                None => engine.blend(args.base, args.blend, BlendMode::Dissolve, None),
            };
            trace!(%mode, %result, "table row");
            println!(
                "  {:<20} {}",
                mode.display_name(),
                super::format_color(result, args.hex)
            );
        }
    }

    Ok(())
}
