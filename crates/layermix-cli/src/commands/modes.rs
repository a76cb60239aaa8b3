//! Modes command

use anyhow::Result;

use layermix_ops::BlendGroup;

use crate::ModesArgs;

pub fn run(args: ModesArgs, verbose: u8) -> Result<()> {
    let groups: Vec<BlendGroup> = match args.group {
        Some(g) => vec![g],
        None => BlendGroup::ALL.to_vec(),
    };

    for group in groups {
        println!("{}:", group);
        for mode in group.modes() {
            if verbose > 0 {
                let alpha = if mode.is_special_alpha() { " (special alpha)" } else { "" };
                println!("  {:<14} {}{}", mode.name(), mode.display_name(), alpha);
            } else {
                println!("  {}", mode.name());
            }
        }
    }

    Ok(())
}
