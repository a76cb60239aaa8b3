//! layermix - blend two colors with Photoshop layer modes

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use layermix_core::{Position, Rgba};
use layermix_ops::{BlendGroup, BlendMode};

mod commands;

#[derive(Parser)]
#[command(name = "layermix")]
#[command(author, version, about = "Blend two colors with Photoshop layer modes")]
#[command(long_about = "
Composites a blend color onto a base color using any of the 29 Photoshop
layer blend modes.

Colors are straight-alpha RGBA and may be written as hex (#RRGGBB,
#RRGGBBAA, #RGB) or as comma separated floats (r,g,b or r,g,b,a).

Examples:
  layermix blend '#FF0000' '#00FF0080' -m multiply
  layermix blend 0.2,0.5,0.8 0.8,0.5,0.2 -m difference --hex
  layermix blend '#000000' '#FFFFFF80' -m dissolve --position 12,34
  layermix modes --group contrast
  layermix table '#336699' '#CC9966AA'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// YAML blend config (opaque_fast_path, dissolve, seed)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Blend one color onto another
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// List blend modes by group
    #[command(visible_alias = "ls")]
    Modes(ModesArgs),

    /// Show the result of every mode for one color pair
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

#[derive(Args)]
struct BlendArgs {
    /// Base (bottom) color
    base: Rgba,

    /// Blend (top) color
    blend: Rgba,

    /// Blend mode name
    #[arg(short, long, default_value = "normal")]
    mode: BlendMode,

    /// Sample position for dissolve, as x,y
    #[arg(short, long)]
    position: Option<Position>,

    /// Fixed dissolve decision value in [0, 1)
    #[arg(short, long)]
    random: Option<f32>,

    /// Always run the mode formula, even for an opaque blend color
    #[arg(long)]
    no_fast_path: bool,

    /// Seed for the dissolve generator
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as hex
    #[arg(long)]
    hex: bool,
}

#[derive(Args)]
struct ModesArgs {
    /// Only list this group
    #[arg(short, long)]
    group: Option<BlendGroup>,
}

#[derive(Args)]
struct TableArgs {
    /// Base (bottom) color
    base: Rgba,

    /// Blend (top) color
    blend: Rgba,

    /// Print results as hex
    #[arg(long)]
    hex: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Blend(args) => commands::blend::run(args, config, cli.verbose),
        Commands::Modes(args) => commands::modes::run(args, cli.verbose),
        Commands::Table(args) => commands::table::run(args, config, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_blend() {
        let cli = Cli::try_parse_from([
            "layermix", "-vv", "blend", "#FF0000", "0,1,0,0.5", "-m", "Color Burn", "--position", "3,4",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Blend(args) = cli.command else {
            panic!("expected blend");
        };
        assert_eq!(args.base, Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(args.blend, Rgba::new(0.0, 1.0, 0.0, 0.5));
        assert_eq!(args.mode, BlendMode::ColorBurn);
        assert_eq!(args.position, Some(Position::new(3.0, 4.0)));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["layermix", "blend", "#000", "#FFF", "-m", "glow"]).is_err());
        assert!(Cli::try_parse_from(["layermix", "modes", "--group", "bright"]).is_err());
    }

    #[test]
    fn test_format_color() {
        let c = Rgba::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(commands::format_color(c, true), "#FF0000FF");
        let inf = Rgba::new(f32::INFINITY, 0.0, 0.0, 1.0);
        assert_eq!(commands::format_color(inf, true), inf.to_string());
    }
}
