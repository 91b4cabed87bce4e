//! Retint: apply tone and color adjustments to an image from the command line.
//!
//! `retint render` decodes an image, applies a preset and/or explicit
//! adjustments, and writes the result as PNG. `retint presets` lists the
//! available presets.

mod config;
mod image_loader;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "retint")]
#[command(author, version, about = "Tone and color adjustments for still images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (ignored when RETINT_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Adjust an image and export it as PNG
    Render(render::RenderArgs),
    /// List available presets
    Presets(PresetsArgs),
}

#[derive(Args)]
struct PresetsArgs {
    /// Print the full preset records as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter(cli.verbose)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => {
            let output = render::run(args, &config)?;
            println!("{}", output.display());
        }
        Commands::Presets(args) => list_presets(&config, args.json)?,
    }
    Ok(())
}

fn list_presets(config: &CliConfig, json: bool) -> Result<()> {
    let presets = config.presets()?;
    if json {
        println!("{}", presets.to_json()?);
    } else {
        for name in presets.names() {
            println!("{name}");
        }
    }
    Ok(())
}
