use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use diecut::{init_logging, TrayParameters, TrayPatternMaker, BUILD_DATE, VERSION};

/// Generate a die-cut SVG pattern for a small folded card tray.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tray width in mm
    #[arg(long, default_value_t = 60.0)]
    width: f64,

    /// Tray depth in mm
    #[arg(long, default_value_t = 75.0)]
    depth: f64,

    /// Wall height in mm
    #[arg(long, default_value_t = 30.0)]
    height: f64,

    /// Material thickness in mm
    #[arg(long, default_value_t = 0.1)]
    thick: f64,

    /// Name of the output SVG file
    #[arg(long, default_value = "diecut_tray.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::debug!(version = VERSION, built = BUILD_DATE, "starting diecut");

    let params = TrayParameters {
        width: cli.width,
        depth: cli.depth,
        height: cli.height,
        thickness: cli.thick,
    };

    let mut maker = TrayPatternMaker::new(params);
    maker.generate();
    maker
        .write_svg(&cli.output)
        .with_context(|| format!("Failed to write output file: {}", cli.output.display()))?;

    println!(
        "SVG file '{}' has been created successfully!",
        cli.output.display()
    );

    Ok(())
}
