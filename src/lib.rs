//! # Diecut
//!
//! Generates laser-cuttable die-cut SVG patterns for small folded card
//! trays with double-fold walls, interlocking flaps, and a bottom insert
//! panel. Intended for cutting cardstock on a laser cutting machine.
//!
//! ## Architecture
//!
//! The project is organized as a workspace:
//!
//! 1. **diecut-pattern** - Geometry derivation, segment styling, and SVG
//!    document emission
//! 2. **diecut** - Command line binary wrapping the generator
//!
//! The bottom insert panel (blue outline in the resulting SVG) is rotated
//! off the main pattern and should be repositioned in the laser cutting
//! software so it does not overlap the rest of the die cut.

pub use diecut_pattern::{
    CutClass, PathElement, PatternError, PatternResult, Point, Rotation, Segment, TrayParameters,
    TrayPatternMaker, TrayPoints, PAGE_HEIGHT, PAGE_WIDTH,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr (the success message goes to stdout)
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
