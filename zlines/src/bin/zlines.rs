//! Plot a redshifted galaxy model spectrum with NIR/IR bandpasses underlaid
//! and emission lines marked, with a second panel of JWST spectroscopic
//! coverage below.
//!
//! Usage:
//! ```
//! zlines [REDSHIFT]
//! ```
//!
//! With no redshift given, the run falls back to z=7.5032 and says so.

use std::path::Path;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use bandpass::{LineSet, ModelParams, ModelSpectrum};
use zlines::args::{self, Args};
use zlines::figure::{self, OUTPUT_FILENAME};
use zlines::viewer;

fn main() -> anyhow::Result<()> {
    // Initialize logging from environment variables
    env_logger::init();

    // A literal `help` argument prints usage and exits; it never falls
    // through to a render with defaulted arguments.
    if args::literal_help_requested() {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    let parsed = Args::parse();
    if parsed.mode.is_some() {
        log::warn!("the combined view takes no mode argument, ignoring it");
    }
    let redshift = parsed.resolve_redshift();

    let model = ModelParams::default();
    let spectrum = ModelSpectrum::from_con_file(Path::new(&model.filename()))
        .with_context(|| format!("loading {model}"))?;

    let mut lines = LineSet::standard();
    lines.shift_label("halpha", -0.4);
    lines.shift_label("nii1", -0.3);

    let output = Path::new(OUTPUT_FILENAME);
    figure::render_combined(&spectrum, redshift, &lines, output)?;
    println!("Figure saved to: {}", output.display());

    viewer::open_in_viewer(output);
    Ok(())
}
