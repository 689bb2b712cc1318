//! Plot a redshifted galaxy model spectrum against JWST coverage only,
//! as half-max bars per instrument with the spectrum overlaid.
//!
//! Usage:
//! ```
//! zlines-jwst [REDSHIFT] [spec|phot]
//! ```
//!
//! The mode picks the spectroscopy (default) or photometry partition of the
//! JWST catalog; with no redshift given, the run falls back to z=7.5032.

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

    if args::literal_help_requested() {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    let parsed = Args::parse();
    let redshift = parsed.resolve_redshift();
    let mode = parsed.resolve_mode();

    let model = ModelParams::default();
    let spectrum = ModelSpectrum::from_con_file(Path::new(&model.filename()))
        .with_context(|| format!("loading {model}"))?;

    let mut lines = LineSet::standard();
    lines.shift_label("hbeta", 0.2);
    lines.shift_label("halpha", 0.5);

    let output = Path::new(OUTPUT_FILENAME);
    figure::render_jwst_only(&spectrum, redshift, mode, &lines, output)?;
    println!("Figure saved to: {}", output.display());

    viewer::open_in_viewer(output);
    Ok(())
}
