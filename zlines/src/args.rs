//! Command-line arguments shared by the plot variants.
//!
//! Both binaries take one optional positional redshift and one optional mode
//! string. A missing redshift falls back to a documented default with a
//! one-line notice. A literal `help` first argument prints usage and exits;
//! the binaries never fall through to a render after printing help.

use clap::Parser;

use crate::figure::DisplayMode;

/// Redshift used when none is given on the command line
/// (see Hutchison et al. 2019).
pub const DEFAULT_REDSHIFT: f64 = 7.5032;

/// Parse and validate a redshift argument.
fn parse_redshift(s: &str) -> Result<f64, String> {
    let redshift: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid redshift '{s}': expected a number"))?;

    if !redshift.is_finite() || redshift <= -1.0 {
        return Err(format!(
            "invalid redshift {redshift}: must be greater than -1"
        ));
    }

    Ok(redshift)
}

/// Command line arguments for the bandpass figure binaries.
#[derive(Parser, Debug)]
#[command(
    about = "Plot a redshifted galaxy spectrum with relevant bandpasses and emission lines",
    allow_negative_numbers = true
)]
pub struct Args {
    /// Redshift of interest; defaults to z=7.5032 when omitted
    #[arg(value_name = "REDSHIFT", value_parser = parse_redshift)]
    pub redshift: Option<f64>,

    /// Display mode: "spec" (default) or "phot"
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,
}

impl Args {
    /// The redshift to plot, falling back to the default with a notice.
    pub fn resolve_redshift(&self) -> f64 {
        match self.redshift {
            Some(redshift) => redshift,
            None => {
                println!("Redshift not specified, set to z={DEFAULT_REDSHIFT}\n");
                DEFAULT_REDSHIFT
            }
        }
    }

    /// The display mode; unrecognized modes fall back to spectroscopy.
    pub fn resolve_mode(&self) -> DisplayMode {
        match self.mode.as_deref() {
            Some("phot") => DisplayMode::Photometry,
            Some("spec") | None => DisplayMode::Spectroscopy,
            Some(other) => {
                log::warn!("unrecognized mode '{other}', using spectroscopy display");
                DisplayMode::Spectroscopy
            }
        }
    }
}

/// Whether the user typed a literal `help` first argument.
pub fn literal_help_requested() -> bool {
    std::env::args().nth(1).as_deref() == Some("help")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_redshift_values() {
        let args = Args::try_parse_from(["zlines", "3.25"]).unwrap();
        assert_eq!(args.redshift, Some(3.25));
        assert!(args.mode.is_none());

        let args = Args::try_parse_from(["zlines", "-0.5"]).unwrap();
        assert_eq!(args.redshift, Some(-0.5));
    }

    #[test]
    fn test_invalid_redshift_rejected() {
        assert!(Args::try_parse_from(["zlines", "abc"]).is_err());
        assert!(Args::try_parse_from(["zlines", "-1.0"]).is_err());
        assert!(Args::try_parse_from(["zlines", "-3"]).is_err());
    }

    #[test]
    fn test_missing_redshift_falls_back() {
        let args = Args::try_parse_from(["zlines"]).unwrap();
        assert!(args.redshift.is_none());
        assert_eq!(args.resolve_redshift(), DEFAULT_REDSHIFT);
    }

    #[test]
    fn test_mode_resolution() {
        let args = Args::try_parse_from(["zlines", "2.0", "phot"]).unwrap();
        assert_eq!(args.resolve_mode(), DisplayMode::Photometry);

        let args = Args::try_parse_from(["zlines", "2.0", "spec"]).unwrap();
        assert_eq!(args.resolve_mode(), DisplayMode::Spectroscopy);

        // Unknown modes default to spectroscopy rather than failing the run
        let args = Args::try_parse_from(["zlines", "2.0", "mosfire"]).unwrap();
        assert_eq!(args.resolve_mode(), DisplayMode::Spectroscopy);

        let args = Args::try_parse_from(["zlines", "2.0"]).unwrap();
        assert_eq!(args.resolve_mode(), DisplayMode::Spectroscopy);
    }
}
