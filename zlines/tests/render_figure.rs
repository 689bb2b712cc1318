//! End-to-end render checks against a synthetic model spectrum.

use std::fs;
use std::path::PathBuf;

use bandpass::{LineSet, ModelSpectrum};
use zlines::figure::{self, DisplayMode};

/// Smooth rest-frame continuum spanning the plotted rest range.
fn synthetic_spectrum() -> ModelSpectrum {
    let n = 200;
    let wavelengths: Vec<f64> = (0..n)
        .map(|i| 0.05 + 0.95 * i as f64 / (n - 1) as f64)
        .collect();
    let vfv: Vec<f64> = wavelengths
        .iter()
        .map(|w| 12.0 * (-((w - 0.3) / 0.5).powi(2)).exp())
        .collect();

    ModelSpectrum::from_energy_density(wavelengths, vfv)
}

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn assert_is_svg(path: &PathBuf) {
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("<svg"), "{} is not an SVG", path.display());
    fs::remove_file(path).ok();
}

#[test]
fn combined_figure_renders() {
    let spectrum = synthetic_spectrum();
    let mut lines = LineSet::standard();
    lines.shift_label("halpha", -0.4);

    let output = output_path("zlines_test_combined.svg");
    figure::render_combined(&spectrum, 7.5032, &lines, &output).unwrap();
    assert_is_svg(&output);
}

#[test]
fn jwst_figure_renders_in_both_modes() {
    let spectrum = synthetic_spectrum();
    let lines = LineSet::standard();

    let output = output_path("zlines_test_jwst_spec.svg");
    figure::render_jwst_only(&spectrum, 7.5032, DisplayMode::Spectroscopy, &lines, &output)
        .unwrap();
    assert_is_svg(&output);

    let output = output_path("zlines_test_jwst_phot.svg");
    figure::render_jwst_only(&spectrum, 7.5032, DisplayMode::Photometry, &lines, &output).unwrap();
    assert_is_svg(&output);
}

#[test]
fn empty_selection_still_renders() {
    // At z=0 no JWST band overlaps the window; the run must still produce
    // a valid, sparse figure rather than erroring.
    let spectrum = synthetic_spectrum();
    let lines = LineSet::standard();

    let output = output_path("zlines_test_sparse.svg");
    figure::render_jwst_only(&spectrum, 0.0, DisplayMode::Photometry, &lines, &output).unwrap();
    assert_is_svg(&output);
}

#[test]
fn invalid_redshift_is_rejected_before_rendering() {
    let spectrum = synthetic_spectrum();
    let lines = LineSet::standard();

    let output = output_path("zlines_test_invalid.svg");
    let result = figure::render_combined(&spectrum, -1.0, &lines, &output);
    assert!(result.is_err());
    assert!(!output.exists());
}
