//! Bandpass selection: which catalog filters are worth drawing at a redshift.
//!
//! A band is selected when its transmission curve overlaps the observed
//! plotting window at all, using the standard interval-overlap test on the
//! curve's tabulated wavelength extent. Instruments whose bands all fall
//! outside the window keep their key with an empty band list, preserving
//! catalog iteration order. Selection is a pure function of its inputs; an
//! empty result is a valid result, never an error.

use thiserror::Error;

use crate::catalog::{BandClass, FilterCatalog};
use crate::throughput::ThroughputError;
use crate::window::{ObservedWindow, WindowError};

/// Errors from the redshift-driven selection entry point.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Catalog(#[from] ThroughputError),
}

/// Bands surviving selection for a single instrument, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentBands {
    pub instrument: &'static str,
    pub bands: Vec<&'static str>,
}

/// Result of a selection pass over one catalog partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    selections: Vec<InstrumentBands>,
    total: usize,
}

impl SelectionResult {
    /// Iterate instruments in catalog order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = &InstrumentBands> {
        self.selections.iter()
    }

    /// Selected bands for one instrument, if it exists in the catalog.
    pub fn bands_for(&self, instrument: &str) -> Option<&[&'static str]> {
        self.selections
            .iter()
            .find(|s| s.instrument == instrument)
            .map(|s| s.bands.as_slice())
    }

    /// Total number of selected bands across all instruments.
    pub fn total_bands(&self) -> usize {
        self.total
    }

    /// Whether no band at all survived selection.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Select the bands of `catalog` whose curves overlap `window`.
///
/// Pure and side-effect free: identical inputs produce identical results.
pub fn overlapping_bands(catalog: &FilterCatalog, window: &ObservedWindow) -> SelectionResult {
    let mut selections = Vec::new();
    let mut total = 0;

    for instrument in catalog.instruments() {
        let bands: Vec<&'static str> = instrument
            .filters
            .iter()
            .filter(|f| window.overlaps(f.curve.min_wavelength(), f.curve.max_wavelength()))
            .map(|f| f.band)
            .collect();

        total += bands.len();
        selections.push(InstrumentBands {
            instrument: instrument.name,
            bands,
        });
    }

    SelectionResult { selections, total }
}

/// Select bands for a redshift against one of the four catalog partitions.
///
/// `use_jwst_catalog` picks the JWST catalog over the general one;
/// `use_photometry_catalog` picks the photometry partition over the
/// spectroscopy partition. The two flags are independent.
///
/// # Errors
///
/// Fails only on an invalid redshift (z <= -1 or non-finite) or a malformed
/// embedded curve table; an empty selection is returned as a normal result.
pub fn select_bands(
    redshift: f64,
    use_jwst_catalog: bool,
    use_photometry_catalog: bool,
) -> Result<SelectionResult, SelectionError> {
    let window = ObservedWindow::for_redshift(redshift)?;
    let class = if use_photometry_catalog {
        BandClass::Photometry
    } else {
        BandClass::Spectroscopy
    };
    let catalog = FilterCatalog::load(use_jwst_catalog, class)?;

    Ok(overlapping_bands(&catalog, &window))
}
