//! Immutable filter catalogs keyed by telescope/instrument and band.
//!
//! Two catalog sources exist: a general NIR/IR catalog of ground-based and
//! pre-JWST space instruments, and a JWST-specific catalog. Each source is
//! partitioned into photometry-style and spectroscopy-style bands, giving
//! four distinct partitions selected by two independent flags.
//!
//! A catalog is constructed explicitly per invocation, never mutated after
//! load, and passed into the band selector. Iteration order over instruments
//! and bands is the registration order of the embedded tables.

mod data;

use crate::throughput::{ThroughputCurve, ThroughputError};

/// Raw band entry in the embedded tables.
pub struct FilterDef {
    pub band: &'static str,
    pub label: &'static str,
    pub color: (u8, u8, u8),
    pub edge_color: (u8, u8, u8),
    pub samples: &'static [(f64, f64)],
}

/// Raw instrument entry in the embedded tables.
pub struct InstrumentDef {
    pub instrument: &'static str,
    pub bands: &'static [FilterDef],
}

/// Photometry-style imaging filters vs. spectroscopy-style dispersion modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandClass {
    Photometry,
    Spectroscopy,
}

/// A single named passband with its validated curve and display styling.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Telescope/instrument key this band is cataloged under
    pub instrument: &'static str,

    /// Band identifier within the instrument
    pub band: &'static str,

    /// Human-readable label for legends
    pub label: &'static str,

    /// Fill color as (r, g, b)
    pub color: (u8, u8, u8),

    /// Edge color as (r, g, b)
    pub edge_color: (u8, u8, u8),

    /// Validated transmission curve
    pub curve: ThroughputCurve,
}

/// An instrument with its ordered bands.
#[derive(Debug, Clone)]
pub struct Instrument {
    pub name: &'static str,
    pub filters: Vec<Filter>,
}

/// An ordered, read-only collection of instruments and their bands.
#[derive(Debug, Clone)]
pub struct FilterCatalog {
    instruments: Vec<Instrument>,
}

impl FilterCatalog {
    /// Load one of the four catalog partitions.
    ///
    /// `jwst` selects the JWST-specific catalog over the general one; `class`
    /// selects photometry-style vs. spectroscopy-style bands within it.
    ///
    /// # Errors
    ///
    /// Returns a `ThroughputError` if an embedded curve table is malformed.
    pub fn load(jwst: bool, class: BandClass) -> Result<Self, ThroughputError> {
        let defs = match (jwst, class) {
            (false, BandClass::Spectroscopy) => data::GENERAL_SPECTROSCOPY,
            (false, BandClass::Photometry) => data::GENERAL_PHOTOMETRY,
            (true, BandClass::Spectroscopy) => data::JWST_SPECTROSCOPY,
            (true, BandClass::Photometry) => data::JWST_PHOTOMETRY,
        };

        Self::from_defs(defs)
    }

    /// Build a catalog from raw definition tables.
    pub fn from_defs(defs: &'static [InstrumentDef]) -> Result<Self, ThroughputError> {
        let mut instruments = Vec::with_capacity(defs.len());

        for def in defs {
            let mut filters = Vec::with_capacity(def.bands.len());
            for band in def.bands {
                filters.push(Filter {
                    instrument: def.instrument,
                    band: band.band,
                    label: band.label,
                    color: band.color,
                    edge_color: band.edge_color,
                    curve: ThroughputCurve::from_samples(band.samples)?,
                });
            }
            instruments.push(Instrument {
                name: def.instrument,
                filters,
            });
        }

        Ok(Self { instruments })
    }

    /// Build a catalog directly from instruments, preserving their order.
    pub fn from_instruments(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    /// Iterate instruments in catalog order.
    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    /// Look up a band's filter under the instrument it is cataloged under.
    pub fn get(&self, instrument: &str, band: &str) -> Option<&Filter> {
        self.instruments
            .iter()
            .find(|inst| inst.name == instrument)?
            .filters
            .iter()
            .find(|f| f.band == band)
    }

    /// Total number of bands across all instruments.
    pub fn band_count(&self) -> usize {
        self.instruments.iter().map(|i| i.filters.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_partitions_load() {
        for jwst in [false, true] {
            for class in [BandClass::Photometry, BandClass::Spectroscopy] {
                let catalog = FilterCatalog::load(jwst, class).unwrap();
                assert!(catalog.band_count() > 0, "empty partition {jwst:?}/{class:?}");
            }
        }
    }

    #[test]
    fn test_lookup_known_band() {
        let catalog = FilterCatalog::load(false, BandClass::Spectroscopy).unwrap();
        let k = catalog.get("keck/mosfire", "k").unwrap();
        assert_eq!(k.label, "Keck MOSFIRE K");
        assert!(k.curve.min_wavelength() > 1.9);
        assert!(k.curve.max_wavelength() < 2.5);

        assert!(catalog.get("keck/mosfire", "f444w").is_none());
        assert!(catalog.get("nircam", "f444w").is_none());
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let catalog = FilterCatalog::load(true, BandClass::Spectroscopy).unwrap();
        let names: Vec<&str> = catalog.instruments().map(|i| i.name).collect();
        assert_eq!(names, vec!["nirspec", "niriss", "miri"]);
    }

    #[test]
    fn test_curves_are_ordered_and_bounded() {
        for jwst in [false, true] {
            for class in [BandClass::Photometry, BandClass::Spectroscopy] {
                let catalog = FilterCatalog::load(jwst, class).unwrap();
                for inst in catalog.instruments() {
                    for filter in &inst.filters {
                        assert!(filter.curve.min_wavelength() < filter.curve.max_wavelength());
                        assert!(filter.curve.peak() > 0.0 && filter.curve.peak() <= 1.0);
                    }
                }
            }
        }
    }
}
