//! Wavelength-dependent throughput curves for telescope/instrument filters.
//!
//! A throughput curve represents the fraction of incident light an instrument
//! passband transmits as a function of wavelength, using piecewise linear
//! interpolation between tabulated data points. Curves are validated on
//! construction and immutable afterwards.
//!
//! Two display normalizations are provided for rendering:
//!
//! - **Half-max flattening**: keep only the samples above half of the curve's
//!   own peak and flatten them to a constant 1.0, the standard bandwidth
//!   convention for reporting dispersion-element coverage as a horizontal bar.
//! - **Peak rescaling**: scale the whole curve so its peak equals a fixed
//!   display value, preserving the curve shape relative to other curves.

use thiserror::Error;

/// Errors that can occur when building a throughput curve.
#[derive(Debug, Error)]
pub enum ThroughputError {
    #[error("wavelength and throughput vectors must have the same length")]
    LengthMismatch,

    #[error("a throughput curve needs at least two samples")]
    TooFewSamples,

    #[error("wavelengths must be in ascending order")]
    NotAscending,

    #[error("throughput values must be between 0.0 and 1.0")]
    OutOfRange,
}

/// A filter's transmission as a function of wavelength.
///
/// Wavelengths are in microns and strictly ascending; throughput values are
/// dimensionless fractions in [0, 1]. Evaluation uses linear interpolation
/// between samples and is zero outside the tabulated range.
#[derive(Debug, Clone)]
pub struct ThroughputCurve {
    /// Sample wavelengths in microns, strictly ascending
    wavelengths_um: Vec<f64>,

    /// Transmitted fraction at each sample wavelength
    throughput: Vec<f64>,
}

impl ThroughputCurve {
    /// Build a curve from parallel wavelength and throughput tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length, hold fewer than two
    /// samples, are not strictly ascending in wavelength, or contain
    /// throughput values outside [0, 1].
    pub fn from_table(
        wavelengths_um: Vec<f64>,
        throughput: Vec<f64>,
    ) -> Result<Self, ThroughputError> {
        if wavelengths_um.len() != throughput.len() {
            return Err(ThroughputError::LengthMismatch);
        }

        if wavelengths_um.len() < 2 {
            return Err(ThroughputError::TooFewSamples);
        }

        for i in 1..wavelengths_um.len() {
            if wavelengths_um[i] <= wavelengths_um[i - 1] {
                return Err(ThroughputError::NotAscending);
            }
        }

        for &t in &throughput {
            if !(0.0..=1.0).contains(&t) {
                return Err(ThroughputError::OutOfRange);
            }
        }

        Ok(Self {
            wavelengths_um,
            throughput,
        })
    }

    /// Build a curve from a static table of (wavelength, throughput) pairs.
    pub fn from_samples(samples: &[(f64, f64)]) -> Result<Self, ThroughputError> {
        let wavelengths: Vec<f64> = samples.iter().map(|(w, _)| *w).collect();
        let throughput: Vec<f64> = samples.iter().map(|(_, t)| *t).collect();
        Self::from_table(wavelengths, throughput)
    }

    /// Evaluate the curve at a wavelength using linear interpolation.
    ///
    /// Returns 0.0 outside the tabulated range.
    pub fn at(&self, wavelength_um: f64) -> f64 {
        if wavelength_um < self.min_wavelength() || wavelength_um > self.max_wavelength() {
            return 0.0;
        }

        // Binary search for the enclosing segment
        let idx = match self
            .wavelengths_um
            .binary_search_by(|probe| probe.partial_cmp(&wavelength_um).unwrap())
        {
            Ok(exact) => return self.throughput[exact],
            Err(insert) => insert,
        };

        let (x1, x2) = (self.wavelengths_um[idx - 1], self.wavelengths_um[idx]);
        let (y1, y2) = (self.throughput[idx - 1], self.throughput[idx]);

        let t = (wavelength_um - x1) / (x2 - x1);
        y1 * (1.0 - t) + y2 * t
    }

    /// Shortest tabulated wavelength in microns.
    pub fn min_wavelength(&self) -> f64 {
        self.wavelengths_um[0]
    }

    /// Longest tabulated wavelength in microns.
    pub fn max_wavelength(&self) -> f64 {
        *self.wavelengths_um.last().unwrap()
    }

    /// Peak throughput over the tabulated samples.
    pub fn peak(&self) -> f64 {
        self.throughput
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Iterate over the raw (wavelength, throughput) samples.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths_um
            .iter()
            .copied()
            .zip(self.throughput.iter().copied())
    }

    /// Half-max display normalization.
    ///
    /// Keeps only the samples whose throughput exceeds half of this curve's
    /// peak and flattens the survivors to a constant 1.0, so the passband
    /// renders as a horizontal bar spanning its half-max width.
    pub fn half_max_flattened(&self) -> Vec<(f64, f64)> {
        let cutoff = self.peak() / 2.0;
        self.samples()
            .filter(|&(_, t)| t > cutoff)
            .map(|(w, _)| (w, 1.0))
            .collect()
    }

    /// Peak-rescale display normalization.
    ///
    /// Returns the samples scaled so the curve's peak equals `display_peak`,
    /// preserving the curve shape. A curve with a non-positive peak is
    /// returned unchanged.
    pub fn rescaled_to(&self, display_peak: f64) -> Vec<(f64, f64)> {
        let peak = self.peak();
        if peak <= 0.0 {
            return self.samples().collect();
        }

        let scale = display_peak / peak;
        self.samples().map(|(w, t)| (w, t * scale)).collect()
    }
}
