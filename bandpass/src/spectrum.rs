//! Stellar-population model spectrum: loading and the redshift transform.
//!
//! The model is a precomputed Cloudy continuum for a BPASS single stellar
//! population, stored as a whitespace-separated table. Column 0 holds the
//! rest wavelength in microns and column 6 the energy density nu*F_nu; the
//! loader converts to flux density F_nu by dividing out the frequency.
//! The spectrum is loaded once per invocation and immutable afterwards.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::igm;

/// Speed of light in microns per second, as used by the model tables.
pub const SPEED_OF_LIGHT_UM_S: f64 = 2.998e14;

/// Microns per Angstrom conversion for the IGM call.
const ANGSTROM_PER_UM: f64 = 1e4;

/// Column index of the rest wavelength in the model table.
const WAVELENGTH_COLUMN: usize = 0;

/// Column index of the nu*F_nu continuum in the model table.
const FLUX_COLUMN: usize = 6;

/// Parameters encoded in the model filename.
///
/// The fixed defaults describe the bundled model: a 10 Myr BPASS single
/// stellar population with an IMF extending to 100 solar masses, stellar and
/// nebular metallicity of 0.2 solar, and ionization parameter log U = -2.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// log10 of the population age in years
    pub log_age_yr: u32,

    /// Stellar metallicity in solar units
    pub stellar_z: f64,

    /// Nebular metallicity in solar units
    pub nebular_z: f64,

    /// log10 of the ionization parameter
    pub log_ionization: f64,

    /// Upper IMF mass cutoff in solar masses
    pub imf_upper_msun: u32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            log_age_yr: 7,
            stellar_z: 0.2,
            nebular_z: 0.2,
            log_ionization: -2.1,
            imf_upper_msun: 100,
        }
    }
}

impl ModelParams {
    /// The fixed-format filename this model is stored under.
    pub fn filename(&self) -> String {
        format!(
            "age{}z{}zneb{}u{}_{}.con",
            self.log_age_yr, self.stellar_z, self.nebular_z, self.log_ionization, self.imf_upper_msun
        )
    }
}

impl fmt::Display for ModelParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BPASS SSP age 10^{} yr, Z*={} Zsol, Zneb={} Zsol, log U={}",
            self.log_age_yr, self.stellar_z, self.nebular_z, self.log_ionization
        )
    }
}

/// Errors that can occur while loading a model spectrum.
#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("model data not found: {path}")]
    DataNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line}: malformed model row: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("model {path} has no usable rows")]
    Empty { path: PathBuf },

    #[error("{path}:{line}: wavelengths are not strictly ascending")]
    NotAscending { path: PathBuf, line: usize },
}

/// A rest-frame model spectrum as parallel wavelength/flux-density arrays.
#[derive(Debug, Clone)]
pub struct ModelSpectrum {
    /// Rest wavelengths in microns, strictly ascending
    wavelength_um: Vec<f64>,

    /// Flux density F_nu at each wavelength
    flux: Vec<f64>,
}

impl ModelSpectrum {
    /// Load a model spectrum from a Cloudy continuum table.
    ///
    /// Blank lines and lines starting with `#` are skipped. Fails fast with
    /// `DataNotFound` when the file is absent rather than substituting empty
    /// data.
    pub fn from_con_file(path: &Path) -> Result<Self, SpectrumError> {
        let file = File::open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                SpectrumError::DataNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SpectrumError::Io {
                    path: path.to_path_buf(),
                    source: err,
                }
            }
        })?;

        let mut wavelength_um = Vec::new();
        let mut vfv = Vec::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|err| SpectrumError::Io {
                path: path.to_path_buf(),
                source: err,
            })?;
            let line_no = index + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = trimmed.split_whitespace().collect();
            if columns.len() <= FLUX_COLUMN {
                return Err(SpectrumError::Malformed {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: format!(
                        "expected at least {} columns, found {}",
                        FLUX_COLUMN + 1,
                        columns.len()
                    ),
                });
            }

            let wave: f64 = columns[WAVELENGTH_COLUMN].parse().map_err(|_| {
                SpectrumError::Malformed {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: format!("bad wavelength value '{}'", columns[WAVELENGTH_COLUMN]),
                }
            })?;
            let energy: f64 =
                columns[FLUX_COLUMN]
                    .parse()
                    .map_err(|_| SpectrumError::Malformed {
                        path: path.to_path_buf(),
                        line: line_no,
                        reason: format!("bad flux value '{}'", columns[FLUX_COLUMN]),
                    })?;

            if let Some(&previous) = wavelength_um.last() {
                if wave <= previous {
                    return Err(SpectrumError::NotAscending {
                        path: path.to_path_buf(),
                        line: line_no,
                    });
                }
            }

            wavelength_um.push(wave);
            vfv.push(energy);
        }

        if wavelength_um.is_empty() {
            return Err(SpectrumError::Empty {
                path: path.to_path_buf(),
            });
        }

        log::debug!(
            "loaded {} model samples from {}",
            wavelength_um.len(),
            path.display()
        );
        Ok(Self::from_energy_density(wavelength_um, vfv))
    }

    /// Build a spectrum from wavelengths and nu*F_nu values, converting the
    /// energy density to flux density via nu = c / lambda.
    pub fn from_energy_density(wavelength_um: Vec<f64>, vfv: Vec<f64>) -> Self {
        let flux = wavelength_um
            .iter()
            .zip(&vfv)
            .map(|(&wave, &energy)| {
                let nu = SPEED_OF_LIGHT_UM_S / wave;
                energy / nu
            })
            .collect();

        Self {
            wavelength_um,
            flux,
        }
    }

    /// Number of samples in the spectrum.
    pub fn len(&self) -> usize {
        self.wavelength_um.len()
    }

    /// Whether the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelength_um.is_empty()
    }

    /// Rest-frame (wavelength_um, flux) samples.
    pub fn rest_samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelength_um
            .iter()
            .copied()
            .zip(self.flux.iter().copied())
    }

    /// Observed-frame samples at a redshift, with IGM absorption applied.
    ///
    /// Each sample maps independently: the wavelength stretches by (1+z) and
    /// the flux is attenuated by the IGM transmission evaluated at the
    /// observed wavelength. Callers validate the redshift by constructing an
    /// `ObservedWindow` first; values at or below -1 are undefined here.
    pub fn observed(&self, redshift: f64) -> Vec<(f64, f64)> {
        let stretch = 1.0 + redshift;
        self.rest_samples()
            .map(|(wave_um, flux)| {
                let observed_um = wave_um * stretch;
                let observed_angstrom = wave_um * ANGSTROM_PER_UM * stretch;
                let attenuated = flux * igm::transmission(observed_angstrom, redshift);
                (observed_um, attenuated)
            })
            .collect()
    }
}
