//! Rendering and CLI glue for the redshifted-spectrum bandpass figures.
//!
//! The data pipeline (model loading, redshift/IGM transform, band selection)
//! lives in the `bandpass` crate; this crate arranges it on plot panels and
//! provides the two figure binaries.

pub mod args;
pub mod figure;
pub mod viewer;
