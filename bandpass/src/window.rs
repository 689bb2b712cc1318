//! Observed-wavelength plotting window derived from a redshift.
//!
//! The window is the observed-frame interval that bounds what can be
//! meaningfully plotted for a source at redshift `z`: the rest-frame span
//! [0.08, 0.668] microns stretched by (1+z). It is recomputed per invocation
//! and never persisted.

use thiserror::Error;

/// Rest-frame lower bound of the plotted span in microns.
pub const REST_LOWER_UM: f64 = 0.08;

/// Rest-frame upper bound of the plotted span in microns.
pub const REST_UPPER_UM: f64 = 0.668;

/// Errors produced when deriving a window from a redshift.
#[derive(Debug, Error)]
pub enum WindowError {
    /// The rest-to-observed transform is undefined for z <= -1.
    #[error("invalid redshift {0}: must be a finite number greater than -1")]
    InvalidRedshift(f64),
}

/// The observed-wavelength interval covered by the plot at a given redshift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedWindow {
    /// Lower bound in microns
    pub lower_um: f64,

    /// Upper bound in microns
    pub upper_um: f64,
}

impl ObservedWindow {
    /// Derive the window for a redshift.
    ///
    /// # Errors
    ///
    /// Returns `WindowError::InvalidRedshift` for non-finite redshifts or
    /// redshifts at or below -1, where (1+z) stops being a positive stretch.
    pub fn for_redshift(redshift: f64) -> Result<Self, WindowError> {
        if !redshift.is_finite() || redshift <= -1.0 {
            return Err(WindowError::InvalidRedshift(redshift));
        }

        let stretch = 1.0 + redshift;
        Ok(Self {
            lower_um: REST_LOWER_UM * stretch,
            upper_um: REST_UPPER_UM * stretch,
        })
    }

    /// Width of the window in microns.
    pub fn width(&self) -> f64 {
        self.upper_um - self.lower_um
    }

    /// Standard interval-overlap test against a wavelength interval.
    ///
    /// An interval overlaps the window when its minimum is at or below the
    /// window's upper bound and its maximum is at or above the window's lower
    /// bound. This is the full interval test, not a containment test of any
    /// single point.
    pub fn overlaps(&self, min_um: f64, max_um: f64) -> bool {
        min_um <= self.upper_um && max_um >= self.lower_um
    }

    /// Whether a single wavelength falls inside the window.
    pub fn contains(&self, wavelength_um: f64) -> bool {
        (self.lower_um..=self.upper_um).contains(&wavelength_um)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_bounds() {
        let window = ObservedWindow::for_redshift(0.0).unwrap();
        assert_relative_eq!(window.lower_um, 0.08, epsilon = 1e-12);
        assert_relative_eq!(window.upper_um, 0.668, epsilon = 1e-12);

        let window = ObservedWindow::for_redshift(7.5032).unwrap();
        assert_relative_eq!(window.lower_um, 0.08 * 8.5032, epsilon = 1e-12);
        assert_relative_eq!(window.upper_um, 0.668 * 8.5032, epsilon = 1e-12);
    }

    #[test]
    fn test_width_grows_with_redshift() {
        // Width is proportional to (1+z) and non-degenerate for all z >= 0
        let mut previous = 0.0;
        for z in [0.0, 0.5, 1.0, 3.0, 7.5032, 12.0] {
            let window = ObservedWindow::for_redshift(z).unwrap();
            assert!(window.width() > previous);
            assert_relative_eq!(
                window.width(),
                (REST_UPPER_UM - REST_LOWER_UM) * (1.0 + z),
                epsilon = 1e-12
            );
            previous = window.width();
        }
    }

    #[test]
    fn test_invalid_redshift() {
        assert!(matches!(
            ObservedWindow::for_redshift(-1.0),
            Err(WindowError::InvalidRedshift(_))
        ));
        assert!(matches!(
            ObservedWindow::for_redshift(-2.5),
            Err(WindowError::InvalidRedshift(_))
        ));
        assert!(matches!(
            ObservedWindow::for_redshift(f64::NAN),
            Err(WindowError::InvalidRedshift(_))
        ));
    }

    #[test]
    fn test_overlap_edges() {
        // z=0.5 gives a window of [0.12, 1.002]; a band spanning [0.6, 6.0]
        // overlaps only at the window's upper edge.
        let window = ObservedWindow::for_redshift(0.5).unwrap();
        assert!(window.overlaps(0.6, 6.0));

        // Entirely above the window
        assert!(!window.overlaps(1.01, 6.0));

        // Entirely below the window
        assert!(!window.overlaps(0.01, 0.11));

        // Touching an edge counts as overlap
        assert!(window.overlaps(window.upper_um, 6.0));
        assert!(window.overlaps(0.01, window.lower_um));
    }
}
