//! Registry of rest-frame emission lines for plot annotation.
//!
//! Holds the usual UV/optical lines of star-forming galaxies between
//! Lyman-alpha and H-alpha, each with a display label and a vertical offset
//! the renderer applies when stacking labels. Labels and offsets can be
//! adjusted per invocation before drawing.

/// Microns per Angstrom.
const ANGSTROM_PER_UM: f64 = 1e4;

/// A rest-frame line with its current display state.
#[derive(Debug, Clone)]
pub struct LineMarker {
    /// Stable lookup key, e.g. "halpha"
    pub key: &'static str,

    /// Label drawn next to the marker
    pub label: String,

    /// Rest wavelength in Angstroms
    pub rest_angstrom: f64,

    /// Vertical label offset, interpreted by the renderer
    pub y_offset: f64,
}

impl LineMarker {
    /// Observed wavelength in microns at a redshift.
    pub fn observed_um(&self, redshift: f64) -> f64 {
        self.rest_angstrom * (1.0 + redshift) / ANGSTROM_PER_UM
    }
}

const STANDARD_LINES: [(&str, &str, f64); 10] = [
    ("lya", "Ly\u{3b1}", 1215.67),
    ("civ", "CIV", 1549.48),
    ("ciii", "CIII]", 1908.73),
    ("oii", "[OII]", 3727.1),
    ("hbeta", "H\u{3b2}", 4861.35),
    ("oiii1", "[OIII]", 4958.91),
    ("oiii2", "[OIII]", 5006.84),
    ("nii1", "[NII]", 6548.05),
    ("halpha", "H\u{3b1}", 6562.79),
    ("nii2", "[NII]", 6583.45),
];

/// The set of line markers drawn on a figure, ordered by rest wavelength.
#[derive(Debug, Clone)]
pub struct LineSet {
    lines: Vec<LineMarker>,
}

impl LineSet {
    /// The standard Lyman-alpha through H-alpha line list with zero offsets.
    pub fn standard() -> Self {
        let lines = STANDARD_LINES
            .iter()
            .map(|&(key, label, rest_angstrom)| LineMarker {
                key,
                label: label.to_string(),
                rest_angstrom,
                y_offset: 0.0,
            })
            .collect();

        Self { lines }
    }

    /// Iterate markers in wavelength order.
    pub fn iter(&self) -> impl Iterator<Item = &LineMarker> {
        self.lines.iter()
    }

    /// Adjust a line's vertical label offset. Returns false for unknown keys.
    pub fn shift_label(&mut self, key: &str, offset: f64) -> bool {
        match self.lines.iter_mut().find(|l| l.key == key) {
            Some(line) => {
                line.y_offset = offset;
                true
            }
            None => false,
        }
    }

    /// Replace a line's display label. Returns false for unknown keys.
    pub fn rename(&mut self, key: &str, label: &str) -> bool {
        match self.lines.iter_mut().find(|l| l.key == key) {
            Some(line) => {
                line.label = label.to_string();
                true
            }
            None => false,
        }
    }

    /// Rest-wavelength span between two line keys, in Angstroms.
    pub fn rest_span(&self, from_key: &str, to_key: &str) -> Option<(f64, f64)> {
        let from = self.lines.iter().find(|l| l.key == from_key)?;
        let to = self.lines.iter().find(|l| l.key == to_key)?;

        let (lower, upper) = if from.rest_angstrom <= to.rest_angstrom {
            (from.rest_angstrom, to.rest_angstrom)
        } else {
            (to.rest_angstrom, from.rest_angstrom)
        };
        Some((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_observed_position() {
        let lines = LineSet::standard();
        let lya = lines.iter().find(|l| l.key == "lya").unwrap();

        // Lya at z=7.5032 lands near 1.03 um
        assert_relative_eq!(
            lya.observed_um(7.5032),
            1215.67 * 8.5032 / 1e4,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_shift_and_rename() {
        let mut lines = LineSet::standard();

        assert!(lines.shift_label("halpha", -0.4));
        assert!(!lines.shift_label("unknown", 1.0));

        assert!(lines.rename("nii1", "[NII]6548"));
        let nii = lines.iter().find(|l| l.key == "nii1").unwrap();
        assert_eq!(nii.label, "[NII]6548");
        assert_eq!(nii.y_offset, 0.0);

        let halpha = lines.iter().find(|l| l.key == "halpha").unwrap();
        assert_eq!(halpha.y_offset, -0.4);
    }

    #[test]
    fn test_rest_span() {
        let lines = LineSet::standard();
        let (lower, upper) = lines.rest_span("lya", "halpha").unwrap();
        assert_eq!(lower, 1215.67);
        assert_eq!(upper, 6562.79);

        // Order-insensitive
        assert_eq!(lines.rest_span("halpha", "lya").unwrap(), (lower, upper));

        assert!(lines.rest_span("lya", "nope").is_none());
    }

    #[test]
    fn test_wavelength_ordering() {
        let lines = LineSet::standard();
        let rests: Vec<f64> = lines.iter().map(|l| l.rest_angstrom).collect();
        assert!(rests.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
