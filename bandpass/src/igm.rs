//! Intergalactic-medium attenuation along the line of sight.
//!
//! Implements the Madau (1995, ApJ 441, 18) effective optical depth of the
//! Lyman-alpha forest: line blanketing from the first four Lyman-series
//! transitions plus photoelectric absorption by intervening systems below the
//! Lyman limit. Transmission is a pure function of observed wavelength and
//! source redshift, identically 1 redward of the redshifted Lyman-alpha line.

/// Lyman-series rest wavelengths in Angstroms with their Madau (1995)
/// line-blanketing coefficients (Lya through Lyd).
const LYMAN_SERIES: [(f64, f64); 4] = [
    (1216.0, 3.6e-3),
    (1026.0, 1.7e-3),
    (972.5, 1.2e-3),
    (950.0, 9.3e-4),
];

/// Lyman-limit rest wavelength in Angstroms.
const LYMAN_LIMIT_ANGSTROM: f64 = 912.0;

/// Fraction of flux transmitted through the IGM.
///
/// # Arguments
///
/// * `observed_angstrom` - Observed-frame wavelength in Angstroms
/// * `redshift` - Redshift of the source
///
/// # Returns
///
/// Transmission in [0, 1]. Returns 1.0 for non-positive wavelengths and for
/// sources at z <= 0, where no foreground absorbers exist in this model.
pub fn transmission(observed_angstrom: f64, redshift: f64) -> f64 {
    if observed_angstrom <= 0.0 || redshift <= 0.0 {
        return 1.0;
    }

    let mut tau = 0.0;

    // Line blanketing: each series member absorbs blueward of its
    // redshifted position.
    for (rest_angstrom, coefficient) in LYMAN_SERIES {
        if observed_angstrom < rest_angstrom * (1.0 + redshift) {
            tau += coefficient * (observed_angstrom / rest_angstrom).powf(3.46);
        }
    }

    // Photoelectric absorption blueward of the redshifted Lyman limit,
    // Madau (1995) eq. A7.
    if observed_angstrom < LYMAN_LIMIT_ANGSTROM * (1.0 + redshift) {
        let xc = observed_angstrom / LYMAN_LIMIT_ANGSTROM;
        let xem = 1.0 + redshift;

        tau += 0.25 * xc.powi(3) * (xem.powf(0.46) - xc.powf(0.46))
            + 9.4 * xc.powf(1.5) * (xem.powf(0.18) - xc.powf(0.18))
            - 0.7 * xc.powi(3) * (xc.powf(-1.32) - xem.powf(-1.32))
            - 0.023 * (xem.powf(1.68) - xc.powf(1.68));
    }

    (-tau.max(0.0)).exp().clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LYA: f64 = 1216.0;

    #[test]
    fn test_transparent_redward_of_lya() {
        for z in [0.5, 2.0, 7.5032] {
            let redward = LYA * (1.0 + z) * 1.01;
            assert_eq!(transmission(redward, z), 1.0);
        }
    }

    #[test]
    fn test_absorbs_blueward_of_lya() {
        let z = 3.0;
        let blueward = LYA * (1.0 + z) * 0.95;
        let t = transmission(blueward, z);
        assert!(t < 1.0);
        assert!(t > 0.0);
    }

    #[test]
    fn test_transmission_bounded() {
        for z in [0.0, 1.0, 4.0, 7.5032, 12.0] {
            for observed in [300.0, 912.0, 2000.0, 5000.0, 12000.0, 40000.0] {
                let t = transmission(observed, z);
                assert!((0.0..=1.0).contains(&t), "t={t} at ({observed}, {z})");
            }
        }
    }

    #[test]
    fn test_opacity_grows_with_redshift() {
        // Same rest-frame position just blueward of Lya, deeper absorption
        // at higher redshift.
        let rest = 1100.0;
        let low = transmission(rest * (1.0 + 2.0), 2.0);
        let high = transmission(rest * (1.0 + 6.0), 6.0);
        assert!(high < low);
    }

    #[test]
    fn test_nearly_opaque_at_high_redshift() {
        // The forest is close to black just blueward of Lya by z~7
        let z = 7.5032;
        let t = transmission(1000.0 * (1.0 + z), z);
        assert!(t < 0.05, "t={t}");
    }

    #[test]
    fn test_no_absorbers_at_zero_redshift() {
        assert_eq!(transmission(1000.0, 0.0), 1.0);
        assert_eq!(transmission(500.0, -0.5), 1.0);
    }
}
