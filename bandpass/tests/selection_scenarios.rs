//! Selection behavior against the embedded catalogs at concrete redshifts.

use bandpass::catalog::BandClass;
use bandpass::{overlapping_bands, select_bands, FilterCatalog, ObservedWindow};

#[test]
fn jwst_spectroscopy_fully_in_range_at_default_redshift() {
    // z=7.5032 gives a window of about [0.68, 5.68] microns; every JWST
    // dispersion mode reaches into that interval.
    let result = select_bands(7.5032, true, false).unwrap();

    assert_eq!(
        result.bands_for("nirspec").unwrap(),
        &["prism", "g140m", "g235m", "g395m"]
    );
    assert_eq!(result.bands_for("niriss").unwrap(), &["soss"]);
    // MIRI LRS starts at 5.0 um, just inside the 5.68 um upper bound
    assert_eq!(result.bands_for("miri").unwrap(), &["lrs", "mrs"]);
    assert_eq!(result.total_bands(), 7);
}

#[test]
fn jwst_photometry_empty_at_zero_redshift() {
    // At z=0 the window is [0.08, 0.668] and every JWST imaging filter
    // starts redward of 1 micron: a valid, entirely empty selection.
    let result = select_bands(0.0, true, true).unwrap();

    assert!(result.is_empty());
    let keys: Vec<&str> = result.iter().map(|s| s.instrument).collect();
    assert_eq!(keys, vec!["nircam", "miri"]);
    assert!(result.iter().all(|s| s.bands.is_empty()));
}

#[test]
fn general_spectroscopy_partial_at_unit_redshift() {
    // z=1 gives [0.16, 1.336]: MOSFIRE Y and J reach in, H and K do not.
    let result = select_bands(1.0, false, false).unwrap();

    assert_eq!(result.bands_for("keck/mosfire").unwrap(), &["y", "j"]);
    assert_eq!(result.bands_for("keck/nires").unwrap(), &["spec"]);
    assert_eq!(result.total_bands(), 3);
}

#[test]
fn selection_agrees_with_direct_overlap_test() {
    for (jwst, class) in [
        (false, BandClass::Photometry),
        (false, BandClass::Spectroscopy),
        (true, BandClass::Photometry),
        (true, BandClass::Spectroscopy),
    ] {
        let catalog = FilterCatalog::load(jwst, class).unwrap();

        for z in [0.0, 0.5, 1.0, 2.5, 7.5032, 11.0] {
            let window = ObservedWindow::for_redshift(z).unwrap();
            let result = overlapping_bands(&catalog, &window);

            let mut expected_total = 0;
            for instrument in catalog.instruments() {
                let selected = result.bands_for(instrument.name).unwrap();
                for filter in &instrument.filters {
                    let overlaps = filter.curve.min_wavelength() <= window.upper_um
                        && filter.curve.max_wavelength() >= window.lower_um;
                    assert_eq!(selected.contains(&filter.band), overlaps);
                    if overlaps {
                        expected_total += 1;
                    }
                }
            }
            assert_eq!(result.total_bands(), expected_total);
        }
    }
}

#[test]
fn no_band_leaks_across_instruments() {
    let catalog = FilterCatalog::load(true, BandClass::Spectroscopy).unwrap();
    let window = ObservedWindow::for_redshift(7.5032).unwrap();
    let result = overlapping_bands(&catalog, &window);

    for entry in result.iter() {
        for band in &entry.bands {
            let filter = catalog.get(entry.instrument, band).unwrap();
            assert_eq!(filter.instrument, entry.instrument);
        }
    }
}
