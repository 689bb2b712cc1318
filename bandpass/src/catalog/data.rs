//! Embedded filter transmission tables.
//!
//! Curves are coarse (wavelength_um, throughput) tables adequate for overlap
//! testing and display. Band edges follow the published passbands from the
//! SVO Filter Profile Service (<http://svo2.cab.inta-csic.es/svo/theory/fps3/>)
//! and the JWST instrument documentation; the sampled shapes are simplified.

use super::{FilterDef, InstrumentDef};

// --- General catalog: ground-based + pre-JWST space NIR/IR ---

const MOSFIRE_Y: [(f64, f64); 7] = [
    (0.972, 0.0),
    (0.985, 0.62),
    (1.020, 0.78),
    (1.050, 0.80),
    (1.090, 0.76),
    (1.112, 0.58),
    (1.124, 0.0),
];

const MOSFIRE_J: [(f64, f64); 7] = [
    (1.153, 0.0),
    (1.170, 0.66),
    (1.220, 0.80),
    (1.270, 0.82),
    (1.310, 0.77),
    (1.340, 0.60),
    (1.352, 0.0),
];

const MOSFIRE_H: [(f64, f64); 7] = [
    (1.466, 0.0),
    (1.490, 0.70),
    (1.560, 0.84),
    (1.640, 0.86),
    (1.720, 0.82),
    (1.780, 0.65),
    (1.807, 0.0),
];

const MOSFIRE_K: [(f64, f64); 7] = [
    (1.921, 0.0),
    (1.950, 0.68),
    (2.030, 0.82),
    (2.160, 0.85),
    (2.290, 0.80),
    (2.370, 0.60),
    (2.404, 0.0),
];

const NIRES_SPEC: [(f64, f64); 7] = [
    (0.940, 0.0),
    (1.000, 0.45),
    (1.300, 0.62),
    (1.700, 0.68),
    (2.100, 0.60),
    (2.350, 0.40),
    (2.450, 0.0),
];

const WFC3_F105W: [(f64, f64); 7] = [
    (0.900, 0.0),
    (0.930, 0.42),
    (0.980, 0.50),
    (1.050, 0.52),
    (1.120, 0.50),
    (1.170, 0.40),
    (1.208, 0.0),
];

const WFC3_F125W: [(f64, f64); 7] = [
    (1.100, 0.0),
    (1.140, 0.46),
    (1.200, 0.54),
    (1.250, 0.56),
    (1.310, 0.52),
    (1.370, 0.38),
    (1.400, 0.0),
];

const WFC3_F160W: [(f64, f64); 7] = [
    (1.400, 0.0),
    (1.430, 0.48),
    (1.500, 0.55),
    (1.550, 0.56),
    (1.610, 0.53),
    (1.670, 0.42),
    (1.700, 0.0),
];

const IRAC_CH1: [(f64, f64); 7] = [
    (3.130, 0.0),
    (3.200, 0.35),
    (3.400, 0.48),
    (3.600, 0.50),
    (3.800, 0.44),
    (3.920, 0.30),
    (3.960, 0.0),
];

const IRAC_CH2: [(f64, f64); 7] = [
    (3.920, 0.0),
    (4.000, 0.38),
    (4.300, 0.50),
    (4.500, 0.52),
    (4.800, 0.46),
    (5.000, 0.28),
    (5.060, 0.0),
];

// --- JWST catalog ---

const NIRSPEC_PRISM: [(f64, f64); 7] = [
    (0.600, 0.0),
    (0.800, 0.30),
    (1.500, 0.55),
    (3.000, 0.65),
    (4.500, 0.52),
    (5.100, 0.30),
    (5.300, 0.0),
];

const NIRSPEC_G140M: [(f64, f64); 7] = [
    (0.970, 0.0),
    (1.050, 0.45),
    (1.250, 0.60),
    (1.450, 0.62),
    (1.650, 0.52),
    (1.780, 0.35),
    (1.840, 0.0),
];

const NIRSPEC_G235M: [(f64, f64); 7] = [
    (1.660, 0.0),
    (1.800, 0.48),
    (2.100, 0.62),
    (2.400, 0.64),
    (2.750, 0.54),
    (2.980, 0.34),
    (3.070, 0.0),
];

const NIRSPEC_G395M: [(f64, f64); 7] = [
    (2.870, 0.0),
    (3.100, 0.50),
    (3.600, 0.64),
    (4.100, 0.66),
    (4.600, 0.56),
    (4.950, 0.35),
    (5.100, 0.0),
];

const NIRISS_SOSS: [(f64, f64); 7] = [
    (0.600, 0.0),
    (0.750, 0.35),
    (1.100, 0.55),
    (1.700, 0.60),
    (2.300, 0.48),
    (2.680, 0.28),
    (2.800, 0.0),
];

const MIRI_LRS: [(f64, f64); 7] = [
    (5.000, 0.0),
    (5.500, 0.35),
    (7.000, 0.55),
    (8.500, 0.60),
    (10.000, 0.50),
    (11.400, 0.30),
    (12.000, 0.0),
];

const MIRI_MRS: [(f64, f64); 7] = [
    (4.900, 0.0),
    (6.000, 0.40),
    (10.000, 0.55),
    (15.000, 0.60),
    (20.000, 0.45),
    (25.500, 0.25),
    (27.900, 0.0),
];

const NIRCAM_F115W: [(f64, f64); 7] = [
    (1.013, 0.0),
    (1.040, 0.35),
    (1.100, 0.48),
    (1.150, 0.50),
    (1.210, 0.47),
    (1.260, 0.32),
    (1.282, 0.0),
];

const NIRCAM_F150W: [(f64, f64); 7] = [
    (1.331, 0.0),
    (1.370, 0.40),
    (1.450, 0.53),
    (1.500, 0.55),
    (1.570, 0.52),
    (1.630, 0.36),
    (1.668, 0.0),
];

const NIRCAM_F200W: [(f64, f64); 7] = [
    (1.755, 0.0),
    (1.810, 0.42),
    (1.920, 0.56),
    (2.000, 0.58),
    (2.100, 0.55),
    (2.180, 0.38),
    (2.227, 0.0),
];

const NIRCAM_F277W: [(f64, f64); 7] = [
    (2.423, 0.0),
    (2.500, 0.34),
    (2.650, 0.46),
    (2.780, 0.48),
    (2.950, 0.45),
    (3.080, 0.30),
    (3.132, 0.0),
];

const NIRCAM_F356W: [(f64, f64); 7] = [
    (3.135, 0.0),
    (3.230, 0.38),
    (3.400, 0.50),
    (3.560, 0.52),
    (3.750, 0.49),
    (3.900, 0.33),
    (3.981, 0.0),
];

const NIRCAM_F444W: [(f64, f64); 7] = [
    (3.881, 0.0),
    (3.980, 0.36),
    (4.200, 0.48),
    (4.440, 0.50),
    (4.700, 0.46),
    (4.900, 0.30),
    (4.982, 0.0),
];

const MIRI_F770W: [(f64, f64); 7] = [
    (6.581, 0.0),
    (6.750, 0.26),
    (7.100, 0.36),
    (7.700, 0.38),
    (8.200, 0.35),
    (8.550, 0.22),
    (8.687, 0.0),
];

const MIRI_F1000W: [(f64, f64); 7] = [
    (9.023, 0.0),
    (9.200, 0.32),
    (9.600, 0.43),
    (10.000, 0.45),
    (10.400, 0.42),
    (10.750, 0.28),
    (10.891, 0.0),
];

const MIRI_F1500W: [(f64, f64); 7] = [
    (13.527, 0.0),
    (13.800, 0.30),
    (14.400, 0.40),
    (15.000, 0.42),
    (15.700, 0.39),
    (16.300, 0.26),
    (16.640, 0.0),
];

/// General-catalog spectroscopy partition.
pub const GENERAL_SPECTROSCOPY: &[InstrumentDef] = &[
    InstrumentDef {
        instrument: "keck/mosfire",
        bands: &[
            FilterDef {
                band: "y",
                label: "Keck MOSFIRE Y",
                color: (148, 103, 189),
                edge_color: (74, 51, 94),
                samples: &MOSFIRE_Y,
            },
            FilterDef {
                band: "j",
                label: "Keck MOSFIRE J",
                color: (31, 119, 180),
                edge_color: (15, 59, 90),
                samples: &MOSFIRE_J,
            },
            FilterDef {
                band: "h",
                label: "Keck MOSFIRE H",
                color: (44, 160, 44),
                edge_color: (22, 80, 22),
                samples: &MOSFIRE_H,
            },
            FilterDef {
                band: "k",
                label: "Keck MOSFIRE K",
                color: (214, 39, 40),
                edge_color: (107, 19, 20),
                samples: &MOSFIRE_K,
            },
        ],
    },
    InstrumentDef {
        instrument: "keck/nires",
        bands: &[FilterDef {
            band: "spec",
            label: "Keck NIRES",
            color: (140, 86, 75),
            edge_color: (70, 43, 37),
            samples: &NIRES_SPEC,
        }],
    },
];

/// General-catalog photometry partition.
pub const GENERAL_PHOTOMETRY: &[InstrumentDef] = &[
    InstrumentDef {
        instrument: "hst/wfc3ir",
        bands: &[
            FilterDef {
                band: "f105w",
                label: "HST WFC3 F105W",
                color: (23, 190, 207),
                edge_color: (11, 95, 103),
                samples: &WFC3_F105W,
            },
            FilterDef {
                band: "f125w",
                label: "HST WFC3 F125W",
                color: (188, 189, 34),
                edge_color: (94, 94, 17),
                samples: &WFC3_F125W,
            },
            FilterDef {
                band: "f160w",
                label: "HST WFC3 F160W",
                color: (227, 119, 194),
                edge_color: (113, 59, 97),
                samples: &WFC3_F160W,
            },
        ],
    },
    InstrumentDef {
        instrument: "spitzer/irac",
        bands: &[
            FilterDef {
                band: "ch1",
                label: "Spitzer IRAC [3.6]",
                color: (255, 127, 14),
                edge_color: (127, 63, 7),
                samples: &IRAC_CH1,
            },
            FilterDef {
                band: "ch2",
                label: "Spitzer IRAC [4.5]",
                color: (127, 127, 127),
                edge_color: (63, 63, 63),
                samples: &IRAC_CH2,
            },
        ],
    },
];

/// JWST-catalog spectroscopy partition.
pub const JWST_SPECTROSCOPY: &[InstrumentDef] = &[
    InstrumentDef {
        instrument: "nirspec",
        bands: &[
            FilterDef {
                band: "prism",
                label: "JWST NIRSpec PRISM",
                color: (31, 119, 180),
                edge_color: (15, 59, 90),
                samples: &NIRSPEC_PRISM,
            },
            FilterDef {
                band: "g140m",
                label: "JWST NIRSpec G140M",
                color: (44, 160, 44),
                edge_color: (22, 80, 22),
                samples: &NIRSPEC_G140M,
            },
            FilterDef {
                band: "g235m",
                label: "JWST NIRSpec G235M",
                color: (255, 127, 14),
                edge_color: (127, 63, 7),
                samples: &NIRSPEC_G235M,
            },
            FilterDef {
                band: "g395m",
                label: "JWST NIRSpec G395M",
                color: (214, 39, 40),
                edge_color: (107, 19, 20),
                samples: &NIRSPEC_G395M,
            },
        ],
    },
    InstrumentDef {
        instrument: "niriss",
        bands: &[FilterDef {
            band: "soss",
            label: "JWST NIRISS SOSS",
            color: (148, 103, 189),
            edge_color: (74, 51, 94),
            samples: &NIRISS_SOSS,
        }],
    },
    InstrumentDef {
        instrument: "miri",
        bands: &[
            FilterDef {
                band: "lrs",
                label: "JWST MIRI LRS",
                color: (140, 86, 75),
                edge_color: (70, 43, 37),
                samples: &MIRI_LRS,
            },
            FilterDef {
                band: "mrs",
                label: "JWST MIRI MRS",
                color: (227, 119, 194),
                edge_color: (113, 59, 97),
                samples: &MIRI_MRS,
            },
        ],
    },
];

/// JWST-catalog photometry partition.
pub const JWST_PHOTOMETRY: &[InstrumentDef] = &[
    InstrumentDef {
        instrument: "nircam",
        bands: &[
            FilterDef {
                band: "f115w",
                label: "JWST NIRCam F115W",
                color: (31, 119, 180),
                edge_color: (15, 59, 90),
                samples: &NIRCAM_F115W,
            },
            FilterDef {
                band: "f150w",
                label: "JWST NIRCam F150W",
                color: (44, 160, 44),
                edge_color: (22, 80, 22),
                samples: &NIRCAM_F150W,
            },
            FilterDef {
                band: "f200w",
                label: "JWST NIRCam F200W",
                color: (255, 127, 14),
                edge_color: (127, 63, 7),
                samples: &NIRCAM_F200W,
            },
            FilterDef {
                band: "f277w",
                label: "JWST NIRCam F277W",
                color: (214, 39, 40),
                edge_color: (107, 19, 20),
                samples: &NIRCAM_F277W,
            },
            FilterDef {
                band: "f356w",
                label: "JWST NIRCam F356W",
                color: (148, 103, 189),
                edge_color: (74, 51, 94),
                samples: &NIRCAM_F356W,
            },
            FilterDef {
                band: "f444w",
                label: "JWST NIRCam F444W",
                color: (140, 86, 75),
                edge_color: (70, 43, 37),
                samples: &NIRCAM_F444W,
            },
        ],
    },
    InstrumentDef {
        instrument: "miri",
        bands: &[
            FilterDef {
                band: "f770w",
                label: "JWST MIRI F770W",
                color: (255, 127, 14),
                edge_color: (127, 63, 7),
                samples: &MIRI_F770W,
            },
            FilterDef {
                band: "f1000w",
                label: "JWST MIRI F1000W",
                color: (214, 39, 40),
                edge_color: (107, 19, 20),
                samples: &MIRI_F1000W,
            },
            FilterDef {
                band: "f1500w",
                label: "JWST MIRI F1500W",
                color: (140, 86, 75),
                edge_color: (70, 43, 37),
                samples: &MIRI_F1500W,
            },
        ],
    },
];
