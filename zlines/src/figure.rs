//! Figure layout and rendering for the two plot variants.
//!
//! Both variants share the same data pipeline and differ only in panel
//! arrangement and normalization policy. The combined view stacks a spectrum
//! panel (filter curves rescaled to the flux display scale) over a JWST
//! coverage panel (half-max flattened bars). The JWST-only view draws a
//! single bar panel with the spectrum overlaid on a twin log axis.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use bandpass::catalog::BandClass;
use bandpass::{
    overlapping_bands, FilterCatalog, LineSet, ModelSpectrum, ObservedWindow, SelectionResult,
};

/// Fixed output filename in the working directory.
pub const OUTPUT_FILENAME: &str = "figure.svg";

/// Which JWST catalog partition the bar panel draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Spectroscopy,
    Photometry,
}

const FIGURE_WIDTH: u32 = 1650;
const COMBINED_HEIGHT: u32 = 750;
const JWST_ONLY_HEIGHT: u32 = 700;

/// Pixel height of the spectrum panel in the combined layout.
const SPECTRUM_PANEL_SPLIT: u32 = 460;

/// Log-flux display range of the spectrum panel.
const FLUX_FLOOR: f64 = 1e-15;
const FLUX_CEILING: f64 = 3.5e-13;

/// Log-flux range of the spectrum overlay in the JWST-only layout.
const OVERLAY_FLOOR: f64 = 6e-16;
const OVERLAY_CEILING: f64 = 2.5e-13;

/// Display peak every rescaled filter curve is normalized to.
const PHOT_DISPLAY_PEAK: f64 = 1e-14;

/// Base flux at which line labels sit in the spectrum panel.
const LINE_LABEL_FLUX: f64 = 2e-14;

/// Vertical spacing between instrument rows in the bar panels.
const INSTRUMENT_ROW_STEP: f64 = 1.75;

/// Vertical spacing between stacked bands of one instrument.
const BAND_ROW_STEP: f64 = 0.2;

/// Vertical extent of the bar panels.
const BAR_PANEL_TOP: f64 = 7.4;

const GREY: RGBColor = RGBColor(128, 128, 128);

fn rgb(color: (u8, u8, u8)) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Clip an ascending-x polyline to the window, interpolating boundary points
/// where a segment crosses a window edge.
pub fn clip_to_window(points: &[(f64, f64)], window: &ObservedWindow) -> Vec<(f64, f64)> {
    let (lo, hi) = (window.lower_um, window.upper_um);

    let edge = |a: (f64, f64), b: (f64, f64), x: f64| {
        let t = (x - a.0) / (b.0 - a.0);
        (x, a.1 + t * (b.1 - a.1))
    };

    let mut out = Vec::new();
    for (i, &point) in points.iter().enumerate() {
        if i > 0 {
            let previous = points[i - 1];
            if previous.0 < lo && point.0 > lo {
                out.push(edge(previous, point, lo));
            }
            if previous.0 < hi && point.0 > hi {
                out.push(edge(previous, point, hi));
            }
        }
        if (lo..=hi).contains(&point.0) {
            out.push(point);
        }
    }
    out
}

/// Observed line-marker positions to annotate: (wavelength_um, label, offset).
///
/// Keeps lines whose observed position falls inside the window, bounded by
/// the observed [Lya, Ha] span.
pub fn observed_line_positions(
    lines: &LineSet,
    redshift: f64,
    window: &ObservedWindow,
) -> Vec<(f64, String, f64)> {
    let span = lines.rest_span("lya", "halpha");

    lines
        .iter()
        .filter(|line| {
            span.map_or(true, |(lower, upper)| {
                (lower..=upper).contains(&line.rest_angstrom)
            })
        })
        .map(|line| (line.observed_um(redshift), line.label.clone(), line.y_offset))
        .filter(|&(observed_um, _, _)| window.contains(observed_um))
        .collect()
}

/// Render the combined figure: spectrum panel over JWST coverage panel.
pub fn render_combined(
    spectrum: &ModelSpectrum,
    redshift: f64,
    lines: &LineSet,
    output: &Path,
) -> Result<()> {
    let window = ObservedWindow::for_redshift(redshift)?;

    let root = SVGBackend::new(output, (FIGURE_WIDTH, COMBINED_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(SPECTRUM_PANEL_SPLIT);

    draw_spectrum_panel(&upper, spectrum, redshift, &window, lines)?;

    let catalog = FilterCatalog::load(true, BandClass::Spectroscopy)?;
    let selection = overlapping_bands(&catalog, &window);
    log::info!(
        "{} JWST spectroscopy bands in range at z={redshift}",
        selection.total_bands()
    );
    draw_bar_panel(&lower, &catalog, &selection, &window)?;

    root.present()?;
    Ok(())
}

/// Render the JWST-only figure: one bar panel with the spectrum overlaid.
pub fn render_jwst_only(
    spectrum: &ModelSpectrum,
    redshift: f64,
    mode: DisplayMode,
    lines: &LineSet,
    output: &Path,
) -> Result<()> {
    let window = ObservedWindow::for_redshift(redshift)?;

    let root = SVGBackend::new(output, (FIGURE_WIDTH, JWST_ONLY_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    // Spectrum underlay on its own log axis, drawn first so the bars and
    // labels sit on top of it.
    let mut spectrum_chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(0)
        .build_cartesian_2d(
            window.lower_um..window.upper_um,
            (OVERLAY_FLOOR..OVERLAY_CEILING).log_scale(),
        )?;

    let observed = clamped_flux(spectrum.observed(redshift), OVERLAY_FLOOR, OVERLAY_CEILING);
    spectrum_chart.draw_series(LineSeries::new(
        clip_to_window(&observed, &window),
        BLACK.mix(0.6).stroke_width(2),
    ))?;

    let class = match mode {
        DisplayMode::Photometry => BandClass::Photometry,
        DisplayMode::Spectroscopy => BandClass::Spectroscopy,
    };
    let catalog = FilterCatalog::load(true, class)?;
    let selection = overlapping_bands(&catalog, &window);
    log::info!(
        "{} JWST bands in range at z={redshift} ({mode:?})",
        selection.total_bands()
    );

    // Bar chart on the same drawing area, sharing margins so the x axes line up
    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(0)
        .build_cartesian_2d(window.lower_um..window.upper_um, -0.6..BAR_PANEL_TOP)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(format!("observed wavelength for z={redshift} [microns]"))
        .x_labels(12)
        .x_label_formatter(&|x| format!("{x:.2}"))
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 14))
        .draw()?;

    let mut row = 0usize;
    for entry in selection.iter() {
        if entry.bands.is_empty() {
            continue;
        }
        let Some(instrument) = catalog.instruments().find(|i| i.name == entry.instrument) else {
            continue;
        };
        let base = INSTRUMENT_ROW_STEP * row as f64;

        // Row guide and instrument label at the right edge
        chart.plotting_area().draw(&PathElement::new(
            vec![(window.lower_um, base), (window.upper_um, base)],
            GREY.mix(0.6),
        ))?;
        chart.plotting_area().draw(&Text::new(
            entry.instrument.to_uppercase(),
            (window.upper_um * 0.99, base + 0.25),
            ("sans-serif", 15)
                .into_font()
                .color(&rgb(instrument.filters[0].color))
                .pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;

        for (band_index, filter) in instrument
            .filters
            .iter()
            .filter(|f| entry.bands.contains(&f.band))
            .enumerate()
        {
            // Alternate bands above and below the instrument row
            let flip = if band_index % 2 == 1 { -1.0 } else { 1.0 };
            let y = base + flip * 0.3;

            let bar: Vec<(f64, f64)> = clip_to_window(&filter.curve.half_max_flattened(), &window)
                .into_iter()
                .map(|(w, _)| (w, y))
                .collect();
            if bar.len() < 2 {
                continue;
            }

            let color = rgb(filter.color);
            chart.draw_series(LineSeries::new(
                bar.iter().copied(),
                color.mix(0.4).stroke_width(9),
            ))?;

            // Band name near its bar, nudged toward the window center
            let mid = (bar[0].0 + bar[bar.len() - 1].0) / 2.0 - 0.015 * (1.0 + redshift);
            let label_x = mid.clamp(window.lower_um, window.upper_um - window.width() * 0.02);
            chart.plotting_area().draw(&Text::new(
                filter.band.to_uppercase(),
                (label_x, y + flip * 0.35),
                ("sans-serif", 11).into_font().color(&color.mix(0.8)),
            ))?;
        }

        row += 1;
    }

    // Line markers near the top of the panel
    for (observed_um, label, offset) in observed_line_positions(lines, redshift, &window) {
        let label_y = BAR_PANEL_TOP - 0.7 - offset;
        chart.plotting_area().draw(&PathElement::new(
            vec![(observed_um, -0.6), (observed_um, label_y - 0.15)],
            GREY.mix(0.7),
        ))?;
        chart.plotting_area().draw(&Text::new(
            label,
            (observed_um, label_y),
            ("sans-serif", 13)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom)),
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Spectrum panel of the combined layout: general-catalog filter curves,
/// the redshifted spectrum, and line markers on a log flux axis.
fn draw_spectrum_panel(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    spectrum: &ModelSpectrum,
    redshift: f64,
    window: &ObservedWindow,
    lines: &LineSet,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(0)
        .build_cartesian_2d(
            window.lower_um..window.upper_um,
            (FLUX_FLOOR..FLUX_CEILING).log_scale(),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(format!("observed wavelength for z={redshift} [microns]"))
        .x_labels(12)
        .x_label_formatter(&|x| format!("{x:.2}"))
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 14))
        .draw()?;

    let mut total = 0usize;
    for class in [BandClass::Spectroscopy, BandClass::Photometry] {
        let catalog = FilterCatalog::load(false, class)?;
        let selection = overlapping_bands(&catalog, window);
        total += selection.total_bands();

        for instrument in catalog.instruments() {
            let selected = selection.bands_for(instrument.name).unwrap_or(&[]);
            for filter in instrument
                .filters
                .iter()
                .filter(|f| selected.contains(&f.band))
            {
                let fill = rgb(filter.color);
                let points = clamped_flux(
                    clip_to_window(&filter.curve.rescaled_to(PHOT_DISPLAY_PEAK), window),
                    FLUX_FLOOR,
                    FLUX_CEILING,
                );

                chart
                    .draw_series(AreaSeries::new(
                        points.iter().copied(),
                        FLUX_FLOOR,
                        fill.mix(0.3),
                    ))?
                    .label(filter.label)
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 18, y)], fill)
                    });
                chart.draw_series(LineSeries::new(
                    points.iter().copied(),
                    rgb(filter.edge_color).mix(0.8),
                ))?;
            }
        }
    }
    log::info!("{total} general-catalog bands in range at z={redshift}");

    let observed = clamped_flux(spectrum.observed(redshift), FLUX_FLOOR, FLUX_CEILING);
    chart.draw_series(LineSeries::new(
        clip_to_window(&observed, window),
        BLACK.stroke_width(2),
    ))?;

    for (observed_um, label, offset) in observed_line_positions(lines, redshift, window) {
        let label_y = LINE_LABEL_FLUX * 10f64.powf(offset);
        chart.plotting_area().draw(&PathElement::new(
            vec![(observed_um, FLUX_FLOOR), (observed_um, label_y / 1.3)],
            GREY.mix(0.7),
        ))?;
        chart.plotting_area().draw(&Text::new(
            label,
            (observed_um, label_y),
            ("sans-serif", 13)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom)),
        ))?;
    }

    // The legend is only worth its space when something survived selection
    if total > 0 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 12))
            .position(SeriesLabelPosition::UpperMiddle)
            .draw()?;
    }

    Ok(())
}

/// JWST coverage panel of the combined layout: half-max flattened bars,
/// bands stacked per instrument.
fn draw_bar_panel(
    area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    catalog: &FilterCatalog,
    selection: &SelectionResult,
    window: &ObservedWindow,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .y_label_area_size(0)
        .x_label_area_size(20)
        .build_cartesian_2d(window.lower_um..window.upper_um, -0.6..BAR_PANEL_TOP)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(12)
        .x_label_formatter(&|x| format!("{x:.2}"))
        .label_style(("sans-serif", 12))
        .draw()?;

    let mut row = 0usize;
    for entry in selection.iter() {
        if entry.bands.is_empty() {
            continue;
        }
        let Some(instrument) = catalog.instruments().find(|i| i.name == entry.instrument) else {
            continue;
        };
        let base = INSTRUMENT_ROW_STEP * row as f64;

        chart.plotting_area().draw(&PathElement::new(
            vec![(window.lower_um, base), (window.upper_um, base)],
            GREY.mix(0.6),
        ))?;
        chart.plotting_area().draw(&Text::new(
            entry.instrument.to_uppercase(),
            (window.upper_um * 0.99, base + 0.25),
            ("sans-serif", 15)
                .into_font()
                .color(&rgb(instrument.filters[0].color))
                .pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;

        for (band_index, filter) in instrument
            .filters
            .iter()
            .filter(|f| entry.bands.contains(&f.band))
            .enumerate()
        {
            let y = base + BAND_ROW_STEP * band_index as f64;
            let bar: Vec<(f64, f64)> = clip_to_window(&filter.curve.half_max_flattened(), window)
                .into_iter()
                .map(|(w, _)| (w, y))
                .collect();
            if bar.len() < 2 {
                continue;
            }

            chart.draw_series(LineSeries::new(
                bar,
                rgb(filter.color).mix(0.4).stroke_width(9),
            ))?;
        }

        row += 1;
    }

    Ok(())
}

/// Clamp flux values into a display range so the log axis never sees zero.
fn clamped_flux(points: Vec<(f64, f64)>, floor: f64, ceiling: f64) -> Vec<(f64, f64)> {
    points
        .into_iter()
        .map(|(w, f)| (w, f.clamp(floor, ceiling)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clip_to_window_interpolates_edges() {
        let window = ObservedWindow::for_redshift(0.5).unwrap();
        // Window is [0.12, 1.002]; segment rises from 0.0 to 2.0 across it
        let points = vec![(0.0, 0.0), (2.0, 2.0)];

        let clipped = clip_to_window(&points, &window);
        assert_eq!(clipped.len(), 2);
        assert_relative_eq!(clipped[0].0, 0.12, epsilon = 1e-12);
        assert_relative_eq!(clipped[0].1, 0.12, epsilon = 1e-12);
        assert_relative_eq!(clipped[1].0, 1.002, epsilon = 1e-12);
        assert_relative_eq!(clipped[1].1, 1.002, epsilon = 1e-12);
    }

    #[test]
    fn test_clip_to_window_keeps_interior_points() {
        let window = ObservedWindow::for_redshift(0.0).unwrap();
        let points = vec![(0.1, 1.0), (0.3, 2.0), (0.6, 3.0), (0.9, 4.0)];

        let clipped = clip_to_window(&points, &window);
        // Interior points survive untouched; the last segment is cut at 0.668
        assert_eq!(clipped[0], (0.1, 1.0));
        assert_eq!(clipped[1], (0.3, 2.0));
        assert_eq!(clipped[2], (0.6, 3.0));
        assert_relative_eq!(clipped[3].0, 0.668, epsilon = 1e-12);
    }

    #[test]
    fn test_clip_to_window_fully_outside() {
        let window = ObservedWindow::for_redshift(0.0).unwrap();
        let points = vec![(10.0, 1.0), (12.0, 1.0)];
        assert!(clip_to_window(&points, &window).is_empty());
    }

    #[test]
    fn test_line_positions_filtered_to_window() {
        let lines = LineSet::standard();
        let redshift = 7.5032;
        let window = ObservedWindow::for_redshift(redshift).unwrap();

        let positions = observed_line_positions(&lines, redshift, &window);

        // Lya at z=7.5032 sits near 1.03 um, well inside [0.68, 5.68]
        assert!(positions.iter().any(|(_, label, _)| label == "Ly\u{3b1}"));
        // Ha lands near 5.58 um, also inside
        assert!(positions.iter().any(|(_, label, _)| label == "H\u{3b1}"));
        for (observed_um, _, _) in &positions {
            assert!(window.contains(*observed_um));
        }
    }

    #[test]
    fn test_line_positions_bounded_by_lya_halpha_span() {
        let lines = LineSet::standard();
        let redshift = 0.0;
        let window = ObservedWindow::for_redshift(redshift).unwrap();
        let positions = observed_line_positions(&lines, redshift, &window);

        // [NII] 6583 sits redward of Ha and is excluded by the span bound,
        // so nine of the ten registry lines survive.
        assert_eq!(positions.len(), 9);
        assert!(positions
            .iter()
            .all(|&(observed_um, _, _)| observed_um <= 6562.79 / 1e4 + 1e-12));
    }
}
