use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::curve::Curve;
use crate::data::model::Sample;
use crate::state::ViewState;
use crate::style;

// ---------------------------------------------------------------------------
// Static two-panel figure (PNG)
// ---------------------------------------------------------------------------

/// Fixed output filename, written to the current working directory.
pub const OUTPUT_FILE: &str = "system_function_plot.png";

const FIGURE_SIZE: (u32, u32) = (2000, 1000);
const CURVE_STROKE: u32 = 2;
const SCATTER_RADIUS: i32 = 4;

/// Render the composed figure into a PNG at `path`.
pub fn render_png(state: &ViewState, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let titled = root.titled(style::FIGURE_TITLE, ("sans-serif", 36))?;
    let panels = titled.split_evenly((1, 2));
    draw_full_range(&panels[0], state)?;
    draw_positive_detail(&panels[1], state)?;

    root.present()
        .with_context(|| format!("writing '{}'", path.display()))?;
    log::info!("figure written to {}", path.display());
    Ok(())
}

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Panel 1: both reference curves, both sample subsets, clamped
/// y-limits when the percentile band allows it.
fn draw_full_range(area: &Panel, state: &ViewState) -> Result<()> {
    let x_lo = state.curves.negative.points[0].0;
    let x_hi = state.curves.positive.points.last().map_or(10.0, |p| p.0);

    let (y_lo, y_hi) = match state.y_clamp {
        Some(limits) => limits,
        None => auto_y_range(
            [&state.curves.negative, &state.curves.positive],
            state.non_positive.iter().chain(&state.positive),
        ),
    };

    let mut chart = ChartBuilder::on(area)
        .caption(style::FULL_RANGE_TITLE, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(style::X_AXIS_LABEL)
        .y_desc(style::Y_AXIS_LABEL)
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    draw_curve(
        &mut chart,
        &state.curves.negative,
        rgb(style::NEGATIVE_CURVE_RGB),
        style::NEGATIVE_CURVE_LABEL,
    )?;
    draw_curve(
        &mut chart,
        &state.curves.positive,
        rgb(style::POSITIVE_CURVE_RGB),
        style::POSITIVE_CURVE_LABEL,
    )?;
    draw_scatter(
        &mut chart,
        &state.non_positive,
        rgb(style::NON_POSITIVE_DATA_RGB),
        style::NON_POSITIVE_DATA_LABEL,
    )?;
    draw_scatter(
        &mut chart,
        &state.positive,
        rgb(style::POSITIVE_DATA_RGB),
        style::POSITIVE_DATA_LABEL,
    )?;
    draw_zero_axes(&mut chart, (x_lo, x_hi), (y_lo, y_hi))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Panel 2: the positive-domain detail, never clamped.
fn draw_positive_detail(area: &Panel, state: &ViewState) -> Result<()> {
    let x_hi = state.detail.points.last().map_or(10.0, |p| p.0);
    let (x_lo, x_hi) = padded(0.1, x_hi);
    let (y_lo, y_hi) = auto_y_range([&state.detail], state.positive.iter());

    let mut chart = ChartBuilder::on(area)
        .caption(style::POSITIVE_DETAIL_TITLE, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(style::X_AXIS_LABEL)
        .y_desc(style::Y_AXIS_LABEL)
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    draw_curve(
        &mut chart,
        &state.detail,
        rgb(style::POSITIVE_CURVE_RGB),
        style::POSITIVE_CURVE_LABEL,
    )?;
    draw_scatter(
        &mut chart,
        &state.positive,
        rgb(style::POSITIVE_DATA_RGB),
        style::POSITIVE_DATA_LABEL,
    )?;
    draw_zero_axes(&mut chart, (x_lo, x_hi), (y_lo, y_hi))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Draw a curve as one line series per finite segment, gapping at NaN.
/// Only the first segment carries the legend entry.
fn draw_curve(chart: &mut Chart2d, curve: &Curve, color: RGBColor, label: &str) -> Result<()> {
    for (i, segment) in curve.finite_segments().into_iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(
            segment.iter().copied(),
            color.stroke_width(CURVE_STROKE),
        ))?;
        if i == 0 {
            series.label(label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(CURVE_STROKE))
            });
        }
    }
    Ok(())
}

/// Draw a sample subset as a filled-circle scatter layer.
fn draw_scatter(
    chart: &mut Chart2d,
    samples: &[Sample],
    color: RGBColor,
    label: &str,
) -> Result<()> {
    if samples.is_empty() {
        return Ok(());
    }
    chart
        .draw_series(
            samples
                .iter()
                .map(|s| Circle::new((s.x, s.y), SCATTER_RADIUS, color.filled())),
        )?
        .label(label)
        .legend(move |(x, y)| Circle::new((x + 10, y), SCATTER_RADIUS, color.filled()));
    Ok(())
}

/// Reference lines at x = 0 and y = 0, when they fall inside the panel.
fn draw_zero_axes(chart: &mut Chart2d, x: (f64, f64), y: (f64, f64)) -> Result<()> {
    let axis_style = BLACK.mix(0.5).stroke_width(1);
    if x.0 <= 0.0 && 0.0 <= x.1 {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, y.0), (0.0, y.1)],
            axis_style,
        )))?;
    }
    if y.0 <= 0.0 && 0.0 <= y.1 {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x.0, 0.0), (x.1, 0.0)],
            axis_style,
        )))?;
    }
    Ok(())
}

/// y-range covering every finite curve and scatter value, padded for
/// readability. Used wherever no clamp applies.
fn auto_y_range<'a, const N: usize>(
    curves: [&Curve; N],
    samples: impl Iterator<Item = &'a Sample>,
) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for curve in curves {
        if let Some((c_lo, c_hi)) = curve.finite_y_range() {
            lo = lo.min(c_lo);
            hi = hi.max(c_hi);
        }
    }
    for s in samples {
        if s.y.is_finite() {
            lo = lo.min(s.y);
            hi = hi.max(s.y);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    padded(lo, hi)
}

/// Widen a range by 5% on each side; degenerate ranges get a unit pad.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - 0.05 * span, hi + 0.05 * span)
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}
