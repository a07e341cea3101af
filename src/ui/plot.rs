use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints, Points, VLine};

use crate::curve::Curve;
use crate::data::model::Sample;
use crate::state::ViewState;
use crate::style;

// ---------------------------------------------------------------------------
// The two comparison panels
// ---------------------------------------------------------------------------

/// Panel 1: both reference curves and both sample subsets.
///
/// When `apply_clamp` is set and the percentile band produced limits,
/// the plot bounds are pinned once; afterwards pan and zoom belong to
/// the user. Without a clamp the bounds stay automatic.
pub fn full_range_panel(ui: &mut Ui, state: &ViewState, apply_clamp: bool) {
    let negative = curve_lines(
        &state.curves.negative,
        color32(style::NEGATIVE_CURVE_RGB),
        style::NEGATIVE_CURVE_LABEL,
    );
    let positive = curve_lines(
        &state.curves.positive,
        color32(style::POSITIVE_CURVE_RGB),
        style::POSITIVE_CURVE_LABEL,
    );
    let non_positive_data = sample_points(
        &state.non_positive,
        color32(style::NON_POSITIVE_DATA_RGB),
        style::NON_POSITIVE_DATA_LABEL,
    );
    let positive_data = sample_points(
        &state.positive,
        color32(style::POSITIVE_DATA_RGB),
        style::POSITIVE_DATA_LABEL,
    );

    Plot::new("full_range")
        .legend(Legend::default())
        .x_axis_label(style::X_AXIS_LABEL)
        .y_axis_label(style::Y_AXIS_LABEL)
        .show(ui, |plot_ui| {
            if apply_clamp {
                if let Some((y_lo, y_hi)) = state.y_clamp {
                    let x_lo = state.curves.negative.points[0].0;
                    let x_hi = state.curves.positive.points.last().map_or(10.0, |p| p.0);
                    plot_ui
                        .set_plot_bounds(PlotBounds::from_min_max([x_lo, y_lo], [x_hi, y_hi]));
                }
            }

            for line in negative {
                plot_ui.line(line);
            }
            for line in positive {
                plot_ui.line(line);
            }
            if let Some(points) = non_positive_data {
                plot_ui.points(points);
            }
            if let Some(points) = positive_data {
                plot_ui.points(points);
            }
            plot_ui.vline(zero_vline());
            plot_ui.hline(zero_hline());
        });
}

/// Panel 2: positive-domain detail, never clamped.
pub fn positive_detail_panel(ui: &mut Ui, state: &ViewState) {
    let detail = curve_lines(
        &state.detail,
        color32(style::POSITIVE_CURVE_RGB),
        style::POSITIVE_CURVE_LABEL,
    );
    let positive_data = sample_points(
        &state.positive,
        color32(style::POSITIVE_DATA_RGB),
        style::POSITIVE_DATA_LABEL,
    );

    Plot::new("positive_detail")
        .legend(Legend::default())
        .x_axis_label(style::X_AXIS_LABEL)
        .y_axis_label(style::Y_AXIS_LABEL)
        .show(ui, |plot_ui| {
            for line in detail {
                plot_ui.line(line);
            }
            if let Some(points) = positive_data {
                plot_ui.points(points);
            }
            plot_ui.vline(zero_vline());
            plot_ui.hline(zero_hline());
        });
}

/// One line per finite segment so undefined points gap the curve; only
/// the first segment is named, giving a single legend entry.
fn curve_lines<'a>(curve: &Curve, color: Color32, label: &'a str) -> Vec<Line<'a>> {
    curve
        .finite_segments()
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let points: PlotPoints = segment.iter().map(|&(x, y)| [x, y]).collect();
            let line = Line::new(points).color(color).width(2.0);
            if i == 0 { line.name(label) } else { line }
        })
        .collect()
}

fn sample_points<'a>(samples: &[Sample], color: Color32, label: &'a str) -> Option<Points<'a>> {
    if samples.is_empty() {
        return None;
    }
    let points: PlotPoints = samples.iter().map(|s| [s.x, s.y]).collect();
    Some(Points::new(points).color(color).radius(4.0).name(label))
}

fn zero_vline() -> VLine {
    VLine::new(0.0)
        .color(Color32::from_gray(120))
        .style(LineStyle::dashed_loose())
}

fn zero_hline() -> HLine {
    HLine::new(0.0)
        .color(Color32::from_gray(120))
        .style(LineStyle::dashed_loose())
}

fn color32((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}
