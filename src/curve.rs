// ---------------------------------------------------------------------------
// Reference curve evaluation
// ---------------------------------------------------------------------------
//
// Two analytic branches, selected by the sign of x:
//
//   x <= 0:  ((sec(x) * csc(x) / cos(x)) - sec(x))^2 - sin(x)
//   x >  0:  (((log2(x) + log10(x))^2 - log2(x)) - log10(x)) - log5(x)
//
// Undefined evaluations (reciprocal of a zero, log of a non-positive
// argument, overflow of the squaring step) come back as NaN so the
// rendering layers can gap the line instead of failing the run.

/// Number of evaluation points per branch.
pub const SAMPLES_PER_BRANCH: usize = 1000;

/// The branch domains never reach zero; they stop at +/-0.1.
pub const NEGATIVE_EDGE: f64 = -0.1;
pub const POSITIVE_EDGE: f64 = 0.1;

/// Default domain bounds used when no data is loaded.
const DEFAULT_NEGATIVE_MIN: f64 = -100.0;
const DEFAULT_POSITIVE_MAX: f64 = 100.0;

/// Floor for the positive branch's upper bound when a hint is given.
const POSITIVE_MAX_FLOOR: f64 = 10.0;

// ---------------------------------------------------------------------------
// Branch expressions
// ---------------------------------------------------------------------------

/// Evaluate the negative-domain expression at `x`.
///
/// Returns NaN where sin(x) or cos(x) is exactly zero, or where the
/// squaring step leaves the representable range.
pub fn negative_branch(x: f64) -> f64 {
    let cos_x = x.cos();
    let sin_x = x.sin();
    if cos_x == 0.0 || sin_x == 0.0 {
        return f64::NAN;
    }
    let sec_x = 1.0 / cos_x;
    let csc_x = 1.0 / sin_x;
    let result = ((sec_x * csc_x) / cos_x - sec_x).powi(2) - sin_x;
    if result.is_finite() { result } else { f64::NAN }
}

/// Evaluate the positive-domain expression at `x`.
///
/// Returns NaN for any x <= 0.
pub fn positive_branch(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    let log2_x = x.log2();
    let log10_x = x.log10();
    let log5_x = x.ln() / 5.0f64.ln();
    let result = ((log2_x + log10_x).powi(2) - log2_x - log10_x) - log5_x;
    if result.is_finite() { result } else { f64::NAN }
}

// ---------------------------------------------------------------------------
// Curve – a sampled branch, possibly with NaN gaps
// ---------------------------------------------------------------------------

/// A densely sampled curve. The y of a point is NaN where the branch
/// expression is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// Sample `f` over `n` evenly spaced points on `[start, end]`.
    fn sample(start: f64, end: f64, n: usize, f: fn(f64) -> f64) -> Self {
        let points = linspace(start, end, n).map(|x| (x, f(x))).collect();
        Curve { points }
    }

    /// Maximal runs of consecutive finite points, for segment-wise
    /// line drawing that gaps the curve at undefined values.
    pub fn finite_segments(&self) -> Vec<&[(f64, f64)]> {
        let mut segments = Vec::new();
        let mut run_start = None;
        for (i, &(_, y)) in self.points.iter().enumerate() {
            if y.is_finite() {
                run_start.get_or_insert(i);
            } else if let Some(start) = run_start.take() {
                segments.push(&self.points[start..i]);
            }
        }
        if let Some(start) = run_start {
            segments.push(&self.points[start..]);
        }
        segments
    }

    /// Min/max over the finite y-values, if any.
    pub fn finite_y_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &(_, y) in &self.points {
            if y.is_finite() {
                let (lo, hi) = range.get_or_insert((y, y));
                *lo = lo.min(y);
                *hi = hi.max(y);
            }
        }
        range
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if i + 1 == n {
            end
        } else {
            start + step * i as f64
        }
    })
}

// ---------------------------------------------------------------------------
// Reference curve pairs
// ---------------------------------------------------------------------------

/// Both reference branches evaluated over their full domains.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurves {
    pub negative: Curve,
    pub positive: Curve,
}

/// Evaluate both branches, sizing the domains from the observed data
/// range when a hint is given.
///
/// * negative: `[min(hint_min, -0.1), -0.1]`
/// * positive: `[0.1, max(hint_max, 10)]`
///
/// Without a hint the domains default to `[-100, -0.1]` and `[0.1, 100]`.
pub fn reference_curves(hint: Option<(f64, f64)>) -> ReferenceCurves {
    let (neg_min, pos_max) = match hint {
        Some((x_min, x_max)) => (x_min.min(NEGATIVE_EDGE), x_max.max(POSITIVE_MAX_FLOOR)),
        None => (DEFAULT_NEGATIVE_MIN, DEFAULT_POSITIVE_MAX),
    };
    ReferenceCurves {
        negative: Curve::sample(neg_min, NEGATIVE_EDGE, SAMPLES_PER_BRANCH, negative_branch),
        positive: Curve::sample(POSITIVE_EDGE, pos_max, SAMPLES_PER_BRANCH, positive_branch),
    }
}

/// Positive branch re-evaluated over `[0.1, x_max]` for the detail panel.
pub fn positive_detail(x_max: f64) -> Curve {
    Curve::sample(
        POSITIVE_EDGE,
        x_max.max(POSITIVE_EDGE),
        SAMPLES_PER_BRANCH,
        positive_branch,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn negative_branch_is_nan_where_sin_is_zero() {
        assert!(negative_branch(0.0).is_nan());
    }

    #[test]
    fn negative_branch_is_finite_on_ordinary_input() {
        assert!(negative_branch(-1.0).is_finite());
    }

    #[test]
    fn positive_branch_rejects_non_positive_input() {
        assert!(positive_branch(0.0).is_nan());
        assert!(positive_branch(-3.0).is_nan());
    }

    #[test]
    fn positive_branch_at_one_is_zero() {
        // All logarithms vanish at x = 1.
        assert_relative_eq!(positive_branch(1.0), 0.0);
    }

    #[test]
    fn positive_branch_matches_expression() {
        let x = 4.0f64;
        let l2 = x.log2();
        let l10 = x.log10();
        let l5 = x.ln() / 5.0f64.ln();
        let expected = ((l2 + l10).powi(2) - l2 - l10) - l5;
        assert_relative_eq!(positive_branch(x), expected);
    }

    #[test]
    fn curves_use_default_domains_without_hint() {
        let curves = reference_curves(None);
        assert_eq!(curves.negative.points.len(), SAMPLES_PER_BRANCH);
        assert_eq!(curves.positive.points.len(), SAMPLES_PER_BRANCH);
        assert_relative_eq!(curves.negative.points[0].0, -100.0);
        assert_relative_eq!(curves.negative.points.last().unwrap().0, -0.1);
        assert_relative_eq!(curves.positive.points[0].0, 0.1);
        assert_relative_eq!(curves.positive.points.last().unwrap().0, 100.0);
    }

    #[test]
    fn curves_respect_domain_hint() {
        let curves = reference_curves(Some((-5.0, 3.0)));
        assert_relative_eq!(curves.negative.points[0].0, -5.0);
        // Positive upper bound never drops below 10.
        assert_relative_eq!(curves.positive.points.last().unwrap().0, 10.0);

        let wide = reference_curves(Some((-5.0, 42.0)));
        assert_relative_eq!(wide.positive.points.last().unwrap().0, 42.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = reference_curves(Some((-7.5, 20.0)));
        let b = reference_curves(Some((-7.5, 20.0)));
        assert_eq!(a, b);
    }

    #[test]
    fn finite_segments_gap_at_nan() {
        let curve = Curve {
            points: vec![
                (0.0, 1.0),
                (1.0, 2.0),
                (2.0, f64::NAN),
                (3.0, 4.0),
            ],
        };
        let segments = curve.finite_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[1].len(), 1);
    }

    #[test]
    fn detail_curve_never_samples_below_the_positive_edge() {
        let curve = positive_detail(2.0);
        assert!(curve.points.iter().all(|&(x, _)| x >= POSITIVE_EDGE));
        assert!(curve.points.iter().all(|&(_, y)| y.is_finite()));
    }
}
