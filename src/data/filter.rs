use crate::data::model::Sample;

// ---------------------------------------------------------------------------
// Percentile band filter for readable y-limits
// ---------------------------------------------------------------------------
//
// Near x = 0 the measured values blow up and would collapse the visual
// scale of the full-range panel. The displayed y-range is therefore
// clamped to the 5th..95th percentile band of the non-positive subset.

const LOWER_PERCENTILE: f64 = 5.0;
const UPPER_PERCENTILE: f64 = 95.0;

/// Percentile by linear interpolation between the two nearest ranks of
/// the sorted input. `sorted` must be non-empty and ascending.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * weight
}

/// Values strictly inside the 5th..95th percentile band.
///
/// Non-finite inputs are dropped up front so they cannot poison the
/// percentile ranks.
fn percentile_band(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Vec::new();
    }
    sorted.sort_by(f64::total_cmp);
    let lo = percentile(&sorted, LOWER_PERCENTILE);
    let hi = percentile(&sorted, UPPER_PERCENTILE);
    sorted.into_iter().filter(|&v| v > lo && v < hi).collect()
}

/// Clamped y-limits for the full-range panel, derived from the
/// non-positive sample subset.
///
/// Returns `None` when the band is empty; the panel then keeps its
/// automatic limits.
pub fn clamped_y_limits(non_positive: &[Sample]) -> Option<(f64, f64)> {
    let ys: Vec<f64> = non_positive.iter().map(|s| s.y).collect();
    let band = percentile_band(&ys);
    if band.is_empty() {
        return None;
    }
    let band_min = band.iter().copied().fold(f64::INFINITY, f64::min);
    let band_max = band.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((band_min.min(0.0), band_max.max(100.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn samples(ys: &[f64]) -> Vec<Sample> {
        ys.iter().map(|&y| Sample { x: -1.0, y }).collect()
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted: Vec<f64> = (1..=10).map(f64::from).collect();
        // rank = 0.05 * 9 = 0.45 between 1 and 2
        assert_relative_eq!(percentile(&sorted, 5.0), 1.45);
        assert_relative_eq!(percentile(&sorted, 95.0), 9.55);
        assert_relative_eq!(percentile(&sorted, 50.0), 5.5);
        assert_relative_eq!(percentile(&sorted, 0.0), 1.0);
        assert_relative_eq!(percentile(&sorted, 100.0), 10.0);
    }

    #[test]
    fn band_is_strict_so_extremes_drop_out() {
        let ys: Vec<f64> = (1..=10).map(f64::from).collect();
        let band = percentile_band(&ys);
        assert_eq!(band, (2..=9).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn limits_expand_to_the_fixed_floor_and_ceiling() {
        let limits = clamped_y_limits(&samples(
            &(1..=10).map(f64::from).collect::<Vec<_>>(),
        ));
        // Band spans 2..9, so the limits widen to min(0, 2)..max(100, 9).
        assert_eq!(limits, Some((0.0, 100.0)));
    }

    #[test]
    fn limits_follow_the_band_outside_the_fixed_window() {
        let ys: Vec<f64> = (0..100).map(|i| -500.0 + 10.0 * i as f64).collect();
        let (lo, hi) = clamped_y_limits(&samples(&ys)).unwrap();
        assert!(lo < -400.0);
        assert!(hi > 400.0);
    }

    #[test]
    fn empty_subset_skips_clamping() {
        assert_eq!(clamped_y_limits(&[]), None);
    }

    #[test]
    fn two_values_leave_an_empty_strict_band() {
        // Both values sit on the band edges and are excluded.
        assert_eq!(clamped_y_limits(&samples(&[1.0, 5.0])), None);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let mut ys: Vec<f64> = (1..=10).map(f64::from).collect();
        ys.push(f64::NAN);
        let with_nan = clamped_y_limits(&samples(&ys));
        let without = clamped_y_limits(&samples(&ys[..10]));
        assert_eq!(with_nan, without);
    }
}
