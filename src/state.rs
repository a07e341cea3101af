use std::path::PathBuf;

use crate::curve::{self, Curve, ReferenceCurves};
use crate::data::filter;
use crate::data::model::{Sample, SampleTable};

// ---------------------------------------------------------------------------
// Composed figure state
// ---------------------------------------------------------------------------

/// Everything both renderers need, computed once per run: partitioned
/// sample subsets, reference curves sized to the observed x-range, the
/// positive-domain detail curve, and the optional clamped y-limits.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Path the table was loaded from (shown in the viewer's top bar).
    pub source: PathBuf,

    /// Samples with x <= 0, in file order.
    pub non_positive: Vec<Sample>,

    /// Samples with x > 0, in file order.
    pub positive: Vec<Sample>,

    /// Both reference branches over the full observed range.
    pub curves: ReferenceCurves,

    /// Positive branch re-evaluated for the detail panel.
    pub detail: Curve,

    /// Clamped y-limits of the full-range panel, if the percentile
    /// band of the non-positive subset is non-empty.
    pub y_clamp: Option<(f64, f64)>,
}

impl ViewState {
    /// Compose the figure state from a loaded table.
    pub fn compose(table: &SampleTable, source: PathBuf) -> Self {
        let (non_positive, positive) = table.partition_by_sign();

        let curves = curve::reference_curves(table.x_range());

        // The detail panel spans up to the largest positive sample;
        // with no positive samples it falls back to [0.1, 10].
        let detail_max = positive
            .iter()
            .map(|s| s.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let detail = if detail_max.is_finite() {
            curve::positive_detail(detail_max)
        } else {
            curve::positive_detail(10.0)
        };

        let y_clamp = filter::clamped_y_limits(&non_positive);

        log::debug!(
            "composed figure: {} non-positive / {} positive samples, clamp {:?}",
            non_positive.len(),
            positive.len(),
            y_clamp
        );

        ViewState {
            source,
            non_positive,
            positive,
            curves,
            detail,
            y_clamp,
        }
    }

    /// Total number of samples across both subsets.
    pub fn sample_count(&self) -> usize {
        self.non_positive.len() + self.positive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn mixed_sign_table() -> SampleTable {
        SampleTable::from_samples(vec![
            Sample { x: -1.0, y: 5.0 },
            Sample { x: 2.0, y: 3.0 },
            Sample { x: 0.0, y: 1.0 },
        ])
    }

    #[test]
    fn compose_partitions_and_sizes_the_curves() {
        let state = ViewState::compose(&mixed_sign_table(), PathBuf::from("out.csv"));

        assert_eq!(state.non_positive.len(), 2);
        assert_eq!(state.positive.len(), 1);
        assert_eq!(state.sample_count(), 3);

        // Negative branch spans down to the observed minimum.
        assert_relative_eq!(state.curves.negative.points[0].0, -1.0);
        // Positive branch never ends below 10.
        assert_relative_eq!(state.curves.positive.points.last().unwrap().0, 10.0);
        // Detail curve ends at the largest positive sample.
        assert_relative_eq!(state.detail.points.last().unwrap().0, 2.0);
    }

    #[test]
    fn two_non_positive_samples_leave_limits_automatic() {
        let state = ViewState::compose(&mixed_sign_table(), PathBuf::from("out.csv"));
        assert_eq!(state.y_clamp, None);
    }

    #[test]
    fn dense_non_positive_subset_clamps_the_limits() {
        let samples: Vec<Sample> = (0..50)
            .map(|i| Sample {
                x: -(i as f64) - 1.0,
                y: i as f64,
            })
            .collect();
        let state = ViewState::compose(
            &SampleTable::from_samples(samples),
            PathBuf::from("out.csv"),
        );
        let (lo, hi) = state.y_clamp.expect("band should be non-empty");
        assert_relative_eq!(lo, 0.0);
        assert_relative_eq!(hi, 100.0);
    }

    #[test]
    fn empty_table_uses_default_domains() {
        let state = ViewState::compose(&SampleTable::default(), PathBuf::from("out.csv"));
        assert_relative_eq!(state.curves.negative.points[0].0, -100.0);
        assert_relative_eq!(state.curves.positive.points.last().unwrap().0, 100.0);
        assert_relative_eq!(state.detail.points.last().unwrap().0, 10.0);
        assert_eq!(state.y_clamp, None);
    }
}
