// ---------------------------------------------------------------------------
// Sample – one row of the input table
// ---------------------------------------------------------------------------

/// A single measured point (one row of the source CSV).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Independent variable (the `X` column).
    pub x: f64,
    /// Measured function value (the `F(X)` column).
    pub y: f64,
}

// ---------------------------------------------------------------------------
// SampleTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table in file row order. No ordering or uniqueness is
/// enforced beyond what the file contains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    pub samples: Vec<Sample>,
}

impl SampleTable {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        SampleTable { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Observed min/max of the x-values, if any.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for s in &self.samples {
            let (lo, hi) = range.get_or_insert((s.x, s.x));
            *lo = lo.min(s.x);
            *hi = hi.max(s.x);
        }
        range
    }

    /// Stable partition by sign of x. Samples with x = 0 exactly go to
    /// the non-positive subset; together the subsets cover the table.
    pub fn partition_by_sign(&self) -> (Vec<Sample>, Vec<Sample>) {
        self.samples.iter().copied().partition(|s| s.x <= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SampleTable {
        SampleTable::from_samples(vec![
            Sample { x: -1.0, y: 5.0 },
            Sample { x: 2.0, y: 3.0 },
            Sample { x: 0.0, y: 1.0 },
        ])
    }

    #[test]
    fn partition_is_a_disjoint_cover() {
        let t = table();
        let (non_positive, positive) = t.partition_by_sign();
        assert_eq!(non_positive.len() + positive.len(), t.len());
        assert!(non_positive.iter().all(|s| s.x <= 0.0));
        assert!(positive.iter().all(|s| s.x > 0.0));
    }

    #[test]
    fn zero_goes_to_the_non_positive_subset() {
        let (non_positive, positive) = table().partition_by_sign();
        assert_eq!(
            non_positive,
            vec![Sample { x: -1.0, y: 5.0 }, Sample { x: 0.0, y: 1.0 }]
        );
        assert_eq!(positive, vec![Sample { x: 2.0, y: 3.0 }]);
    }

    #[test]
    fn x_range_tracks_observed_extremes() {
        assert_eq!(table().x_range(), Some((-1.0, 2.0)));
        assert_eq!(SampleTable::default().x_range(), None);
    }
}
