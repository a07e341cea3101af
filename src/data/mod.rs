/// Data layer: core types, loading, and the y-limit filter.
///
/// Architecture:
/// ```text
///  out.csv (X, F(X))
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SampleTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SampleTable   │  ordered (x, y) samples, sign partition
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  percentile band → clamped y-limits
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
