// ---------------------------------------------------------------------------
// Shared layer styling
// ---------------------------------------------------------------------------
//
// The PNG renderer and the interactive viewer draw the same four
// layers; colours and legend labels live here so the two stay in sync.

/// Legend label of the negative-domain reference curve.
pub const NEGATIVE_CURVE_LABEL: &str =
    "x ≤ 0: (((((sec(x) * csc(x)) / cos(x)) - sec(x)) ^ 2) - sin(x))";

/// Legend label of the positive-domain reference curve.
pub const POSITIVE_CURVE_LABEL: &str =
    "x > 0: (((((log_2(x) + log_10(x)) ^ 2) - log_2(x)) - log_10(x)) - log_5(x))";

/// Legend labels of the two sample scatter layers.
pub const NON_POSITIVE_DATA_LABEL: &str = "CSV data (x ≤ 0)";
pub const POSITIVE_DATA_LABEL: &str = "CSV data (x > 0)";

/// Panel and figure titles.
pub const FIGURE_TITLE: &str = "System Function and CSV Data Comparison";
pub const FULL_RANGE_TITLE: &str = "Full Range Plot";
pub const POSITIVE_DETAIL_TITLE: &str = "Positive Domain (x > 0)";

/// Axis labels.
pub const X_AXIS_LABEL: &str = "X";
pub const Y_AXIS_LABEL: &str = "F(X)";

/// Layer colours as plain RGB, converted by each renderer.
pub const NEGATIVE_CURVE_RGB: (u8, u8, u8) = (255, 0, 0);
pub const POSITIVE_CURVE_RGB: (u8, u8, u8) = (0, 128, 0);
pub const NON_POSITIVE_DATA_RGB: (u8, u8, u8) = (0, 0, 255);
pub const POSITIVE_DATA_RGB: (u8, u8, u8) = (128, 0, 128);
