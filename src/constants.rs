//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//!
//! # Layout Invariants
//!
//! Axis positions start at [`FIRST_AXIS_POSITION`] and advance by [`AXIS_POSITION_STRIDE`].
//! Each threshold marker occupies `position ± MARKER_HALF_WIDTH`, so the stride must stay
//! strictly greater than [`MARKER_BAND_WIDTH`] or adjacent markers overlap.

/// Position assigned to the first domain encountered.
pub const FIRST_AXIS_POSITION: u32 = 1;

/// Distance between consecutive domain slots on the x-axis.
pub const AXIS_POSITION_STRIDE: u32 = 2;

/// Half the horizontal extent of a threshold marker.
pub const MARKER_HALF_WIDTH: f64 = 0.4;

/// Full horizontal extent of a threshold marker.
pub const MARKER_BAND_WIDTH: f64 = MARKER_HALF_WIDTH * 2.0;

const _: () = assert!(MARKER_BAND_WIDTH < AXIS_POSITION_STRIDE as f64);

pub const DEFAULT_JOB_MATCHING_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MEDICAL_SUGGESTIONS_THRESHOLD: f64 = 0.5;
pub const DEFAULT_SPORTS_INSIGHTS_THRESHOLD: f64 = 0.7;

pub const DEFAULT_CHART_TITLE: &str = "Phrase Similarity Classification by Domain";
pub const DEFAULT_PAGE_TITLE: &str = "Phrase Similarity";

/// Plotly.js bundle loaded by the rendered page.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const RELCHART_STATUS_HEADER: &str = "X-Relchart-Status";
pub const RELCHART_STATUS_RENDERED: &str = "rendered";
pub const RELCHART_STATUS_HEALTHY: &str = "healthy";
