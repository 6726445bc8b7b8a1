// File: crates/linegraph-core/src/types.rs
// Summary: Shared constants (default surface size, paddings, marker radius).

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: f64 = 300.0;
/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: f64 = 150.0;

/// Fraction of the pixel height added above the max and below the min y value.
/// Note the padding is applied in data units, so its visual size depends on the value range.
pub const Y_PADDING_RATIO: f64 = 0.025;

/// Radius of the hover marker circle, in pixels.
pub const MARKER_RADIUS: f64 = 4.0;

/// Smallest span treated as non-degenerate when dividing by a domain width.
pub const EPSILON: f64 = 1e-9;
