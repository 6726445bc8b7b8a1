// File: crates/linegraph-core/src/view.rs
// Summary: Surface configuration (pixel size) and the behavior switches of the graph.

use chrono::{FixedOffset, Offset, Utc};

use crate::error::{GraphError, Result};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Pixel dimensions of the drawing surface. Purely presentational.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    pub width: f64,
    pub height: f64,
}

impl ViewConfig {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(GraphError::InvalidDimensions { width: self.width, height: self.height })
        }
    }

    /// Surface size rounded to whole pixels for raster backends (at least 1x1).
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width.round().max(1.0) as i32, self.height.round().max(1.0) as i32)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Where the horizontal scale starts counting from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum XOrigin {
    /// `x / x_max * width`: data x = 0 sits on the left edge whatever the first point is.
    #[default]
    Zero,
    /// `(x - x_min) / (x_max - x_min) * width`: the first point sits on the left edge.
    DomainMin,
}

/// How a hover pixel is turned into a series index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// `round(location * len / width)`.
    #[default]
    SeriesLength,
    /// `round(location * (len - 1) / width)`; exact for evenly spaced series starting at x = 0.
    LastIndex,
    /// Index of the point whose mapped x-pixel is closest to the pointer.
    NearestPixel,
}

/// What a pointer leaving the surface does to the hover state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaveBehavior {
    /// Keep showing the last hovered point.
    #[default]
    Retain,
    /// Go back to idle and hide the guide line and tooltips.
    Clear,
}

/// Behavior switches for a [`crate::LineGraph`]. Defaults reproduce the plain component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphOptions {
    pub x_origin: XOrigin,
    pub index_mode: IndexMode,
    pub leave: LeaveBehavior,
    /// Offset applied when formatting the date tooltip.
    pub utc_offset: FixedOffset,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            x_origin: XOrigin::default(),
            index_mode: IndexMode::default(),
            leave: LeaveBehavior::default(),
            utc_offset: Utc.fix(),
        }
    }
}
