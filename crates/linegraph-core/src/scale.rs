// File: crates/linegraph-core/src/scale.rs
// Summary: Data-space to pixel-space mapping for a fixed-size surface.

use crate::error::Result;
use crate::series::Series;
use crate::types::{EPSILON, Y_PADDING_RATIO};
use crate::view::{ViewConfig, XOrigin};

/// Pixel mapping operations the path builder and hover tracker rely on.
pub trait PixelMapping {
    fn to_px_x(&self, x: f64) -> f64;
    fn to_px_y(&self, y: f64) -> f64;
    fn from_px_x(&self, px: f64) -> f64;
}

/// Min/max bounds of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Linear scales derived from a Series and a ViewConfig.
///
/// Cheap to build; callers derive a fresh one whenever the series or view changes
/// instead of keeping it around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapper {
    width: f64,
    height: f64,
    x: Domain,
    y: Domain,
    x_origin: XOrigin,
}

impl ScaleMapper {
    pub fn new(series: &Series, view: &ViewConfig, x_origin: XOrigin) -> Result<Self> {
        view.validate()?;

        // first/last, not a scan: the series is ordered by x
        let x = Domain::new(series.first().x, series.last().x);

        let (lo, hi) = series.y_extent();
        let pad = view.height * Y_PADDING_RATIO;
        let mut y = Domain::new(lo - pad, hi + pad);
        let min_span = (view.height * 2.0 * Y_PADDING_RATIO).max(EPSILON);
        if y.span() < min_span {
            let center = (y.min + y.max) * 0.5;
            y = Domain::new(center - min_span * 0.5, center + min_span * 0.5);
        }

        Ok(Self { width: view.width, height: view.height, x, y, x_origin })
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn x_domain(&self) -> Domain { self.x }
    pub fn y_domain(&self) -> Domain { self.y }

    /// Pixel y of the padded y-minimum; the floor of the filled area.
    pub fn baseline_y(&self) -> f64 {
        self.to_px_y(self.y.min)
    }

    /// (offset, divisor) of the horizontal map for the configured origin.
    #[inline]
    fn x_frame(&self) -> (f64, f64) {
        match self.x_origin {
            XOrigin::Zero => (0.0, self.x.max),
            XOrigin::DomainMin => (self.x.min, self.x.span()),
        }
    }
}

impl PixelMapping for ScaleMapper {
    #[inline]
    fn to_px_x(&self, x: f64) -> f64 {
        let (offset, divisor) = self.x_frame();
        if divisor.abs() < EPSILON {
            return 0.0;
        }
        (x - offset) / divisor * self.width
    }

    #[inline]
    fn to_px_y(&self, y: f64) -> f64 {
        // pixel y grows downward
        (self.height * self.y.max - self.height * y) / self.y.span()
    }

    #[inline]
    fn from_px_x(&self, px: f64) -> f64 {
        let (offset, divisor) = self.x_frame();
        if divisor.abs() < EPSILON {
            return self.x.min;
        }
        offset + px / self.width * divisor
    }
}
