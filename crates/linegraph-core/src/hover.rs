// File: crates/linegraph-core/src/hover.rs
// Summary: Pointer tracking state machine (Idle / Hovering) and the overlay it drives.
// Notes:
// - Transitions are pure: each event takes the current HoverState and returns the next
//   one. The owner swaps the value in; nothing is mutated in place.
// - Surface geometry is read through `SurfaceGeometry`, so hosts without a DOM (tests,
//   the raster demo) can supply a fixed rectangle.

use chrono::FixedOffset;

use crate::format::{format_timestamp, format_usd};
use crate::geometry::{ClientRect, SurfaceGeometry};
use crate::scale::PixelMapping;
use crate::series::{Point, Series};
use crate::types::{MARKER_RADIUS, Y_PADDING_RATIO};
use crate::view::{GraphOptions, IndexMode, LeaveBehavior, ViewConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        /// Pointer x in the surface's own pixel frame.
        location: f64,
        index: usize,
        point: Point,
    },
}

impl HoverState {
    pub fn is_hovering(&self) -> bool {
        matches!(self, HoverState::Hovering { .. })
    }

    pub fn location(&self) -> Option<f64> {
        match *self {
            HoverState::Hovering { location, .. } => Some(location),
            HoverState::Idle => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            HoverState::Hovering { index, .. } => Some(index),
            HoverState::Idle => None,
        }
    }

    pub fn point(&self) -> Option<&Point> {
        match self {
            HoverState::Hovering { point, .. } => Some(point),
            HoverState::Idle => None,
        }
    }
}

/// Maps pointer events over the surface to hover states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    /// Width the surface was configured with (the rendered box may be wider).
    pub configured_width: f64,
    pub index_mode: IndexMode,
    pub leave: LeaveBehavior,
}

impl PointerTracker {
    pub fn new(view: &ViewConfig, options: &GraphOptions) -> Self {
        Self { configured_width: view.width, index_mode: options.index_mode, leave: options.leave }
    }

    /// Pointer x relative to the drawing surface, compensating for a rendered box that
    /// is wider than the configured width and centers the drawing.
    pub fn hover_location(&self, client_x: f64, rect: &ClientRect) -> f64 {
        let adjustment = (rect.width - self.configured_width) / 2.0;
        client_x - rect.left - adjustment
    }

    /// Series index selected by a hover `location`, always within `[0, len - 1]`.
    pub fn nearest_index<M: PixelMapping>(&self, location: f64, series: &Series, scale: &M) -> usize {
        let len = series.len();
        let raw = match self.index_mode {
            IndexMode::SeriesLength => round_half_up(location * (len as f64 / self.configured_width)),
            IndexMode::LastIndex => round_half_up(location * ((len - 1) as f64 / self.configured_width)),
            IndexMode::NearestPixel => return nearest_by_pixel(location, series, scale),
        };
        clamp_index(raw, len)
    }

    /// Pointer moved over the surface with element id `id`.
    ///
    /// Returns `state` unchanged when the geometry is unavailable.
    pub fn on_move<G, M>(
        &self,
        state: &HoverState,
        client_x: f64,
        id: &str,
        geometry: &G,
        series: &Series,
        scale: &M,
    ) -> HoverState
    where
        G: SurfaceGeometry + ?Sized,
        M: PixelMapping,
    {
        let rect = match geometry.bounding_rect(id) {
            Some(rect) if rect.is_finite() && client_x.is_finite() => rect,
            Some(_) => {
                log::warn!("ignoring pointer move on '{id}': non-finite geometry or pointer position");
                return *state;
            }
            None => {
                log::warn!("ignoring pointer move: no geometry for surface '{id}'");
                return *state;
            }
        };

        let location = self.hover_location(client_x, &rect);
        let index = self.nearest_index(location, series, scale);
        let point = series.points()[index];
        log::debug!("hover '{id}': location={location:.2} index={index}");
        HoverState::Hovering { location, index, point }
    }

    /// Pointer left the surface.
    pub fn on_leave(&self, state: &HoverState) -> HoverState {
        match self.leave {
            LeaveBehavior::Retain => *state,
            LeaveBehavior::Clear => {
                if state.is_hovering() {
                    log::debug!("pointer left surface; clearing hover");
                }
                HoverState::Idle
            }
        }
    }
}

/// `Math.round` semantics: halves go up, including for negatives.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[inline]
fn clamp_index(raw: f64, len: usize) -> usize {
    // NaN and negatives land on 0; `as` saturates large values.
    if raw > 0.0 { (raw as usize).min(len - 1) } else { 0 }
}

/// Closest mapped x-pixel; ties go to the later point.
fn nearest_by_pixel<M: PixelMapping>(location: f64, series: &Series, scale: &M) -> usize {
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (i, p) in series.iter().enumerate() {
        let d = (scale.to_px_x(p.x) - location).abs();
        if d <= best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

/// Everything drawn on top of the graph while hovering.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverOverlay {
    /// Vertical guide line at `guide_x`, spanning `[0, height]`.
    pub guide_x: f64,
    pub guide_y1: f64,
    pub guide_y2: f64,
    pub marker_x: f64,
    pub marker_y: f64,
    pub marker_radius: f64,
    /// Currency tooltip shown above the surface.
    pub value_label: String,
    /// Date tooltip shown below the surface.
    pub date_label: String,
    /// CSS `bottom` offset of the date tooltip (negative: hangs below the surface).
    pub date_bottom: f64,
}

impl HoverOverlay {
    /// Overlay for `state`, or `None` while idle.
    ///
    /// The marker sits at the pointer's x, not the point's own x, and at the point's y.
    pub fn from_state<M: PixelMapping>(
        state: &HoverState,
        scale: &M,
        height: f64,
        utc_offset: FixedOffset,
    ) -> Option<Self> {
        let HoverState::Hovering { location, point, .. } = *state else {
            return None;
        };
        Some(Self {
            guide_x: location,
            guide_y1: 0.0,
            guide_y2: height,
            marker_x: location,
            marker_y: scale.to_px_y(point.y),
            marker_radius: MARKER_RADIUS,
            value_label: format_usd(point.y),
            date_label: format_timestamp(point.timestamp_ms, utc_offset),
            date_bottom: -height * Y_PADDING_RATIO,
        })
    }
}
