// File: crates/linegraph-core/src/geometry.rs
// Summary: On-screen bounding boxes and the provider trait the hover tracker reads them through.

use std::collections::HashMap;

/// Bounding box of a rendered element in client (viewport) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Looks up the live geometry of the surface with a given element id.
/// Returns `None` when the element is not mounted (yet).
pub trait SurfaceGeometry {
    fn bounding_rect(&self, id: &str) -> Option<ClientRect>;
}

/// A fixed rectangle answers for any id.
impl SurfaceGeometry for ClientRect {
    fn bounding_rect(&self, _id: &str) -> Option<ClientRect> {
        Some(*self)
    }
}

impl SurfaceGeometry for Option<ClientRect> {
    fn bounding_rect(&self, _id: &str) -> Option<ClientRect> {
        *self
    }
}

/// Geometry table keyed by element id, for hosts that manage several surfaces.
#[derive(Clone, Debug, Default)]
pub struct GeometryMap {
    rects: HashMap<String, ClientRect>,
}

impl GeometryMap {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, id: impl Into<String>, rect: ClientRect) -> Option<ClientRect> {
        self.rects.insert(id.into(), rect)
    }
}

impl SurfaceGeometry for GeometryMap {
    fn bounding_rect(&self, id: &str) -> Option<ClientRect> {
        self.rects.get(id).copied()
    }
}
