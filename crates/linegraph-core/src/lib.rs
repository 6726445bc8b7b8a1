// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; exports the line graph model, scales, paths, hover tracking and renderers.

pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod hover;
pub mod markup;
pub mod path;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::{LineGraph, RenderOptions};
pub use error::GraphError;
pub use format::{format_timestamp, format_usd};
pub use geometry::{ClientRect, GeometryMap, SurfaceGeometry};
pub use hover::{HoverOverlay, HoverState, PointerTracker};
pub use markup::{render_html, render_svg};
pub use path::{area_path, line_path, Path, PathCommand};
pub use scale::{Domain, PixelMapping, ScaleMapper};
pub use series::{Point, Series};
pub use theme::Theme;
pub use text::TextShaper;
pub use view::{GraphOptions, IndexMode, LeaveBehavior, ViewConfig, XOrigin};
