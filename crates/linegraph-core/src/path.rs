// File: crates/linegraph-core/src/path.rs
// Summary: Line and area paths in pixel space, renderable as SVG path data or Skia paths.

use std::fmt;

use crate::scale::{PixelMapping, ScaleMapper};
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
}

impl PathCommand {
    pub fn point(&self) -> (f64, f64) {
        match *self {
            PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => (x, y),
        }
    }
}

/// A straight-segment path. `Display` yields SVG path data, e.g. `"M 0 75 L 150 20 "`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn with_capacity(n: usize) -> Self {
        Self { commands: Vec::with_capacity(n) }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(x, y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(x, y));
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of drawn segments (LineTo commands).
    pub fn segments(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::LineTo(..))).count()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.commands.iter().map(PathCommand::point)
    }

    pub fn first_point(&self) -> Option<(f64, f64)> {
        self.commands.first().map(PathCommand::point)
    }

    pub fn last_point(&self) -> Option<(f64, f64)> {
        self.commands.last().map(PathCommand::point)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(x, y) => write!(f, "M {} {} ", x, y)?,
                PathCommand::LineTo(x, y) => write!(f, "L {} {} ", x, y)?,
            }
        }
        Ok(())
    }
}

/// Polyline through every point in series order: a MoveTo the first point, then
/// a LineTo per point (the first one included, as a zero-length segment).
pub fn line_path<M: PixelMapping>(series: &Series, scale: &M) -> Path {
    let mut path = Path::with_capacity(series.len() + 1);
    let first = series.first();
    path.move_to(scale.to_px_x(first.x), scale.to_px_y(first.y));
    for p in series {
        path.line_to(scale.to_px_x(p.x), scale.to_px_y(p.y));
    }
    log::trace!("line path: {} segments", path.segments());
    path
}

/// The line polyline closed down to the padded baseline: right end, then left end.
pub fn area_path(series: &Series, scale: &ScaleMapper) -> Path {
    let mut path = line_path(series, scale);
    let x = scale.x_domain();
    let floor = scale.baseline_y();
    path.line_to(scale.to_px_x(x.max), floor);
    path.line_to(scale.to_px_x(x.min), floor);
    path
}
