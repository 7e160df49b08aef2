// File: crates/trendline-core/src/path.rs
// Summary: Line path (straight or midpoint-cubic) and closed fill region built from the mapped samples.
// Notes:
// - Curved segments place both control points on the horizontal midpoint of the
//   segment, at the start and end heights respectively. The curve never leaves the
//   vertical range of its endpoints, and collapses to a straight line on flat data.

use tracing::trace;

use crate::geometry::{DrawArea, ScreenPoint};
use crate::scale::CoordinateMapper;
use crate::series::SampleSeries;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineShape {
    Straight,
    #[default]
    Curved,
}

/// Renderer-agnostic drawing command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    CubicTo { ctrl1: ScreenPoint, ctrl2: ScreenPoint, to: ScreenPoint },
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: ScreenPoint,
    pub ctrl1: ScreenPoint,
    pub ctrl2: ScreenPoint,
    pub to: ScreenPoint,
}

impl CubicSegment {
    /// Midpoint-tangent segment between two neighbouring samples.
    pub fn between(from: ScreenPoint, to: ScreenPoint) -> Self {
        let mid_x = (from.x + to.x) * 0.5;
        Self {
            from,
            ctrl1: ScreenPoint::new(mid_x, from.y),
            ctrl2: ScreenPoint::new(mid_x, to.y),
            to,
        }
    }

    /// Evaluate the Bezier at `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> ScreenPoint {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        ScreenPoint::new(
            a * self.from.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.to.x,
            a * self.from.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.to.y,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LinePath {
    Straight(Vec<ScreenPoint>),
    /// `start` is `None` only for an empty path.
    Curved { start: Option<ScreenPoint>, segments: Vec<CubicSegment> },
}

impl LinePath {
    pub fn empty(shape: LineShape) -> Self {
        match shape {
            LineShape::Straight => LinePath::Straight(Vec::new()),
            LineShape::Curved => LinePath::Curved { start: None, segments: Vec::new() },
        }
    }

    pub fn shape(&self) -> LineShape {
        match self {
            LinePath::Straight(_) => LineShape::Straight,
            LinePath::Curved { .. } => LineShape::Curved,
        }
    }

    /// Sample positions the path passes through.
    pub fn anchors(&self) -> Vec<ScreenPoint> {
        match self {
            LinePath::Straight(points) => points.clone(),
            LinePath::Curved { start, segments } => match start {
                Some(p0) => std::iter::once(*p0).chain(segments.iter().map(|s| s.to)).collect(),
                None => Vec::new(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LinePath::Straight(points) => points.is_empty(),
            LinePath::Curved { start, .. } => start.is_none(),
        }
    }

    pub fn first(&self) -> Option<ScreenPoint> {
        match self {
            LinePath::Straight(points) => points.first().copied(),
            LinePath::Curved { start, .. } => *start,
        }
    }

    pub fn last(&self) -> Option<ScreenPoint> {
        match self {
            LinePath::Straight(points) => points.last().copied(),
            LinePath::Curved { start, segments } => segments.last().map(|s| s.to).or(*start),
        }
    }

    /// Drawing commands for the stroke. Empty path gives no commands.
    pub fn commands(&self) -> Vec<PathCommand> {
        match self {
            LinePath::Straight(points) => {
                let mut out = Vec::with_capacity(points.len());
                let mut it = points.iter();
                if let Some(&p0) = it.next() {
                    out.push(PathCommand::MoveTo(p0));
                    out.extend(it.map(|&p| PathCommand::LineTo(p)));
                }
                out
            }
            LinePath::Curved { start, segments } => {
                let Some(p0) = start else {
                    return Vec::new();
                };
                let mut out = Vec::with_capacity(segments.len() + 1);
                out.push(PathCommand::MoveTo(*p0));
                out.extend(segments.iter().map(|s| PathCommand::CubicTo { ctrl1: s.ctrl1, ctrl2: s.ctrl2, to: s.to }));
                out
            }
        }
    }
}

/// Line path closed along the bottom of the draw area, for gradient fills.
#[derive(Clone, Debug, PartialEq)]
pub struct FillRegion {
    pub line: LinePath,
    pub baseline_y: f64,
}

impl FillRegion {
    pub fn is_empty(&self) -> bool { self.line.is_empty() }

    pub fn commands(&self) -> Vec<PathCommand> {
        let mut out = self.line.commands();
        let (Some(first), Some(last)) = (self.line.first(), self.line.last()) else {
            return out;
        };
        out.push(PathCommand::LineTo(ScreenPoint::new(last.x, self.baseline_y)));
        out.push(PathCommand::LineTo(ScreenPoint::new(first.x, self.baseline_y)));
        out.push(PathCommand::Close);
        out
    }
}

/// Build the stroke path. Empty series or invalid area yield an empty path.
pub fn build_path(series: &SampleSeries, area: DrawArea, shape: LineShape) -> LinePath {
    let Some(mapper) = CoordinateMapper::new(series, area) else {
        return LinePath::empty(shape);
    };
    path_from_mapper(&mapper, shape)
}

pub fn path_from_mapper(mapper: &CoordinateMapper<'_>, shape: LineShape) -> LinePath {
    let points: Vec<ScreenPoint> = mapper.points().collect();
    trace!(count = points.len(), ?shape, "built line path");
    match shape {
        LineShape::Straight => LinePath::Straight(points),
        LineShape::Curved => {
            let segments = points.windows(2).map(|w| CubicSegment::between(w[0], w[1])).collect();
            LinePath::Curved { start: points.first().copied(), segments }
        }
    }
}

/// Build the fill region under the line.
pub fn build_fill(series: &SampleSeries, area: DrawArea, shape: LineShape) -> FillRegion {
    FillRegion { line: build_path(series, area, shape), baseline_y: area.bottom() }
}
