// File: crates/trendline-core/src/scale.rs
// Summary: Index (X) and value (Y) scales plus the coordinate mapper used for drawing and pointer hit-testing.

use crate::geometry::{DrawArea, ScreenPoint};
use crate::series::SampleSeries;

/// What happens when a pointer is dragged past either horizontal edge of the area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Outside the area means no selection.
    #[default]
    Deselect,
    /// Pin to the first or last sample.
    Clamp,
}

/// Horizontal scale: evenly spaced sample indices across the area width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub width_px: f64,
    pub count: usize,
}

impl IndexScale {
    /// `None` for an empty series; a single sample has no step.
    pub fn new(area: &DrawArea, count: usize) -> Option<Self> {
        (count > 0).then_some(Self { left_px: area.x, width_px: area.width, count })
    }

    /// Pixel distance between neighbouring samples, undefined for fewer than two samples.
    #[inline]
    pub fn step(&self) -> Option<f64> {
        (self.count > 1).then(|| self.width_px / (self.count - 1) as f64)
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        match self.step() {
            None => self.left_px + self.width_px * 0.5,
            // last sample sits exactly on the right edge
            Some(_) if index + 1 == self.count => self.left_px + self.width_px,
            Some(step) => self.left_px + index as f64 * step,
        }
    }

    /// Fractional sample index under `px`, or `None` when there is no step.
    #[inline]
    pub fn from_px(&self, px: f64) -> Option<f64> {
        self.step().map(|step| (px - self.left_px) / step)
    }

    /// Round `px` to the nearest sample index (half away from zero).
    /// Containment is decided in pixel space, so anything past either edge is outside.
    pub fn nearest(&self, px: f64, policy: EdgePolicy) -> Option<usize> {
        if !px.is_finite() {
            return None;
        }
        let last = self.count - 1;
        if px < self.left_px {
            return (policy == EdgePolicy::Clamp).then_some(0);
        }
        if px > self.left_px + self.width_px {
            return (policy == EdgePolicy::Clamp).then_some(last);
        }
        let Some(raw) = self.from_px(px) else { return Some(0) };
        Some((raw.round().max(0.0) as usize).min(last))
    }
}

/// Vertical scale mapping `[vmin, vmax]` onto the area height (larger values higher).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub height_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(area: &DrawArea, vmin: f64, vmax: f64) -> Self {
        Self { top_px: area.y, height_px: area.height, vmin, vmax }
    }

    #[inline]
    pub fn bottom_px(&self) -> f64 { self.top_px + self.height_px }

    /// Flat (or non-finite) ranges have no vertical extent to normalize against.
    #[inline]
    pub fn is_flat(&self) -> bool {
        let span = self.vmax - self.vmin;
        !(span.is_finite() && span > 0.0)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        if self.is_flat() {
            return self.top_px + self.height_px * 0.5;
        }
        self.bottom_px() - (v - self.vmin) / (self.vmax - self.vmin) * self.height_px
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        if self.is_flat() {
            return self.vmin;
        }
        self.vmin + (self.bottom_px() - py) / self.height_px * (self.vmax - self.vmin)
    }
}

/// A sample resolved from a pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub point: ScreenPoint,
    pub value: f64,
}

/// Bidirectional mapping between sample indices and positions inside one draw area.
/// Borrowed view over the series; owns no state beyond the derived scales.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper<'a> {
    series: &'a SampleSeries,
    x: IndexScale,
    y: ValueScale,
}

impl<'a> CoordinateMapper<'a> {
    /// `None` when there is nothing to map: empty series or invalid area.
    pub fn new(series: &'a SampleSeries, area: DrawArea) -> Option<Self> {
        if !area.is_valid() {
            return None;
        }
        let x = IndexScale::new(&area, series.count())?;
        let (vmin, vmax) = (series.min()?, series.max()?);
        Some(Self { series, x, y: ValueScale::new(&area, vmin, vmax) })
    }

    pub fn series(&self) -> &'a SampleSeries { self.series }

    pub fn index_scale(&self) -> &IndexScale { &self.x }

    pub fn value_scale(&self) -> &ValueScale { &self.y }

    pub fn point_for_index(&self, index: usize) -> Option<ScreenPoint> {
        let v = self.series.value(index)?;
        Some(ScreenPoint::new(self.x.to_px(index), self.y.to_px(v)))
    }

    /// Nearest sample index to `point`; only the horizontal coordinate matters.
    pub fn nearest_index(&self, point: ScreenPoint, policy: EdgePolicy) -> Option<usize> {
        self.x.nearest(point.x, policy)
    }

    pub fn select(&self, point: ScreenPoint, policy: EdgePolicy) -> Option<Selection> {
        let index = self.nearest_index(point, policy)?;
        Some(Selection {
            index,
            point: self.point_for_index(index)?,
            value: self.series.value(index)?,
        })
    }

    /// Screen positions of every sample, in order.
    pub fn points(&self) -> impl Iterator<Item = ScreenPoint> + '_ {
        self.series
            .values()
            .iter()
            .enumerate()
            .map(move |(i, &v)| ScreenPoint::new(self.x.to_px(i), self.y.to_px(v)))
    }
}

/// Screen position of sample `index`. Sample positions are the same for straight and curved lines.
pub fn point_for_index(series: &SampleSeries, index: usize, area: DrawArea) -> Option<ScreenPoint> {
    CoordinateMapper::new(series, area)?.point_for_index(index)
}

/// Nearest sample index under `point`, deselecting when the pointer leaves the area horizontally.
pub fn nearest_index_for_point(series: &SampleSeries, point: ScreenPoint, area: DrawArea) -> Option<usize> {
    CoordinateMapper::new(series, area)?.nearest_index(point, EdgePolicy::Deselect)
}
