// File: crates/trendline-core/src/geometry.rs
// Summary: Draw-area rectangle, screen points and clamp helper.

use crate::types::Insets;

/// Point in the coordinate space of a [`DrawArea`]. Y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<(f64, f64)> for ScreenPoint {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

/// Rectangle supplied by the host layout on every resize.
/// Contract: only areas with finite, strictly positive width and height produce geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawArea {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Area anchored at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn right(&self) -> f64 { self.x + self.width }

    pub fn bottom(&self) -> f64 { self.y + self.height }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Shrink by `insets`; the result may be invalid if the insets exceed the size.
    pub fn inset(&self, insets: &Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.hsum(),
            height: self.height - insets.vsum(),
        }
    }

    /// Horizontal containment only; pointer selection ignores the vertical axis.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x && x <= self.right()
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(DrawArea::from_size(240.0, 120.0).is_valid());
        assert!(!DrawArea::from_size(0.0, 120.0).is_valid());
        assert!(!DrawArea::from_size(240.0, -1.0).is_valid());
        assert!(!DrawArea::from_size(f64::NAN, 10.0).is_valid());
        assert!(!DrawArea::from_size(f64::INFINITY, 10.0).is_valid());
    }

    #[test]
    fn inset_shrinks_from_each_edge() {
        let a = DrawArea::from_size(200.0, 100.0).inset(&Insets::new(30.0, 0.0, 20.0, 0.0));
        assert_eq!(a, DrawArea::new(30.0, 20.0, 170.0, 80.0));
        let collapsed = DrawArea::from_size(10.0, 10.0).inset(&Insets::new(8.0, 8.0, 0.0, 0.0));
        assert!(!collapsed.is_valid());
    }

    #[test]
    fn clamp_orders_bounds() {
        assert_eq!(clamp(5.0, 10.0, 20.0), 10.0);
        assert_eq!(clamp(25.0, 10.0, 20.0), 20.0);
        assert_eq!(clamp(15.0, 10.0, 20.0), 15.0);
    }
}
