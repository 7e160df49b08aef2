// File: crates/trendline-core/src/types.rs
// Summary: Shared types and constants (insets, default sizes, host layout presets).

/// Reference draw-area width of the compact widget.
pub const WIDTH: f64 = 240.0;
/// Reference draw-area height of the compact widget.
pub const HEIGHT: f64 = 120.0;

/// Margins used to derive a draw area from a host frame.
/// Contract: all fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }
    /// Card layout: the annotation column reserves 24px on the trailing edge.
    pub const fn card() -> Self { Self::new(0.0, 24.0, 0.0, 0.0) }
    /// Framed layout: a 30px leading gutter for the legend.
    pub const fn framed() -> Self { Self::new(30.0, 0.0, 0.0, 0.0) }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self { Self::zero() }
}
