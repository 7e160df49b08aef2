// File: crates/trendline-core/src/series.rs
// Summary: Immutable sample series with cached extrema and optional per-sample timestamps.
// Notes:
// - Extrema are scanned once at construction with strict comparators, so the
//   first occurrence of a tied minimum/maximum wins.
// - An empty series is legal; every consumer treats it as "nothing to draw".

use chrono::{DateTime, Utc};

use crate::error::SeriesError;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Extrema {
    min: f64,
    min_index: usize,
    max: f64,
    max_index: usize,
}

impl Extrema {
    fn scan(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let mut e = Extrema { min: first, min_index: 0, max: first, max_index: 0 };
        for (offset, &v) in rest.iter().enumerate() {
            let i = offset + 1;
            if v < e.min { e.min = v; e.min_index = i; }
            if v > e.max { e.max = v; e.max_index = i; }
        }
        Some(e)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    points: Vec<f64>,
    timestamps: Option<Vec<DateTime<Utc>>>,
    extrema: Option<Extrema>,
}

impl SampleSeries {
    /// Build a series from raw values. Never fails; values are expected to be finite.
    pub fn new(points: Vec<f64>) -> Self {
        let extrema = Extrema::scan(&points);
        Self { points, timestamps: None, extrema }
    }

    /// Build a series, rejecting NaN and infinite samples.
    pub fn try_new(points: Vec<f64>) -> Result<Self, SeriesError> {
        if let Some(index) = points.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NonFinite { index, value: points[index] });
        }
        Ok(Self::new(points))
    }

    /// Build a series from `(timestamp, value)` pairs, keeping the timestamps for readouts.
    pub fn from_dated(samples: Vec<(DateTime<Utc>, f64)>) -> Self {
        let (timestamps, points): (Vec<_>, Vec<_>) = samples.into_iter().unzip();
        let mut series = Self::new(points);
        series.timestamps = Some(timestamps);
        series
    }

    pub fn count(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn values(&self) -> &[f64] { &self.points }

    pub fn value(&self, index: usize) -> Option<f64> { self.points.get(index).copied() }

    /// Timestamp of a sample, when the series was built from dated samples.
    pub fn timestamp(&self, index: usize) -> Option<DateTime<Utc>> {
        self.timestamps.as_ref().and_then(|ts| ts.get(index).copied())
    }

    pub fn first(&self) -> Option<f64> { self.points.first().copied() }

    pub fn last(&self) -> Option<f64> { self.points.last().copied() }

    pub fn min(&self) -> Option<f64> { self.extrema.map(|e| e.min) }

    pub fn max(&self) -> Option<f64> { self.extrema.map(|e| e.max) }

    /// Index of the first occurrence of the minimum.
    pub fn min_index(&self) -> Option<usize> { self.extrema.map(|e| e.min_index) }

    /// Index of the first occurrence of the maximum.
    pub fn max_index(&self) -> Option<usize> { self.extrema.map(|e| e.max_index) }

    /// True when the series is non-empty and every sample has the same value.
    pub fn is_flat(&self) -> bool {
        matches!(self.extrema, Some(e) if e.max == e.min)
    }
}

impl From<Vec<f64>> for SampleSeries {
    fn from(points: Vec<f64>) -> Self { Self::new(points) }
}

impl FromIterator<f64> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
