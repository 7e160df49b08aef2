// File: crates/trendline-core/src/readout.rs
// Summary: Headline readout (current value, change since first sample, whole-percent change).

use chrono::{DateTime, Utc};

use crate::series::SampleSeries;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    /// Selected sample while dragging, otherwise the headline value.
    pub value: f64,
    /// `value - first sample`.
    pub change: f64,
    /// Whole percent change against the first sample, truncated toward zero.
    /// `None` with fewer than two samples or a zero first sample.
    pub percent_change: Option<i64>,
    /// Timestamp of the selected sample, when there is one.
    pub timestamp: Option<DateTime<Utc>>,
}

impl Readout {
    /// `None` for an empty series. `headline` falls back to the last sample.
    pub fn compute(series: &SampleSeries, selected: Option<usize>, headline: Option<f64>) -> Option<Self> {
        let first = series.first()?;
        let (value, timestamp) = match selected.and_then(|i| series.value(i).map(|v| (i, v))) {
            Some((i, v)) => (v, series.timestamp(i)),
            None => (headline.or(series.last())?, None),
        };
        let percent_change = if series.count() > 1 && first != 0.0 {
            let pct = ((value / first) - 1.0) * 100.0;
            pct.is_finite().then(|| pct.trunc() as i64)
        } else {
            None
        };
        Some(Self { value, change: value - first, percent_change, timestamp })
    }

    /// Gains (including no change) versus losses; the host picks colours from this.
    pub fn is_gain(&self) -> bool { self.change >= 0.0 }
}
