// File: crates/trendline-core/src/error.rs
// Summary: Error types for the few inputs the core validates (strict series, format specifiers, options).
// Degenerate data, flat series, invalid areas and out-of-bounds pointers are not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("sample {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("format specifier {0:?} has no `%.Nf` conversion")]
    MissingConversion(String),
    #[error("format specifier {0:?} has more than one conversion")]
    MultipleConversions(String),
    #[error("unsupported conversion `%{conversion}` in {spec:?}")]
    Unsupported { spec: String, conversion: String },
    #[error("precision {0} exceeds the supported maximum of 17")]
    PrecisionTooLarge(usize),
    #[error("precision `{0}` is out of range")]
    PrecisionOverflow(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("annotation rail `{field}` must be finite and non-negative, got {value}")]
    InvalidRail { field: &'static str, value: f64 },
    #[error("headline value must be finite, got {0}")]
    InvalidHeadline(f64),
}
