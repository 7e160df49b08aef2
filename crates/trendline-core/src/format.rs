// File: crates/trendline-core/src/format.rs
// Summary: Value formatting seam for labels and readouts, with a printf-style `%.Nf` default.

use crate::error::FormatError;

/// Turns a sample value into label text. Locale and currency handling belong to the host.
pub trait ValueFormatter {
    fn format_value(&self, value: f64) -> String;
}

impl<F: Fn(f64) -> String> ValueFormatter for F {
    fn format_value(&self, value: f64) -> String { self(value) }
}

/// Fixed-precision formatter parsed from a specifier such as `"%.1f"` or `"$%.2f USD"`.
/// Text around the single conversion is copied verbatim; `%%` is a literal percent sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecifierFormatter {
    prefix: String,
    precision: usize,
    suffix: String,
}

/// C's default precision for `%f`.
const DEFAULT_PRECISION: usize = 6;
const MAX_PRECISION: usize = 17;

impl SpecifierFormatter {
    pub fn new(spec: &str) -> Result<Self, FormatError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut precision = None;
        let mut chars = spec.chars().peekable();

        while let Some(c) = chars.next() {
            let out = if precision.is_some() { &mut suffix } else { &mut prefix };
            if c != '%' {
                out.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                out.push('%');
                continue;
            }
            if precision.is_some() {
                return Err(FormatError::MultipleConversions(spec.to_string()));
            }
            let mut conversion = String::new();
            let mut digits = String::new();
            if chars.peek() == Some(&'.') {
                conversion.push('.');
                chars.next();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() { break; }
                    digits.push(d);
                    conversion.push(d);
                    chars.next();
                }
            }
            match chars.next() {
                Some('f') => {}
                other => {
                    conversion.extend(other);
                    return Err(FormatError::Unsupported { spec: spec.to_string(), conversion });
                }
            }
            let p = if conversion.is_empty() {
                DEFAULT_PRECISION
            } else if digits.is_empty() {
                // "%.f" means zero digits, as in C.
                0
            } else {
                digits.parse().map_err(|_| FormatError::PrecisionOverflow(digits.clone()))?
            };
            if p > MAX_PRECISION {
                return Err(FormatError::PrecisionTooLarge(p));
            }
            precision = Some(p);
        }

        match precision {
            Some(precision) => Ok(Self { prefix, precision, suffix }),
            None => Err(FormatError::MissingConversion(spec.to_string())),
        }
    }

    pub fn precision(&self) -> usize { self.precision }
}

impl Default for SpecifierFormatter {
    /// `"%.1f"`, the widget's default value specifier.
    fn default() -> Self {
        Self { prefix: String::new(), precision: 1, suffix: String::new() }
    }
}

impl ValueFormatter for SpecifierFormatter {
    fn format_value(&self, value: f64) -> String {
        format!("{}{:.*}{}", self.prefix, self.precision, value, self.suffix)
    }
}
