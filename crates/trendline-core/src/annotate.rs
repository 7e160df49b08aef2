// File: crates/trendline-core/src/annotate.rs
// Summary: Min/max label placement on fixed top/bottom rails, clamped inside the draw area.

use crate::error::ChartError;
use crate::format::ValueFormatter;
use crate::geometry::{clamp, DrawArea, ScreenPoint};
use crate::scale::CoordinateMapper;
use crate::series::SampleSeries;

/// Where extrema labels may sit. Margins keep label text from running off either edge;
/// offsets move the rails in from the bottom (min) and top (max) of the area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationRails {
    pub leading_margin: f64,
    pub trailing_margin: f64,
    pub bottom_offset: f64,
    pub top_offset: f64,
}

impl AnnotationRails {
    pub const fn symmetric(margin: f64) -> Self {
        Self { leading_margin: margin, trailing_margin: margin, bottom_offset: 0.0, top_offset: 0.0 }
    }

    pub fn with_offsets(mut self, bottom: f64, top: f64) -> Self {
        self.bottom_offset = bottom;
        self.top_offset = top;
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let fields = [
            ("leading_margin", self.leading_margin),
            ("trailing_margin", self.trailing_margin),
            ("bottom_offset", self.bottom_offset),
            ("top_offset", self.top_offset),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ChartError::InvalidRail { field, value });
            }
        }
        Ok(())
    }

    /// Clamp a label x into the rail span, centring it when the area is narrower than both margins.
    pub fn clamp_x(&self, x: f64, area: &DrawArea) -> f64 {
        let lo = area.x + self.leading_margin;
        let hi = area.right() - self.trailing_margin;
        if hi < lo {
            return area.center().x;
        }
        clamp(x, lo, hi)
    }
}

impl Default for AnnotationRails {
    /// Card layout: 10px leading margin, 40px reserved for the label width on the trailing side.
    fn default() -> Self {
        Self { leading_margin: 10.0, trailing_margin: 40.0, bottom_offset: 0.0, top_offset: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationPlacement {
    pub extremum: Extremum,
    pub index: usize,
    pub value: f64,
    pub point: ScreenPoint,
    pub label: String,
}

fn place(
    extremum: Extremum,
    series: &SampleSeries,
    area: DrawArea,
    rails: &AnnotationRails,
    formatter: &dyn ValueFormatter,
) -> Option<AnnotationPlacement> {
    let mapper = CoordinateMapper::new(series, area)?;
    let (index, value) = match extremum {
        Extremum::Min => (series.min_index()?, series.min()?),
        Extremum::Max => (series.max_index()?, series.max()?),
    };
    let x = rails.clamp_x(mapper.point_for_index(index)?.x, &area);
    let y = match extremum {
        Extremum::Min => area.bottom() - rails.bottom_offset,
        Extremum::Max => area.y + rails.top_offset,
    };
    Some(AnnotationPlacement {
        extremum,
        index,
        value,
        point: ScreenPoint::new(x, y),
        label: formatter.format_value(value),
    })
}

/// Label for the first occurrence of the minimum, on the bottom rail.
pub fn place_min_label(
    series: &SampleSeries,
    area: DrawArea,
    rails: &AnnotationRails,
    formatter: &dyn ValueFormatter,
) -> Option<AnnotationPlacement> {
    place(Extremum::Min, series, area, rails, formatter)
}

/// Label for the first occurrence of the maximum, on the top rail.
pub fn place_max_label(
    series: &SampleSeries,
    area: DrawArea,
    rails: &AnnotationRails,
    formatter: &dyn ValueFormatter,
) -> Option<AnnotationPlacement> {
    place(Extremum::Max, series, area, rails, formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SpecifierFormatter;

    fn fmt() -> SpecifierFormatter { SpecifierFormatter::default() }

    #[test]
    fn labels_sit_on_rails_not_on_data() {
        let s = SampleSeries::new(vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0]);
        let area = DrawArea::from_size(240.0, 120.0);
        let rails = AnnotationRails::default();
        let min = place_min_label(&s, area, &rails, &fmt()).unwrap();
        assert_eq!((min.index, min.value), (6, 7.0));
        assert_eq!(min.point, ScreenPoint::new(180.0, 120.0));
        assert_eq!(min.label, "7.0");
        let max = place_max_label(&s, area, &rails, &fmt()).unwrap();
        assert_eq!((max.index, max.value), (2, 54.0));
        assert_eq!(max.point, ScreenPoint::new(60.0, 0.0));
    }

    #[test]
    fn labels_clamp_to_margins() {
        // min at the first sample, max at the last
        let s = SampleSeries::new(vec![1.0, 2.0, 3.0]);
        let area = DrawArea::from_size(200.0, 100.0);
        let rails = AnnotationRails::default().with_offsets(12.0, 4.0);
        let min = place_min_label(&s, area, &rails, &fmt()).unwrap();
        assert_eq!(min.point, ScreenPoint::new(10.0, 88.0));
        let max = place_max_label(&s, area, &rails, &fmt()).unwrap();
        assert_eq!(max.point, ScreenPoint::new(160.0, 4.0));
    }

    #[test]
    fn narrow_area_centres_label() {
        let s = SampleSeries::new(vec![1.0, 2.0]);
        let area = DrawArea::from_size(30.0, 10.0);
        let max = place_max_label(&s, area, &AnnotationRails::default(), &fmt()).unwrap();
        assert_eq!(max.point.x, 15.0);
    }

    #[test]
    fn empty_or_invalid_gives_nothing() {
        let rails = AnnotationRails::symmetric(5.0);
        assert!(place_min_label(&SampleSeries::new(Vec::new()), DrawArea::from_size(10.0, 10.0), &rails, &fmt()).is_none());
        let s = SampleSeries::new(vec![1.0]);
        assert!(place_max_label(&s, DrawArea::from_size(0.0, 10.0), &rails, &fmt()).is_none());
        let single = place_max_label(&s, DrawArea::from_size(100.0, 10.0), &rails, &fmt()).unwrap();
        assert_eq!(single.point.x, 50.0);
    }

    #[test]
    fn rails_validate() {
        assert!(AnnotationRails::default().validate().is_ok());
        let bad = AnnotationRails { leading_margin: -1.0, ..AnnotationRails::default() };
        assert_eq!(bad.validate(), Err(ChartError::InvalidRail { field: "leading_margin", value: -1.0 }));
        let nan = AnnotationRails::symmetric(f64::NAN);
        assert!(nan.validate().is_err());
    }
}
