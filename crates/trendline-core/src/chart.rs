// File: crates/trendline-core/src/chart.rs
// Summary: LineChart façade; caches geometry per data/size change and routes pointer events.

use tracing::trace;

use crate::annotate::{place_max_label, place_min_label, AnnotationPlacement, AnnotationRails};
use crate::error::ChartError;
use crate::format::{SpecifierFormatter, ValueFormatter};
use crate::geometry::DrawArea;
use crate::path::{path_from_mapper, FillRegion, LinePath, LineShape};
use crate::readout::Readout;
use crate::scale::{CoordinateMapper, EdgePolicy, Selection};
use crate::selection::{PointerEvent, PointerPhase, SelectionState, SelectionUpdate};
use crate::series::SampleSeries;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub shape: LineShape,
    pub edge_policy: EdgePolicy,
    pub rails: AnnotationRails,
    /// Value shown when nothing is selected; defaults to the last sample.
    pub headline: Option<f64>,
    /// Compute min/max annotations at all.
    pub show_extrema: bool,
    /// While dragging off the data, keep reading out the last picked sample
    /// instead of falling back to the headline.
    pub sticky_readout: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            shape: LineShape::Curved,
            edge_policy: EdgePolicy::Deselect,
            rails: AnnotationRails::default(),
            headline: None,
            show_extrema: true,
            sticky_readout: false,
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.rails.validate()?;
        match self.headline {
            Some(h) if !h.is_finite() => Err(ChartError::InvalidHeadline(h)),
            _ => Ok(()),
        }
    }
}

/// Everything the renderer needs for one data/size combination.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub line: LinePath,
    pub fill: FillRegion,
    pub min_label: Option<AnnotationPlacement>,
    pub max_label: Option<AnnotationPlacement>,
}

impl ChartGeometry {
    fn build(series: &SampleSeries, area: DrawArea, opts: &ChartOptions, formatter: &dyn ValueFormatter) -> Self {
        let line = match CoordinateMapper::new(series, area) {
            Some(mapper) => path_from_mapper(&mapper, opts.shape),
            None => LinePath::empty(opts.shape),
        };
        let (min_label, max_label) = if opts.show_extrema {
            (
                place_min_label(series, area, &opts.rails, formatter),
                place_max_label(series, area, &opts.rails, formatter),
            )
        } else {
            (None, None)
        };
        trace!(samples = series.count(), width = area.width, height = area.height, "rebuilt chart geometry");
        Self {
            fill: FillRegion { line: line.clone(), baseline_y: area.bottom() },
            line,
            min_label,
            max_label,
        }
    }
}

pub struct LineChart {
    series: SampleSeries,
    area: DrawArea,
    options: ChartOptions,
    formatter: Box<dyn ValueFormatter + Send + Sync>,
    selection: SelectionState,
    /// Last index a drag landed on; cleared when the drag ends.
    last_picked: Option<usize>,
    geometry: ChartGeometry,
}

impl LineChart {
    pub fn new(series: SampleSeries, area: DrawArea, options: ChartOptions) -> Result<Self, ChartError> {
        Self::with_formatter(series, area, options, SpecifierFormatter::default())
    }

    pub fn with_formatter(
        series: SampleSeries,
        area: DrawArea,
        options: ChartOptions,
        formatter: impl ValueFormatter + Send + Sync + 'static,
    ) -> Result<Self, ChartError> {
        options.validate()?;
        let geometry = ChartGeometry::build(&series, area, &options, &formatter);
        Ok(Self {
            series,
            area,
            options,
            formatter: Box::new(formatter),
            selection: SelectionState::default(),
            last_picked: None,
            geometry,
        })
    }

    fn rebuild(&mut self) {
        self.geometry = ChartGeometry::build(&self.series, self.area, &self.options, self.formatter.as_ref());
    }

    /// Replace the data. Any selection is dropped.
    pub fn set_data(&mut self, series: SampleSeries) {
        self.series = series;
        self.selection.reset();
        self.last_picked = None;
        self.rebuild();
    }

    /// Update the draw area. No-op when unchanged.
    pub fn resize(&mut self, area: DrawArea) {
        if area == self.area {
            return;
        }
        self.area = area;
        self.rebuild();
    }

    pub fn set_options(&mut self, options: ChartOptions) -> Result<(), ChartError> {
        options.validate()?;
        self.options = options;
        self.rebuild();
        Ok(())
    }

    pub fn set_formatter(&mut self, formatter: impl ValueFormatter + Send + Sync + 'static) {
        self.formatter = Box::new(formatter);
        self.rebuild();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> SelectionUpdate {
        let mapper = CoordinateMapper::new(&self.series, self.area);
        let update = self.selection.reduce(event, mapper.as_ref(), self.options.edge_policy);
        self.selection = update.state;
        self.last_picked = match event.phase {
            PointerPhase::Start => update.state.active_index,
            PointerPhase::Move => update.state.active_index.or(self.last_picked),
            PointerPhase::End => None,
        };
        update
    }

    pub fn series(&self) -> &SampleSeries { &self.series }

    pub fn area(&self) -> DrawArea { self.area }

    pub fn options(&self) -> &ChartOptions { &self.options }

    pub fn geometry(&self) -> &ChartGeometry { &self.geometry }

    pub fn selection(&self) -> SelectionState { self.selection }

    /// Indicator position and value for the active index.
    pub fn selected(&self) -> Option<Selection> {
        let index = self.selection.active_index?;
        let mapper = CoordinateMapper::new(&self.series, self.area)?;
        Some(Selection { index, point: mapper.point_for_index(index)?, value: self.series.value(index)? })
    }

    /// Min/max labels to draw right now; hidden during a drag.
    pub fn visible_annotations(&self) -> impl Iterator<Item = &AnnotationPlacement> {
        let show = self.selection.shows_extrema();
        self.geometry.min_label.iter().chain(self.geometry.max_label.iter()).filter(move |_| show)
    }

    pub fn readout(&self) -> Option<Readout> {
        let index = match self.selection.active_index {
            None if self.options.sticky_readout && self.selection.is_dragging => self.last_picked,
            index => index,
        };
        Readout::compute(&self.series, index, self.options.headline)
    }

    /// Format a value with the chart's formatter, for readouts.
    pub fn format_value(&self, value: f64) -> String { self.formatter.format_value(value) }
}

impl std::fmt::Debug for LineChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineChart")
            .field("series", &self.series)
            .field("area", &self.area)
            .field("options", &self.options)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
