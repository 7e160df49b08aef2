// File: crates/trendline-core/src/lib.rs
// Summary: Core library entry point; data-to-geometry mapping and nearest-point interaction for line charts.

pub mod annotate;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod path;
pub mod readout;
pub mod scale;
pub mod selection;
pub mod series;
pub mod types;

pub use annotate::{place_max_label, place_min_label, AnnotationPlacement, AnnotationRails, Extremum};
pub use chart::{ChartGeometry, ChartOptions, LineChart};
pub use error::{ChartError, FormatError, SeriesError};
pub use format::{SpecifierFormatter, ValueFormatter};
pub use geometry::{DrawArea, ScreenPoint};
pub use path::{build_fill, build_path, CubicSegment, FillRegion, LinePath, LineShape, PathCommand};
pub use readout::Readout;
pub use scale::{nearest_index_for_point, point_for_index, CoordinateMapper, EdgePolicy, Selection};
pub use selection::{PointerEvent, PointerPhase, SelectionState, SelectionUpdate};
pub use series::SampleSeries;
pub use types::Insets;
