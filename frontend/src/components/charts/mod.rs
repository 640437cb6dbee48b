//! Inline SVG charts for the dashboard.
//!
//! Each chart is a small component over a list of `ChartDatum`; the
//! coordinate math lives in `geometry`.

pub mod bar;
pub mod geometry;
pub mod line;
pub mod pie;

pub use bar::{BarChart, Orientation};
pub use line::LineChart;
pub use pie::PieChart;

/// One labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    /// Text shown next to the bar or point, e.g. `"$1,500"`.
    pub display: String,
    pub color: &'static str,
}
