//! Declarative chart specifications
//!
//! A `ChartSpec` is the complete description of one chart (kind, title, axes,
//! points with colors) handed to whatever rendering layer draws it. It is a
//! plain value: building one has no side effects and equal inputs produce
//! equal specs, which is what the API tests assert.

use serde::Serialize;

/// How the points of a spec should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Connected line with a marker at every point
    Line,
    /// One horizontal bar per point, length = value
    HorizontalBar,
}

/// A single datum: one year and the metric value for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub year: i32,
    pub value: f64,
    /// Fill color for this point (uniform for lines, ramped for bars)
    pub color: String,
}

/// One complete chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
