//! Chart layer
//!
//! Declarative chart specs plus the pure builders that derive them from the
//! datasets and the current county selection.

pub mod builder;
pub mod spec;

pub use builder::{air_quality_chart, mortality_chart};
pub use spec::{ChartKind, ChartPoint, ChartSpec};
