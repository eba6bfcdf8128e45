//! Chart builders
//!
//! Pure functions of `(datasets, selected county)` producing the two chart
//! specs. No hidden state: the handlers call these on every selection change
//! and identical inputs yield identical specs.

use super::spec::{ChartKind, ChartPoint, ChartSpec};
use crate::data::{County, Datasets};

/// Line and marker color of the air-quality series.
const AQI_LINE_COLOR: &str = "#00b4d8";

/// Endpoints of the blues ramp used for bar intensity.
const RAMP_LIGHT: (u8, u8, u8) = (222, 235, 247);
const RAMP_DARK: (u8, u8, u8) = (8, 48, 107);

/// Air-quality line chart for one county.
///
/// Points are sorted ascending by year; source file order does not leak into
/// the spec.
pub fn air_quality_chart(datasets: &Datasets, county: County) -> ChartSpec {
    let mut records = datasets.air_quality_for(county);
    records.sort_by_key(|r| r.year);

    ChartSpec {
        kind: ChartKind::Line,
        title: format!("Air Quality Index of PM2.5 - {} County", county),
        x_label: "Year".to_string(),
        y_label: "Air Quality Index (μg/m³)".to_string(),
        points: records
            .iter()
            .map(|r| ChartPoint {
                year: r.year,
                value: r.aqi,
                color: AQI_LINE_COLOR.to_string(),
            })
            .collect(),
    }
}

/// Infant-mortality horizontal bar chart for one county.
///
/// Bar color intensity scales over the filtered subset's own min/max, not a
/// global scale across counties.
pub fn mortality_chart(datasets: &Datasets, county: County) -> ChartSpec {
    let mut records = datasets.mortality_for(county);
    records.sort_by_key(|r| r.year);

    let min = records.iter().map(|r| r.deaths).fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(|r| r.deaths)
        .fold(f64::NEG_INFINITY, f64::max);

    ChartSpec {
        kind: ChartKind::HorizontalBar,
        title: format!("Infant Mortality - {} County", county),
        x_label: "Number of Infant Deaths".to_string(),
        y_label: "Year".to_string(),
        points: records
            .iter()
            .map(|r| ChartPoint {
                year: r.year,
                value: r.deaths,
                color: blues_ramp(intensity(r.deaths, min, max)),
            })
            .collect(),
    }
}

/// Position of `value` within `[min, max]`, clamped to `[0, 1]`.
///
/// A constant subset (min == max) maps to 1.0 so a single bar is drawn at
/// full intensity rather than the near-white end of the ramp.
fn intensity(value: f64, min: f64, max: f64) -> f64 {
    if max - min <= f64::EPSILON {
        return 1.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Interpolate the blues ramp at `ratio` in `[0, 1]`.
fn blues_ramp(ratio: f64) -> String {
    let lerp = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio).round() as u8
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(RAMP_LIGHT.0, RAMP_DARK.0),
        lerp(RAMP_LIGHT.1, RAMP_DARK.1),
        lerp(RAMP_LIGHT.2, RAMP_DARK.2),
    )
}
