//! Core data types for the countyscope dataset layer
//!
//! This module defines the fundamental types shared by the loader, the chart
//! builders, and the API:
//! - `County`: the closed selection domain (exactly two values)
//! - `AirQualityRecord` / `MortalityRecord`: one prepared row per metric
//! - `Datasets`: the two unified tables held as process-wide immutable state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The enumerated geographic selection key shared by both metrics.
///
/// This set is closed: the dropdown offers exactly these values and the API
/// rejects anything else before it reaches the projection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum County {
    Suffolk,
    LosAngeles,
}

impl County {
    /// All counties, in the order their rows appear in the unified tables.
    pub const ALL: [County; 2] = [County::Suffolk, County::LosAngeles];

    /// The initially selected county.
    pub fn default_selection() -> County {
        County::Suffolk
    }

    /// Stable identifier used in API query strings and the dropdown value.
    pub fn id(&self) -> &'static str {
        match self {
            County::Suffolk => "suffolk",
            County::LosAngeles => "los-angeles",
        }
    }

    /// Short display name used in chart titles.
    pub fn name(&self) -> &'static str {
        match self {
            County::Suffolk => "Suffolk",
            County::LosAngeles => "Los Angeles",
        }
    }

    /// Full label shown in the selection control.
    pub fn label(&self) -> &'static str {
        match self {
            County::Suffolk => "Suffolk County, MA",
            County::LosAngeles => "Los Angeles County, CA",
        }
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for County {
    type Err = UnknownCounty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suffolk" | "Suffolk" => Ok(County::Suffolk),
            "los-angeles" | "Los Angeles" => Ok(County::LosAngeles),
            other => Err(UnknownCounty(other.to_string())),
        }
    }
}

/// Error returned when a selection value is outside the county set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown county: {0}")]
pub struct UnknownCounty(pub String);

/// One prepared air-quality reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityRecord {
    pub year: i32,
    pub aqi: f64,
    pub county: County,
}

/// One prepared infant-mortality count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortalityRecord {
    pub year: i32,
    pub deaths: f64,
    pub county: County,
}

/// The two unified tables, built once at startup and never mutated.
///
/// Handlers share this behind an `Arc`; since there are no writers after
/// initialization, concurrent sessions read it without coordination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub air_quality: Vec<AirQualityRecord>,
    pub mortality: Vec<MortalityRecord>,
}

impl Datasets {
    /// Air-quality rows for one county, in stored order.
    pub fn air_quality_for(&self, county: County) -> Vec<AirQualityRecord> {
        self.air_quality
            .iter()
            .copied()
            .filter(|r| r.county == county)
            .collect()
    }

    /// Mortality rows for one county, in stored order.
    pub fn mortality_for(&self, county: County) -> Vec<MortalityRecord> {
        self.mortality
            .iter()
            .copied()
            .filter(|r| r.county == county)
            .collect()
    }

    /// True when both tables hold at least one row.
    pub fn is_loaded(&self) -> bool {
        !self.air_quality.is_empty() && !self.mortality.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_parse_roundtrip() {
        for county in County::ALL {
            assert_eq!(county.id().parse::<County>().unwrap(), county);
            assert_eq!(county.name().parse::<County>().unwrap(), county);
        }
    }

    #[test]
    fn test_county_parse_rejects_unknown() {
        assert!("cook".parse::<County>().is_err());
        assert!("".parse::<County>().is_err());
    }

    #[test]
    fn test_default_selection_is_suffolk() {
        assert_eq!(County::default_selection(), County::Suffolk);
    }

    #[test]
    fn test_projection_filters_by_county() {
        let datasets = Datasets {
            air_quality: vec![
                AirQualityRecord { year: 2019, aqi: 42.0, county: County::Suffolk },
                AirQualityRecord { year: 2019, aqi: 55.0, county: County::LosAngeles },
                AirQualityRecord { year: 2020, aqi: 40.0, county: County::Suffolk },
            ],
            mortality: vec![
                MortalityRecord { year: 2018, deaths: 5.0, county: County::LosAngeles },
            ],
        };

        let suffolk = datasets.air_quality_for(County::Suffolk);
        assert_eq!(suffolk.len(), 2);
        assert!(suffolk.iter().all(|r| r.county == County::Suffolk));

        assert!(datasets.mortality_for(County::Suffolk).is_empty());
        assert_eq!(datasets.mortality_for(County::LosAngeles).len(), 1);
    }
}
