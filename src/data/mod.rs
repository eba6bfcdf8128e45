//! Dataset layer
//!
//! Types for the two unified tables plus the startup-time CSV loader.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DataError, DataResult};
pub use loader::load_datasets;
pub use types::{AirQualityRecord, County, Datasets, MortalityRecord, UnknownCounty};
