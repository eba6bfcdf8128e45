//! CSV ingestion and dataset preparation
//!
//! Reads the four raw sources (two metrics x two counties), selects the two
//! relevant columns of each by header name, coerces both to numeric, drops
//! rows that fail coercion, tags rows with their county, and concatenates
//! same-metric tables (Suffolk rows first, then Los Angeles).
//!
//! Loading happens exactly once at startup. A missing file or missing column
//! is fatal; a non-numeric cell only drops that row.

use super::error::{DataError, DataResult};
use super::types::{AirQualityRecord, County, Datasets, MortalityRecord};
use crate::config::DataConfig;
use std::io;
use std::path::Path;

/// Column holding the year in every source.
pub const YEAR_COLUMN: &str = "Year";
/// Value column of the air-quality sources.
pub const AQI_COLUMN: &str = "AQI";
/// Value column of the mortality sources.
pub const DEATHS_COLUMN: &str = "Number of Deaths";

/// One coerced (year, value) row before county tagging.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RawRow {
    year: i32,
    value: f64,
}

/// Build both unified tables from the configured source files.
///
/// Called once at startup; the result is held process-wide for the rest of
/// the run.
pub fn load_datasets(config: &DataConfig) -> DataResult<Datasets> {
    let mut air_quality = Vec::new();
    for (path, county) in [
        (&config.aqi_suffolk, County::Suffolk),
        (&config.aqi_los_angeles, County::LosAngeles),
    ] {
        for row in load_source(path, AQI_COLUMN)? {
            air_quality.push(AirQualityRecord {
                year: row.year,
                aqi: row.value,
                county,
            });
        }
    }

    let mut mortality = Vec::new();
    for (path, county) in [
        (&config.deaths_suffolk, County::Suffolk),
        (&config.deaths_los_angeles, County::LosAngeles),
    ] {
        for row in load_source(path, DEATHS_COLUMN)? {
            mortality.push(MortalityRecord {
                year: row.year,
                deaths: row.value,
                county,
            });
        }
    }

    tracing::info!(
        air_quality_rows = air_quality.len(),
        mortality_rows = mortality.len(),
        "Datasets loaded"
    );

    Ok(Datasets {
        air_quality,
        mortality,
    })
}

/// Load one source file, keeping the year column and `value_column`.
fn load_source(path: &Path, value_column: &str) -> DataResult<Vec<RawRow>> {
    let file = std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rows = read_rows(file, value_column, &|column| DataError::MissingColumn {
        path: path.to_path_buf(),
        column,
    })
    .map_err(|e| match e {
        ReadError::Csv(source) => DataError::Csv {
            path: path.to_path_buf(),
            source,
        },
        ReadError::Data(e) => e,
    })?;

    tracing::info!(
        path = %path.display(),
        rows = rows.kept.len(),
        dropped = rows.dropped,
        "Loaded source"
    );

    Ok(rows.kept)
}

/// Coerced rows plus the count of rows dropped by coercion.
struct CoercedRows {
    kept: Vec<RawRow>,
    dropped: usize,
}

enum ReadError {
    Csv(csv::Error),
    Data(DataError),
}

/// Read and coerce rows from any CSV reader.
///
/// Rows where the year or the value fail numeric coercion are dropped and
/// counted, never surfaced as errors. A missing header is an error built via
/// `missing` so callers can attach the path.
fn read_rows<R: io::Read>(
    reader: R,
    value_column: &str,
    missing: &dyn Fn(String) -> DataError,
) -> Result<CoercedRows, ReadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(ReadError::Csv)?.clone();
    let year_idx = find_column(&headers, YEAR_COLUMN)
        .ok_or_else(|| ReadError::Data(missing(YEAR_COLUMN.to_string())))?;
    let value_idx = find_column(&headers, value_column)
        .ok_or_else(|| ReadError::Data(missing(value_column.to_string())))?;

    let mut kept = Vec::new();
    let mut dropped = 0;

    for (line_num, result) in csv_reader.records().enumerate() {
        // Header occupies line 1
        let line = line_num + 2;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(line, error = %e, "Dropped unparseable row");
                dropped += 1;
                continue;
            }
        };

        let year = record.get(year_idx).and_then(coerce_numeric);
        let value = record.get(value_idx).and_then(coerce_numeric);

        match (year, value) {
            (Some(year), Some(value)) => kept.push(RawRow {
                year: year as i32,
                value,
            }),
            _ => {
                tracing::debug!(line, "Dropped row with non-numeric cell");
                dropped += 1;
            }
        }
    }

    Ok(CoercedRows { kept, dropped })
}

/// Locate a column by exact header name (whitespace-trimmed).
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Coerce a cell to a finite number, `None` on failure.
fn coerce_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn test_config(dir: &TempDir) -> DataConfig {
        DataConfig {
            aqi_suffolk: write_source(
                dir,
                "aqi-suffolk.csv",
                "Year,AQI\n2019,42\n2020,N/A\n2021,38\n",
            ),
            aqi_los_angeles: write_source(
                dir,
                "aqi-la.csv",
                "Year,AQI\n2019,61.5\n2020,58\n",
            ),
            deaths_suffolk: write_source(
                dir,
                "deaths-suffolk.csv",
                "Year,Number of Deaths\n2018,12\n2019,10\n",
            ),
            deaths_los_angeles: write_source(
                dir,
                "deaths-la.csv",
                "Year,Number of Deaths\n2018,5\n2019,9\n",
            ),
        }
    }

    #[test]
    fn test_valid_rows_appear_exactly_once_with_county_tag() {
        let dir = TempDir::new().unwrap();
        let datasets = load_datasets(&test_config(&dir)).unwrap();

        // Suffolk's coercible rows, then Los Angeles's
        assert_eq!(datasets.air_quality.len(), 4);
        assert_eq!(
            datasets.air_quality[0],
            AirQualityRecord { year: 2019, aqi: 42.0, county: County::Suffolk }
        );
        assert_eq!(
            datasets.air_quality[1],
            AirQualityRecord { year: 2021, aqi: 38.0, county: County::Suffolk }
        );
        assert_eq!(datasets.air_quality[2].county, County::LosAngeles);
        assert_eq!(datasets.air_quality[3].county, County::LosAngeles);

        assert_eq!(datasets.mortality.len(), 4);
        assert_eq!(
            datasets.mortality[2],
            MortalityRecord { year: 2018, deaths: 5.0, county: County::LosAngeles }
        );
    }

    #[test]
    fn test_coercion_failure_drops_whole_row() {
        let result = read_rows(
            "Year,AQI\n2019,42\n2020,N/A\nbad,38\n2021,38\n".as_bytes(),
            AQI_COLUMN,
            &|column| DataError::MissingColumn {
                path: PathBuf::from("test.csv"),
                column,
            },
        );
        let rows = match result {
            Ok(rows) => rows,
            Err(_) => panic!("read_rows failed"),
        };

        assert_eq!(rows.dropped, 2);
        assert_eq!(
            rows.kept,
            vec![
                RawRow { year: 2019, value: 42.0 },
                RawRow { year: 2021, value: 38.0 },
            ]
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let result = read_rows(
            "State,Year,Number of Deaths,Rate\nMA,2018,12,0.4\nMA,2019,10,0.3\n".as_bytes(),
            DEATHS_COLUMN,
            &|column| DataError::MissingColumn {
                path: PathBuf::from("test.csv"),
                column,
            },
        );
        let rows = result.ok().unwrap();
        assert_eq!(rows.kept.len(), 2);
        assert_eq!(rows.kept[0], RawRow { year: 2018, value: 12.0 });
    }

    #[test]
    fn test_missing_value_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.aqi_suffolk = write_source(&dir, "bad.csv", "Year,Ozone\n2019,42\n");

        let err = load_datasets(&config).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column, .. } if column == AQI_COLUMN));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.deaths_los_angeles = dir.path().join("does-not-exist.csv");

        let err = load_datasets(&config).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_fractional_year_truncates() {
        let rows = read_rows(
            "Year,AQI\n2019.0,42\n".as_bytes(),
            AQI_COLUMN,
            &|column| DataError::MissingColumn {
                path: PathBuf::from("test.csv"),
                column,
            },
        )
        .ok()
        .unwrap();
        assert_eq!(rows.kept[0].year, 2019);
    }
}
