use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;

use super::model::{Dataset, Measurement};
use crate::error::{ReportError, Result};

/// I/O failures are read errors; anything the parser rejects is a schema error.
fn csv_failure(path: &Path, context: String, err: csv::Error) -> ReportError {
    if err.is_io_error() {
        ReportError::read(path, format!("{context}: {err}"))
    } else {
        ReportError::schema(path, format!("{context}: {err}"))
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a benchmark table from a comma-separated file with a header row.
///
/// * Every column in [`Measurement::REQUIRED_COLUMNS`] must be present in the
///   header, otherwise a [`ReportError::Schema`] is returned before any row
///   is read.
/// * Extra columns are ignored.
/// * Each value must parse as its declared type (integer sizes, float metrics).
pub fn load_csv<R>(path: &Path) -> Result<Dataset<R>>
where
    R: Measurement + DeserializeOwned,
{
    if !path.exists() {
        return Err(ReportError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_failure(path, "opening CSV".into(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_failure(path, "reading CSV headers".into(), e))?
        .clone();

    for column in R::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ReportError::schema(
                path,
                format!("missing required column '{column}'"),
            ));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<R>().enumerate() {
        // Row numbers are 1-based and count the header as row 1.
        let record = result.map_err(|e| csv_failure(path, format!("row {}", row_no + 2), e))?;
        rows.push(record);
    }

    if rows.is_empty() {
        return Err(ReportError::schema(path, "no data rows"));
    }

    let dataset = Dataset::new(path, rows);
    if let Some(row) = dataset.first_unordered_row() {
        warn!(
            "{}: {} is not ascending at data row {row}; growth factors assume ascending sizes",
            R::DATASET,
            dataset.source().display()
        );
    }

    info!("Loaded {} rows from {}", dataset.len(), dataset.source().display());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EarthquakeRecord, HospitalRecord};
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_hospital_rows_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "complexity_results.csv",
            "Patients,Time_ms,Avg_Wait_Time\n100,1.5,12.0\n200,3.25,18.5\n",
        );

        let ds = load_csv::<HospitalRecord>(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.rows()[1],
            HospitalRecord {
                patients: 200,
                time_ms: 3.25,
                avg_wait_time: 18.5
            }
        );
        assert_eq!(ds.source(), path.as_path());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "earthquake_results.csv",
            "Stations,Time_ms,Error,Location_X,Location_Y\n10,0.02,0.5,36.5,-118.3\n",
        );

        let ds = load_csv::<EarthquakeRecord>(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows()[0].location_x, 36.5);
        assert_eq!(ds.rows()[0].location_y, -118.3);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = load_csv::<HospitalRecord>(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(ReportError::MissingFile { .. })));
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file.
        let path = dir.path().join("complexity_results.csv");
        fs::create_dir(&path).unwrap();

        match load_csv::<HospitalRecord>(&path) {
            Err(ReportError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "h.csv", "Patients,Avg_Wait_Time\n100,12.0\n");

        match load_csv::<HospitalRecord>(&path) {
            Err(ReportError::Schema { detail, .. }) => assert!(detail.contains("Time_ms")),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_detected_without_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "h.csv", "Patients,Avg_Wait_Time\n");
        let result = load_csv::<HospitalRecord>(&path);
        assert!(matches!(result, Err(ReportError::Schema { .. })));
    }

    #[test]
    fn non_numeric_value_is_a_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "h.csv",
            "Patients,Time_ms,Avg_Wait_Time\n100,fast,12.0\n",
        );

        match load_csv::<HospitalRecord>(&path) {
            Err(ReportError::Schema { detail, .. }) => assert!(detail.contains("row 2")),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn fractional_size_is_a_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "h.csv",
            "Patients,Time_ms,Avg_Wait_Time\n100.5,1.0,12.0\n",
        );
        let result = load_csv::<HospitalRecord>(&path);
        assert!(matches!(result, Err(ReportError::Schema { .. })));
    }

    #[test]
    fn header_only_file_is_a_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "h.csv", "Patients,Time_ms,Avg_Wait_Time\n");

        match load_csv::<HospitalRecord>(&path) {
            Err(ReportError::Schema { detail, .. }) => assert_eq!(detail, "no data rows"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn unordered_rows_still_load() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "h.csv",
            "Patients,Time_ms,Avg_Wait_Time\n200,2.0,1.0\n100,1.0,1.0\n",
        );
        let ds = load_csv::<HospitalRecord>(&path).unwrap();
        assert_eq!(ds.first_unordered_row(), Some(1));
    }
}
