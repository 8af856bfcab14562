use std::path::{Path, PathBuf};

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Measurement – the shape shared by both benchmark tables
// ---------------------------------------------------------------------------

/// One benchmark row: an input size and the wall-clock cost measured for it.
///
/// Implemented by both record types so loading, ordering checks and the
/// growth-factor diagnostic can be written once.
pub trait Measurement {
    /// Human-readable dataset name used in logs and error messages.
    const DATASET: &'static str;

    /// Header names that must be present in the source file.
    const REQUIRED_COLUMNS: &'static [&'static str];

    /// Independent variable (patient or station count).
    fn size(&self) -> u64;

    /// Measured execution time in milliseconds.
    fn time_ms(&self) -> f64;
}

// ---------------------------------------------------------------------------
// HospitalRecord – one row of complexity_results.csv
// ---------------------------------------------------------------------------

/// Result of one greedy triage run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HospitalRecord {
    #[serde(rename = "Patients")]
    pub patients: u64,
    #[serde(rename = "Time_ms")]
    pub time_ms: f64,
    /// Average wait time in minutes.
    #[serde(rename = "Avg_Wait_Time")]
    pub avg_wait_time: f64,
}

impl Measurement for HospitalRecord {
    const DATASET: &'static str = "Hospital Triage";
    const REQUIRED_COLUMNS: &'static [&'static str] = &["Patients", "Time_ms", "Avg_Wait_Time"];

    fn size(&self) -> u64 {
        self.patients
    }

    fn time_ms(&self) -> f64 {
        self.time_ms
    }
}

// ---------------------------------------------------------------------------
// EarthquakeRecord – one row of earthquake_results.csv
// ---------------------------------------------------------------------------

/// Result of one divide-and-conquer epicenter run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EarthquakeRecord {
    #[serde(rename = "Stations")]
    pub stations: u64,
    #[serde(rename = "Time_ms")]
    pub time_ms: f64,
    /// Estimated latitude.
    #[serde(rename = "Location_X")]
    pub location_x: f64,
    /// Estimated longitude.
    #[serde(rename = "Location_Y")]
    pub location_y: f64,
}

impl Measurement for EarthquakeRecord {
    const DATASET: &'static str = "Earthquake Locator";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["Stations", "Time_ms", "Location_X", "Location_Y"];

    fn size(&self) -> u64 {
        self.stations
    }

    fn time_ms(&self) -> f64 {
        self.time_ms
    }
}

// ---------------------------------------------------------------------------
// Dataset – an immutable, ordered table of records
// ---------------------------------------------------------------------------

/// Rows in file order together with the path they came from.
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    source: PathBuf,
    rows: Vec<R>,
}

impl<R: Measurement> Dataset<R> {
    pub fn new(source: impl Into<PathBuf>, rows: Vec<R>) -> Self {
        Dataset {
            source: source.into(),
            rows,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Independent variable of every row, as plotted on the x-axis.
    pub fn sizes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.size() as f64).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.rows.iter().map(Measurement::time_ms).collect()
    }

    /// Index of the first row whose size does not exceed its predecessor.
    pub fn first_unordered_row(&self) -> Option<usize> {
        self.rows
            .windows(2)
            .position(|pair| pair[1].size() <= pair[0].size())
            .map(|i| i + 1)
    }
}
