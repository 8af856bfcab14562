use log::debug;

use crate::config::ReportConfig;
use crate::data::loader::load_csv;
use crate::data::model::{Dataset, EarthquakeRecord, HospitalRecord};
use crate::error::Result;
use crate::geo::location_errors_km;

// ---------------------------------------------------------------------------
// Report state
// ---------------------------------------------------------------------------

/// Everything the renderer and the summary read, built once and never mutated.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub hospital: Dataset<HospitalRecord>,
    pub earthquake: Dataset<EarthquakeRecord>,
    /// Location error in km, one per earthquake row, same order.
    pub location_errors: Vec<f64>,
}

impl ReportData {
    /// Load both tables, then derive the location errors.
    pub fn load(config: &ReportConfig) -> Result<Self> {
        let hospital = load_csv::<HospitalRecord>(&config.hospital_input())?;
        let earthquake = load_csv::<EarthquakeRecord>(&config.earthquake_input())?;
        Ok(Self::from_datasets(hospital, earthquake))
    }

    pub fn from_datasets(
        hospital: Dataset<HospitalRecord>,
        earthquake: Dataset<EarthquakeRecord>,
    ) -> Self {
        let location_errors = location_errors_km(earthquake.rows());
        debug!("Location errors (km): {location_errors:?}");

        Self {
            hospital,
            earthquake,
            location_errors,
        }
    }
}
