//! Console summary: per-dataset ranges and the growth-factor check.
//!
//! The growth factor of two consecutive rows is
//! `(time[i] / time[i-1]) / (n[i] / n[i-1])`. Averaged over a run that doubles
//! the input size, a value near ln 2 ≈ 0.693 is what an O(n log n) cost looks
//! like in these benchmarks; linear cost gives 1.0.

use std::fmt::Write;

use crate::data::model::{Dataset, Measurement};
use crate::error::{ReportError, Result};
use crate::state::ReportData;

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// Smallest and largest value of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange<T> {
    pub min: T,
    pub max: T,
}

impl ColumnRange<u64> {
    pub fn of_sizes<R: Measurement>(rows: &[R]) -> Option<Self> {
        let min = rows.iter().map(Measurement::size).min()?;
        let max = rows.iter().map(Measurement::size).max()?;
        Some(ColumnRange { min, max })
    }
}

impl ColumnRange<f64> {
    /// NaN values are skipped.
    pub fn of_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some(ColumnRange { min: v, max: v }),
                Some(r) => Some(ColumnRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

// ---------------------------------------------------------------------------
// Growth factors
// ---------------------------------------------------------------------------

/// Ratios between one row and its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStep {
    pub n_ratio: f64,
    pub t_ratio: f64,
}

impl GrowthStep {
    pub fn factor(&self) -> f64 {
        self.t_ratio / self.n_ratio
    }
}

/// One [`GrowthStep`] per consecutive pair of rows.
///
/// Fails with [`ReportError::Division`] when there is no pair to compare.
pub fn growth_steps<R: Measurement>(rows: &[R]) -> Result<Vec<GrowthStep>> {
    if rows.len() < 2 {
        return Err(ReportError::Division {
            dataset: R::DATASET.to_string(),
            rows: rows.len(),
        });
    }

    Ok(rows
        .windows(2)
        .map(|pair| GrowthStep {
            n_ratio: pair[1].size() as f64 / pair[0].size() as f64,
            t_ratio: pair[1].time_ms() / pair[0].time_ms(),
        })
        .collect())
}

/// Arithmetic mean of the growth factors.
pub fn average_growth_factor<R: Measurement>(rows: &[R]) -> Result<f64> {
    let factors: Vec<f64> = growth_steps(rows)?.iter().map(GrowthStep::factor).collect();
    // `growth_steps` guarantees at least one factor.
    Ok(factors.iter().sum::<f64>() / factors.len() as f64)
}

// ---------------------------------------------------------------------------
// Report text
// ---------------------------------------------------------------------------

fn write_dataset_header<R: Measurement>(
    out: &mut String,
    title: &str,
    unit: &str,
    dataset: &Dataset<R>,
) -> std::fmt::Result {
    writeln!(out, "\n{title}:")?;
    if let Some(sizes) = ColumnRange::of_sizes(dataset.rows()) {
        writeln!(out, "- Input sizes tested: {} to {} {unit}", sizes.min, sizes.max)?;
    }
    if let Some(times) = ColumnRange::of_values(dataset.times()) {
        writeln!(
            out,
            "- Execution time range: {:.3} to {:.3} ms",
            times.min, times.max
        )?;
    }
    Ok(())
}

fn write_ranges(out: &mut String, data: &ReportData) -> std::fmt::Result {
    writeln!(out, "=== PERFORMANCE SUMMARY ===")?;

    write_dataset_header(out, "Hospital Triage (Greedy Algorithm)", "patients", &data.hospital)?;
    writeln!(out, "- Complexity verification: Time grows as O(n log n + nm)")?;

    write_dataset_header(
        out,
        "Earthquake Locator (Divide & Conquer)",
        "stations",
        &data.earthquake,
    )?;
    if let Some(avg) = mean(&data.location_errors) {
        writeln!(out, "- Average location error: {avg:.3} km")?;
    }
    writeln!(out, "- Complexity verification: Time grows as O(n log n)")
}

/// Write the full console report into `out`.
///
/// The ranges and every growth factor that can be computed are written
/// first. A dataset with fewer than two rows has no growth factor; its line
/// is left out and the first such [`ReportError::Division`] is returned
/// once the rest of the report is in `out`.
pub fn write_summary(out: &mut String, data: &ReportData) -> Result<()> {
    let hospital = average_growth_factor(data.hospital.rows());
    let earthquake = average_growth_factor(data.earthquake.rows());

    // Writing into a String cannot fail.
    let _ = write_ranges(out, data);
    let _ = writeln!(out, "\n=== COMPLEXITY ANALYSIS ===\n");
    if let Ok(factor) = &hospital {
        let _ = writeln!(out, "Hospital Triage - Average growth factor: {factor:.3}");
    }
    if let Ok(factor) = &earthquake {
        let _ = writeln!(out, "Earthquake Locator - Average growth factor: {factor:.3}");
    }
    if hospital.is_ok() || earthquake.is_ok() {
        let _ = writeln!(
            out,
            "\nNote: Growth factors close to log(2) ≈ 0.693 confirm O(n log n) complexity"
        );
    }

    hospital?;
    earthquake?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EarthquakeRecord, HospitalRecord};

    fn hospital(rows: &[(u64, f64)]) -> Dataset<HospitalRecord> {
        Dataset::new(
            "complexity_results.csv",
            rows.iter()
                .map(|&(patients, time_ms)| HospitalRecord {
                    patients,
                    time_ms,
                    avg_wait_time: 5.0,
                })
                .collect(),
        )
    }

    fn earthquake(rows: &[(u64, f64, f64, f64)]) -> Dataset<EarthquakeRecord> {
        Dataset::new(
            "earthquake_results.csv",
            rows.iter()
                .map(|&(stations, time_ms, location_x, location_y)| EarthquakeRecord {
                    stations,
                    time_ms,
                    location_x,
                    location_y,
                })
                .collect(),
        )
    }

    #[test]
    fn linear_growth_gives_factor_one() {
        let ds = hospital(&[(10, 1.0), (20, 2.0)]);
        let steps = growth_steps(ds.rows()).unwrap();
        assert_eq!(
            steps,
            vec![GrowthStep {
                n_ratio: 2.0,
                t_ratio: 2.0
            }]
        );
        assert_eq!(steps[0].factor(), 1.0);
        assert_eq!(average_growth_factor(ds.rows()).unwrap(), 1.0);
    }

    #[test]
    fn factors_are_averaged() {
        // factors: (3/2)/2 = 0.75 and (6/3)/2 = 1.0
        let ds = hospital(&[(10, 2.0), (20, 3.0), (40, 6.0)]);
        let avg = average_growth_factor(ds.rows()).unwrap();
        assert!((avg - 0.875).abs() < 1e-12);
    }

    #[test]
    fn single_row_is_a_division_error() {
        let ds = hospital(&[(10, 1.0)]);
        match growth_steps(ds.rows()) {
            Err(ReportError::Division { dataset, rows }) => {
                assert_eq!(dataset, "Hospital Triage");
                assert_eq!(rows, 1);
            }
            other => panic!("expected division error, got {other:?}"),
        }
    }

    #[test]
    fn zero_time_propagates_as_infinity() {
        let ds = hospital(&[(10, 0.0), (20, 1.0)]);
        assert!(average_growth_factor(ds.rows()).unwrap().is_infinite());
    }

    #[test]
    fn single_row_range_is_that_row() {
        let ds = hospital(&[(42, 1.234)]);
        assert_eq!(
            ColumnRange::of_sizes(ds.rows()),
            Some(ColumnRange { min: 42, max: 42 })
        );
        assert_eq!(
            ColumnRange::of_values(ds.times()),
            Some(ColumnRange {
                min: 1.234,
                max: 1.234
            })
        );
    }

    #[test]
    fn range_skips_nan() {
        let range = ColumnRange::of_values([3.0, f64::NAN, 1.0]).unwrap();
        assert_eq!(range, ColumnRange { min: 1.0, max: 3.0 });
        assert_eq!(ColumnRange::of_values(Vec::<f64>::new()), None);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn report_layout() {
        let data = ReportData::from_datasets(
            hospital(&[(100, 1.0), (200, 2.5)]),
            earthquake(&[(10, 0.5, 36.0, -120.0), (20, 0.9, 35.0, -120.0)]),
        );

        let mut text = String::new();
        write_summary(&mut text, &data).unwrap();
        let expected = "=== PERFORMANCE SUMMARY ===\n\
             \n\
             Hospital Triage (Greedy Algorithm):\n\
             - Input sizes tested: 100 to 200 patients\n\
             - Execution time range: 1.000 to 2.500 ms\n\
             - Complexity verification: Time grows as O(n log n + nm)\n\
             \n\
             Earthquake Locator (Divide & Conquer):\n\
             - Input sizes tested: 10 to 20 stations\n\
             - Execution time range: 0.500 to 0.900 ms\n\
             - Average location error: 55.500 km\n\
             - Complexity verification: Time grows as O(n log n)\n\
             \n\
             === COMPLEXITY ANALYSIS ===\n\
             \n\
             Hospital Triage - Average growth factor: 1.250\n\
             Earthquake Locator - Average growth factor: 0.900\n\
             \n\
             Note: Growth factors close to log(2) ≈ 0.693 confirm O(n log n) complexity\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn report_fails_for_single_row_earthquake_data() {
        let data = ReportData::from_datasets(
            hospital(&[(100, 1.0), (200, 2.5)]),
            earthquake(&[(10, 0.5, 36.0, -120.0)]),
        );
        assert!(matches!(
            write_summary(&mut String::new(), &data),
            Err(ReportError::Division { rows: 1, .. })
        ));
    }

    #[test]
    fn single_row_dataset_still_writes_the_rest_of_the_report() {
        let data = ReportData::from_datasets(
            hospital(&[(100, 1.0), (200, 2.5)]),
            earthquake(&[(10, 0.5, 36.0, -120.0)]),
        );

        let mut text = String::new();
        let result = write_summary(&mut text, &data);

        assert!(matches!(result, Err(ReportError::Division { rows: 1, .. })));
        assert!(text.starts_with("=== PERFORMANCE SUMMARY ==="));
        assert!(text.contains("- Input sizes tested: 10 to 10 stations"));
        assert!(text.contains("- Average location error: 111.000 km"));
        assert!(text.contains("Hospital Triage - Average growth factor: 1.250"));
        assert!(!text.contains("Earthquake Locator - Average growth factor"));
        assert!(text.contains("Note: Growth factors close to log(2)"));
    }

    #[test]
    fn no_note_when_no_growth_factor_exists() {
        let data = ReportData::from_datasets(
            hospital(&[(100, 1.0)]),
            earthquake(&[(10, 0.5, 36.0, -120.0)]),
        );

        let mut text = String::new();
        match write_summary(&mut text, &data) {
            Err(ReportError::Division { dataset, .. }) => assert_eq!(dataset, "Hospital Triage"),
            other => panic!("expected division error, got {other:?}"),
        }
        assert!(text.contains("=== COMPLEXITY ANALYSIS ==="));
        assert!(!text.contains("Note:"));
    }
}
