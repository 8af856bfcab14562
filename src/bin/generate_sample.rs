//! Writes synthetic `complexity_results.csv` and `earthquake_results.csv`
//! into the working directory so the report can be run without the
//! benchmark programs.

use serde::Serialize;

/// Must match the report's reference point.
const TRUE_EPICENTER: (f64, f64) = (35.0, -120.0);

/// Offset of the estimates from the true epicenter, about 227 km away.
const ESTIMATE_CENTER: (f64, f64) = (36.5, -118.3);

#[derive(Serialize)]
struct HospitalRow {
    #[serde(rename = "Patients")]
    patients: u64,
    #[serde(rename = "Time_ms")]
    time_ms: f64,
    #[serde(rename = "Avg_Wait_Time")]
    avg_wait_time: f64,
}

#[derive(Serialize)]
struct EarthquakeRow {
    #[serde(rename = "Stations")]
    stations: u64,
    #[serde(rename = "Time_ms")]
    time_ms: f64,
    #[serde(rename = "Error")]
    error: f64,
    #[serde(rename = "Location_X")]
    location_x: f64,
    #[serde(rename = "Location_Y")]
    location_y: f64,
}

/// Hospital triage: 1-2-5 steps from 100 to 10000 patients.
const PATIENTS: [u64; 7] = [100, 200, 500, 1000, 2000, 5000, 10000];

/// Earthquake locator: 1-2-5 steps from 10 to 1000 stations.
const STATIONS: [u64; 7] = [10, 20, 50, 100, 200, 500, 1000];

fn nlogn(n: u64) -> f64 {
    let n = n as f64;
    n * n.log2()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut hospital = csv::Writer::from_path("complexity_results.csv")?;
    for &n in &PATIENTS {
        hospital.serialize(HospitalRow {
            patients: n,
            time_ms: nlogn(n) * 0.05 * rng.gauss(1.0, 0.04),
            avg_wait_time: 2.0 + (n as f64).sqrt() * 0.4 + rng.gauss(0.0, 0.3),
        })?;
    }
    hospital.flush()?;

    let mut earthquake = csv::Writer::from_path("earthquake_results.csv")?;
    for &n in &STATIONS {
        // More stations, tighter estimate.
        let spread = 0.05 / (n as f64).sqrt();
        let lat = ESTIMATE_CENTER.0 + rng.gauss(0.0, spread);
        let lon = ESTIMATE_CENTER.1 + rng.gauss(0.0, spread);
        earthquake.serialize(EarthquakeRow {
            stations: n,
            time_ms: nlogn(n) * 0.0002 * rng.gauss(1.0, 0.04),
            error: ((lat - TRUE_EPICENTER.0).powi(2) + (lon - TRUE_EPICENTER.1).powi(2)).sqrt(),
            location_x: lat,
            location_y: lon,
        })?;
    }
    earthquake.flush()?;

    println!(
        "Wrote {} hospital rows to complexity_results.csv and {} earthquake rows to earthquake_results.csv",
        PATIENTS.len(),
        STATIONS.len()
    );
    Ok(())
}
