/// Data layer: record types and CSV loading.
///
/// Architecture:
/// ```text
///  complexity_results.csv / earthquake_results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header check + serde rows → Dataset<R>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  Dataset<R>   │  Vec<R> in file order, never mutated
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
