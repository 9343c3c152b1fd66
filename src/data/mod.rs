/// Data layer: core types, loading, and indicator partitioning.
///
/// Architecture:
/// ```text
///  population.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PopulationTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ PopulationTable  │  Vec<PopulationRow>, year columns
///   └─────────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ indicators  │  six fixed code-set partitions → IndicatorSubsets
///   └────────────┘
/// ```

pub mod indicators;
pub mod loader;
pub mod model;
