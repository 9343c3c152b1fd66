use std::collections::BTreeSet;

use super::model::{PopulationRow, PopulationTable};

// ---------------------------------------------------------------------------
// Indicator codes
// ---------------------------------------------------------------------------

pub const POP_TOTAL: &str = "SP.POP.TOTL";
pub const POP_FEMALE: &str = "SP.POP.TOTL.FE.IN";
pub const POP_MALE: &str = "SP.POP.TOTL.MA.IN";
pub const POP_FEMALE_PCT: &str = "SP.POP.TOTL.FE.ZS";
pub const POP_MALE_PCT: &str = "SP.POP.TOTL.MA.ZS";
pub const POP_GROWTH: &str = "SP.POP.GROW";
pub const RURAL_TOTAL: &str = "SP.RUR.TOTL";
pub const URBAN_TOTAL: &str = "SP.URB.TOTL";
pub const RURAL_PCT: &str = "SP.RUR.TOTL.ZS";
pub const URBAN_PCT: &str = "SP.URB.TOTL.IN.ZS";
pub const RURAL_GROWTH: &str = "SP.RUR.TOTL.ZG";
pub const URBAN_GROWTH: &str = "SP.URB.GROW";

// ---------------------------------------------------------------------------
// IndicatorSubset – rows filtered to a fixed code set
// ---------------------------------------------------------------------------

/// A read-only slice of the table holding only rows whose indicator code is
/// in one fixed set. Computed once, never mutated.
#[derive(Debug, Clone)]
pub struct IndicatorSubset {
    years: Vec<i32>,
    rows: Vec<PopulationRow>,
}

impl IndicatorSubset {
    fn from_table(table: &PopulationTable, codes: &[&str]) -> Self {
        IndicatorSubset {
            years: table.years.clone(),
            rows: table
                .rows
                .iter()
                .filter(|row| codes.contains(&row.indicator_code.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// The row for one (country, indicator code) pair, if present.
    pub fn row(&self, country: &str, code: &str) -> Option<&PopulationRow> {
        self.rows
            .iter()
            .find(|row| row.country_name == country && row.indicator_code == code)
    }

    /// Year labels for the value columns.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn rows(&self) -> &[PopulationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct indicator codes actually present in this subset.
    pub fn indicator_codes(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .map(|row| row.indicator_code.as_str())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// IndicatorSubsets – the six fixed partitions
// ---------------------------------------------------------------------------

/// The six fixed subsets the indicator view slices from. The two relative
/// subsets back the percent-of-total display variant; the other four feed
/// the charts directly.
#[derive(Debug, Clone)]
pub struct IndicatorSubsets {
    pub population_absolute: IndicatorSubset,
    pub population_relative: IndicatorSubset,
    pub population_growth: IndicatorSubset,
    pub rural_urban_absolute: IndicatorSubset,
    pub rural_urban_relative: IndicatorSubset,
    pub rural_urban_growth: IndicatorSubset,
}

impl IndicatorSubsets {
    /// Partition the table by exact indicator-code membership.
    pub fn partition(table: &PopulationTable) -> Self {
        IndicatorSubsets {
            population_absolute: IndicatorSubset::from_table(
                table,
                &[POP_TOTAL, POP_FEMALE, POP_MALE],
            ),
            population_relative: IndicatorSubset::from_table(
                table,
                &[POP_FEMALE_PCT, POP_MALE_PCT],
            ),
            population_growth: IndicatorSubset::from_table(table, &[POP_GROWTH]),
            rural_urban_absolute: IndicatorSubset::from_table(
                table,
                &[RURAL_TOTAL, URBAN_TOTAL],
            ),
            rural_urban_relative: IndicatorSubset::from_table(table, &[RURAL_PCT, URBAN_PCT]),
            rural_urban_growth: IndicatorSubset::from_table(
                table,
                &[RURAL_GROWTH, URBAN_GROWTH],
            ),
        }
    }
}
