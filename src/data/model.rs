// ---------------------------------------------------------------------------
// PopulationRow – one row of the source CSV
// ---------------------------------------------------------------------------

/// One indicator series for one country (a single CSV row).
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRow {
    pub country_name: String,
    pub country_code: String,
    pub indicator_name: String,
    pub indicator_code: String,
    /// One entry per year column; `None` for empty cells.
    pub values: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// PopulationTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed wide-format table.
///
/// Columns are `Country Name`, `Country Code`, `Indicator Name`,
/// `Indicator Code`, then one column per year. Year columns are contiguous
/// and ascending (enforced by the loader); `years[i]` labels `values[i]` of
/// every row.
#[derive(Debug, Clone)]
pub struct PopulationTable {
    pub years: Vec<i32>,
    pub rows: Vec<PopulationRow>,
}

impl PopulationTable {
    /// Distinct `Country Name` values in first-appearance order.
    pub fn countries(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if !seen.iter().any(|c| c == &row.country_name) {
                seen.push(row.country_name.clone());
            }
        }
        seen
    }

    /// First and last year column, if the table has any year columns.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        match (self.years.first(), self.years.last()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, code: &str, values: &[Option<f64>]) -> PopulationRow {
        PopulationRow {
            country_name: country.to_string(),
            country_code: country[..2.min(country.len())].to_uppercase(),
            indicator_name: code.to_string(),
            indicator_code: code.to_string(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn countries_are_distinct_in_first_appearance_order() {
        let table = PopulationTable {
            years: vec![2000, 2001],
            rows: vec![
                row("Norway", "SP.POP.TOTL", &[Some(1.0), Some(2.0)]),
                row("Chile", "SP.POP.TOTL", &[Some(3.0), Some(4.0)]),
                row("Norway", "SP.POP.GROW", &[Some(0.5), Some(0.6)]),
            ],
        };
        assert_eq!(table.countries(), vec!["Norway", "Chile"]);
    }

    #[test]
    fn year_range_spans_the_columns() {
        let table = PopulationTable {
            years: (1960..=2020).collect(),
            rows: Vec::new(),
        };
        assert_eq!(table.year_range(), Some((1960, 2020)));

        let empty = PopulationTable {
            years: Vec::new(),
            rows: Vec::new(),
        };
        assert_eq!(empty.year_range(), None);
    }
}
