use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{PopulationRow, PopulationTable};
use crate::error::LoadError;

/// The four fixed leading columns, in order, before the year columns.
const LEADING_COLUMNS: [&str; 4] = [
    "Country Name",
    "Country Code",
    "Indicator Name",
    "Indicator Code",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the population indicator CSV at `path`.
///
/// A missing file and a permission failure are classified as the two
/// user-facing [`LoadError`] kinds; any other problem (bad header, non-year
/// column, unparsable cell) comes back as [`LoadError::Malformed`]. One-shot,
/// no retries.
pub fn load_population_csv(path: &Path) -> Result<PopulationTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::from_open_error(e, path))?;
    let table = parse_population_csv(file)
        .with_context(|| format!("parsing population CSV '{}'", path.display()))?;
    log::info!(
        "Loaded {} indicator rows over {} year columns from '{}'",
        table.len(),
        table.years.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn parse_population_csv(file: File) -> Result<PopulationTable> {
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    for (idx, expected) in LEADING_COLUMNS.iter().enumerate() {
        match headers.get(idx) {
            Some(actual) if actual == expected => {}
            Some(actual) => bail!("column {idx} is '{actual}', expected '{expected}'"),
            None => bail!("header has {} columns, expected at least 4", headers.len()),
        }
    }

    let years = parse_year_columns(&headers[LEADING_COLUMNS.len()..])?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != headers.len() {
            bail!(
                "CSV row {row_no} has {} fields, expected {}",
                record.len(),
                headers.len()
            );
        }

        let mut values = Vec::with_capacity(years.len());
        for (col, field) in record.iter().skip(LEADING_COLUMNS.len()).enumerate() {
            let field = field.trim();
            if field.is_empty() {
                values.push(None);
            } else {
                let value: f64 = field.parse().with_context(|| {
                    format!("row {row_no}, year {}: '{field}' is not a number", years[col])
                })?;
                values.push(Some(value));
            }
        }

        rows.push(PopulationRow {
            country_name: record[0].trim().to_string(),
            country_code: record[1].trim().to_string(),
            indicator_name: record[2].trim().to_string(),
            indicator_code: record[3].trim().to_string(),
            values,
        });
    }

    Ok(PopulationTable { years, rows })
}

/// Year columns must be contiguous and ascending (e.g. 1960, 1961, …, 2020).
fn parse_year_columns(labels: &[String]) -> Result<Vec<i32>> {
    let mut years = Vec::with_capacity(labels.len());
    for label in labels {
        let year: i32 = label
            .parse()
            .with_context(|| format!("year column '{label}' is not a year"))?;
        if let Some(&prev) = years.last() {
            if year != prev + 1 {
                bail!("year columns jump from {prev} to {year}, expected contiguous years");
            }
        }
        years.push(year);
    }
    Ok(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("population-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const HEADER: &str = "Country Name,Country Code,Indicator Name,Indicator Code,2000,2001,2002";

    #[test]
    fn loads_rows_and_years() {
        let csv = format!(
            "{HEADER}\nNorway,NOR,\"Population, total\",SP.POP.TOTL,4490967,4503436,4538159\n"
        );
        let path = write_temp_csv("ok.csv", &csv);
        let table = load_population_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.years, vec![2000, 2001, 2002]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].country_name, "Norway");
        assert_eq!(table.rows[0].indicator_code, "SP.POP.TOTL");
        assert_eq!(table.rows[0].values[1], Some(4503436.0));
    }

    #[test]
    fn empty_cells_become_none() {
        let csv = format!("{HEADER}\nNorway,NOR,Population,SP.POP.TOTL,,4503436,\n");
        let path = write_temp_csv("gaps.csv", &csv);
        let table = load_population_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            table.rows[0].values,
            vec![None, Some(4503436.0), None]
        );
    }

    #[test]
    fn missing_file_is_the_not_found_error() {
        let path = std::env::temp_dir().join("population-does-not-exist.csv");
        let err = load_population_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn bad_header_is_malformed_not_user_facing() {
        let csv = "Name,Code,Indicator,IndCode,2000\nNorway,NOR,Pop,SP.POP.TOTL,1\n";
        let path = write_temp_csv("badheader.csv", csv);
        let err = load_population_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, LoadError::Malformed(_)));
        assert!(err.user_message().is_none());
    }

    #[test]
    fn year_gap_is_rejected() {
        let csv = "Country Name,Country Code,Indicator Name,Indicator Code,2000,2003\n";
        let path = write_temp_csv("yeargap.csv", csv);
        let err = load_population_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let csv = format!("{HEADER}\nNorway,NOR,Pop,SP.POP.TOTL,1,two,3\n");
        let path = write_temp_csv("badcell.csv", &csv);
        let err = load_population_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, LoadError::Malformed(_)));
    }
}
