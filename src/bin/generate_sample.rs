//! Writes a synthetic wide-format population CSV for demos and manual
//! testing of the plugin. Deterministic: same output on every run.

use population_analysis::data::indicators;

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

struct Country {
    name: &'static str,
    code: &'static str,
    /// Population in the first year.
    base_population: f64,
    /// Mean annual growth, fraction.
    growth: f64,
    /// Rural share in the first year, declining over time.
    rural_share: f64,
    /// Years (from the start) with no recorded data, to exercise the
    /// empty-cell handling downstream.
    missing_leading_years: usize,
}

const COUNTRIES: [Country; 4] = [
    Country { name: "Norway", code: "NOR", base_population: 3.58e6, growth: 0.007, rural_share: 0.68, missing_leading_years: 0 },
    Country { name: "Chile", code: "CHL", base_population: 8.13e6, growth: 0.015, rural_share: 0.32, missing_leading_years: 0 },
    Country { name: "Kenya", code: "KEN", base_population: 8.12e6, growth: 0.030, rural_share: 0.93, missing_leading_years: 10 },
    Country { name: "Japan", code: "JPN", base_population: 9.28e7, growth: 0.006, rural_share: 0.37, missing_leading_years: 0 },
];

const FIRST_YEAR: i32 = 1960;
const LAST_YEAR: i32 = 2020;

struct Indicator {
    name: &'static str,
    code: &'static str,
}

const INDICATORS: [Indicator; 12] = [
    Indicator { name: "Population, total", code: indicators::POP_TOTAL },
    Indicator { name: "Population, female", code: indicators::POP_FEMALE },
    Indicator { name: "Population, male", code: indicators::POP_MALE },
    Indicator { name: "Population, female (% of total population)", code: indicators::POP_FEMALE_PCT },
    Indicator { name: "Population, male (% of total population)", code: indicators::POP_MALE_PCT },
    Indicator { name: "Population growth (annual %)", code: indicators::POP_GROWTH },
    Indicator { name: "Rural population", code: indicators::RURAL_TOTAL },
    Indicator { name: "Urban population", code: indicators::URBAN_TOTAL },
    Indicator { name: "Rural population (% of total population)", code: indicators::RURAL_PCT },
    Indicator { name: "Urban population (% of total population)", code: indicators::URBAN_PCT },
    Indicator { name: "Rural population growth (annual %)", code: indicators::RURAL_GROWTH },
    Indicator { name: "Urban population growth (annual %)", code: indicators::URBAN_GROWTH },
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let years: Vec<i32> = (FIRST_YEAR..=LAST_YEAR).collect();

    let output_path = "population_data.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut header = vec![
        "Country Name".to_string(),
        "Country Code".to_string(),
        "Indicator Name".to_string(),
        "Indicator Code".to_string(),
    ];
    header.extend(years.iter().map(|y| y.to_string()));
    writer.write_record(&header)?;

    let mut row_count = 0usize;
    for country in &COUNTRIES {
        let totals = population_series(country, years.len(), &mut rng);

        for indicator in &INDICATORS {
            let mut record = vec![
                country.name.to_string(),
                country.code.to_string(),
                indicator.name.to_string(),
                indicator.code.to_string(),
            ];
            for (t, &total) in totals.iter().enumerate() {
                if t < country.missing_leading_years {
                    record.push(String::new());
                    continue;
                }
                let value = indicator_value(indicator.code, t, total, &totals, country, &mut rng);
                record.push(format!("{value:.4}"));
            }
            writer.write_record(&record)?;
            row_count += 1;
        }
    }
    writer.flush()?;

    log::info!(
        "Wrote {row_count} indicator rows for {} countries over {} years to {output_path}",
        COUNTRIES.len(),
        years.len()
    );
    Ok(())
}

/// Compounded growth with mild year-to-year noise.
fn population_series(country: &Country, n_years: usize, rng: &mut SimpleRng) -> Vec<f64> {
    let mut totals = Vec::with_capacity(n_years);
    let mut population = country.base_population;
    for _ in 0..n_years {
        totals.push(population);
        let rate = rng.gauss(country.growth, country.growth * 0.15);
        population *= 1.0 + rate;
    }
    totals
}

fn indicator_value(
    code: &str,
    t: usize,
    total: f64,
    totals: &[f64],
    country: &Country,
    rng: &mut SimpleRng,
) -> f64 {
    let female_share = 0.497 + rng.gauss(0.0, 0.001);
    // Rural share declines slowly as the country urbanizes.
    let rural_share = (country.rural_share - 0.004 * t as f64).clamp(0.02, 0.98);
    let growth_pct = if t == 0 {
        country.growth * 100.0
    } else {
        (totals[t] / totals[t - 1] - 1.0) * 100.0
    };

    match code {
        indicators::POP_TOTAL => total,
        indicators::POP_FEMALE => total * female_share,
        indicators::POP_MALE => total * (1.0 - female_share),
        indicators::POP_FEMALE_PCT => female_share * 100.0,
        indicators::POP_MALE_PCT => (1.0 - female_share) * 100.0,
        indicators::POP_GROWTH => growth_pct,
        indicators::RURAL_TOTAL => total * rural_share,
        indicators::URBAN_TOTAL => total * (1.0 - rural_share),
        indicators::RURAL_PCT => rural_share * 100.0,
        indicators::URBAN_PCT => (1.0 - rural_share) * 100.0,
        indicators::RURAL_GROWTH => growth_pct - 0.4,
        indicators::URBAN_GROWTH => growth_pct + 0.4,
        _ => unreachable!("unknown indicator code {code}"),
    }
}
