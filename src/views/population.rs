use std::sync::Arc;

use crate::chart::{ChartSpec, LineDash, LineStyle, Series, TraceType};
use crate::color::{css_color, series_color};
use crate::data::indicators::{
    self, IndicatorSubset, IndicatorSubsets,
};
use crate::data::model::PopulationTable;
use crate::framework::{CallbackContext, View};
use crate::layout::{GraphId, ViewLayout};
use crate::state::{FilterSelection, SELECTED_COUNTRIES, SELECTED_YEARS};

// ---------------------------------------------------------------------------
// Sub-indicators per chart
// ---------------------------------------------------------------------------

/// One indicator code within a chart: its series-name suffix and dash
/// pattern. Countries keep their palette color across sub-indicators; the
/// dash tells them apart.
struct SubIndicator {
    code: &'static str,
    suffix: Option<&'static str>,
    dash: LineDash,
}

const POPULATION: [SubIndicator; 3] = [
    SubIndicator { code: indicators::POP_TOTAL, suffix: Some("total"), dash: LineDash::Solid },
    SubIndicator { code: indicators::POP_FEMALE, suffix: Some("female"), dash: LineDash::Dash },
    SubIndicator { code: indicators::POP_MALE, suffix: Some("male"), dash: LineDash::Dot },
];

const POPULATION_GROWTH: [SubIndicator; 1] = [SubIndicator {
    code: indicators::POP_GROWTH,
    suffix: None,
    dash: LineDash::Solid,
}];

const RURAL_VS_URBAN: [SubIndicator; 2] = [
    SubIndicator { code: indicators::RURAL_TOTAL, suffix: Some("rural"), dash: LineDash::Solid },
    SubIndicator { code: indicators::URBAN_TOTAL, suffix: Some("urban"), dash: LineDash::Dash },
];

const RURAL_VS_URBAN_GROWTH: [SubIndicator; 2] = [
    SubIndicator { code: indicators::RURAL_GROWTH, suffix: Some("rural"), dash: LineDash::Solid },
    SubIndicator { code: indicators::URBAN_GROWTH, suffix: Some("urban"), dash: LineDash::Dash },
];

// ---------------------------------------------------------------------------
// PopulationIndicators view
// ---------------------------------------------------------------------------

/// The four-panel indicator view. Partitions the table into the six fixed
/// subsets once at construction; every filter change rebuilds all four
/// charts from the current selection.
pub struct PopulationIndicators {
    subsets: Arc<IndicatorSubsets>,
}

impl PopulationIndicators {
    pub fn new(table: &PopulationTable) -> Self {
        PopulationIndicators {
            subsets: Arc::new(IndicatorSubsets::partition(table)),
        }
    }

    pub fn subsets(&self) -> &IndicatorSubsets {
        &self.subsets
    }

    pub fn population_chart(&self, selection: &FilterSelection) -> ChartSpec {
        build_chart(
            &self.subsets.population_absolute,
            "Population",
            &POPULATION,
            selection,
        )
    }

    pub fn population_growth_chart(&self, selection: &FilterSelection) -> ChartSpec {
        build_chart(
            &self.subsets.population_growth,
            "Population growth",
            &POPULATION_GROWTH,
            selection,
        )
    }

    pub fn rural_vs_urban_chart(&self, selection: &FilterSelection) -> ChartSpec {
        build_chart(
            &self.subsets.rural_urban_absolute,
            "Rural vs. urban population",
            &RURAL_VS_URBAN,
            selection,
        )
    }

    pub fn rural_vs_urban_growth_chart(&self, selection: &FilterSelection) -> ChartSpec {
        build_chart(
            &self.subsets.rural_urban_growth,
            "Rural vs. urban population growth",
            &RURAL_VS_URBAN_GROWTH,
            selection,
        )
    }

    /// All four charts, keyed by panel.
    pub fn charts(&self, selection: &FilterSelection) -> Vec<(GraphId, ChartSpec)> {
        charts_for(&self.subsets, selection)
    }
}

fn charts_for(
    subsets: &IndicatorSubsets,
    selection: &FilterSelection,
) -> Vec<(GraphId, ChartSpec)> {
    log::debug!(
        "rebuilding indicator charts for {} countries, years {:?}",
        selection.countries.len(),
        selection.years
    );
    vec![
        (
            GraphId::Population,
            build_chart(&subsets.population_absolute, "Population", &POPULATION, selection),
        ),
        (
            GraphId::PopulationGrowth,
            build_chart(
                &subsets.population_growth,
                "Population growth",
                &POPULATION_GROWTH,
                selection,
            ),
        ),
        (
            GraphId::RuralVsUrbanPopulation,
            build_chart(
                &subsets.rural_urban_absolute,
                "Rural vs. urban population",
                &RURAL_VS_URBAN,
                selection,
            ),
        ),
        (
            GraphId::RuralVsUrbanPopulationGrowth,
            build_chart(
                &subsets.rural_urban_growth,
                "Rural vs. urban population growth",
                &RURAL_VS_URBAN_GROWTH,
                selection,
            ),
        ),
    ]
}

impl View for PopulationIndicators {
    fn label(&self) -> &str {
        "Population indicators"
    }

    fn layout(&self) -> ViewLayout {
        ViewLayout {
            label: self.label().to_string(),
            rows: vec![
                vec![GraphId::Population, GraphId::PopulationGrowth],
                vec![
                    GraphId::RuralVsUrbanPopulation,
                    GraphId::RuralVsUrbanPopulationGrowth,
                ],
            ],
        }
    }

    fn register_callbacks(&self, ctx: &mut CallbackContext) {
        let subsets = Arc::clone(&self.subsets);
        ctx.on_store_change(vec![SELECTED_COUNTRIES, SELECTED_YEARS], move |store| {
            match store.selection() {
                Some(selection) => charts_for(&subsets, &selection),
                None => Vec::new(),
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Chart construction
// ---------------------------------------------------------------------------

/// Build one chart: series are emitted indicator-major (all countries for
/// the first sub-indicator, then the next), each country colored by its
/// position in the selection. The x-axis range is clamped to the selected
/// years; the series data itself is not filtered by year.
fn build_chart(
    subset: &IndicatorSubset,
    title: &str,
    sub_indicators: &[SubIndicator],
    selection: &FilterSelection,
) -> ChartSpec {
    let mut data = Vec::with_capacity(sub_indicators.len() * selection.countries.len());
    for sub in sub_indicators {
        for (index, country) in selection.countries.iter().enumerate() {
            data.push(country_series(subset, country, index, sub));
        }
    }
    ChartSpec::new(title, selection.years, data)
}

/// One series: the subset row matching (country, code) with empty year
/// cells dropped. A country without a matching row yields an empty series.
fn country_series(
    subset: &IndicatorSubset,
    country: &str,
    index: usize,
    sub: &SubIndicator,
) -> Series {
    let (x, y): (Vec<i32>, Vec<f64>) = match subset.row(country, sub.code) {
        Some(row) => subset
            .years()
            .iter()
            .zip(&row.values)
            .filter_map(|(&year, value)| value.map(|v| (year, v)))
            .unzip(),
        None => (Vec::new(), Vec::new()),
    };

    let name = match sub.suffix {
        Some(suffix) => format!("{country}, {suffix}"),
        None => country.to_string(),
    };

    Series {
        x,
        y,
        trace_type: TraceType::Line,
        name,
        line: LineStyle {
            color: css_color(series_color(index)),
            dash: sub.dash,
        },
    }
}
