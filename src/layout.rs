use serde::Serialize;

// ---------------------------------------------------------------------------
// Component ids
// ---------------------------------------------------------------------------

/// Ids the hosting framework uses to address components. Plain module-scoped
/// constants; the framework is responsible for namespacing per plugin
/// instance.
pub mod ids {
    pub const FILTER: &str = "filter";
    pub const COUNTRY_SELECT: &str = "country-select";
    pub const YEAR_SLIDER: &str = "year-slider";
    pub const POPULATION_GROUP: &str = "Population";
    pub const INDICATORS: &str = "indicators";
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// A settings control descriptor. The hosting framework renders these; the
/// plugin only declares them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Control {
    MultiSelect {
        id: &'static str,
        label: String,
        options: Vec<String>,
        value: Vec<String>,
        /// Visible rows in the select box.
        size: usize,
    },
    RangeSlider {
        id: &'static str,
        label: String,
        min: i32,
        max: i32,
        step: i32,
        /// Tick labels (a sparse subset of the range).
        marks: Vec<i32>,
        value: [i32; 2],
    },
}

// ---------------------------------------------------------------------------
// View layout
// ---------------------------------------------------------------------------

/// The four chart panels of the indicator view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphId {
    Population,
    PopulationGrowth,
    RuralVsUrbanPopulation,
    RuralVsUrbanPopulationGrowth,
}

impl GraphId {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphId::Population => "population",
            GraphId::PopulationGrowth => "population-growth",
            GraphId::RuralVsUrbanPopulation => "rural-vs-urban-population",
            GraphId::RuralVsUrbanPopulationGrowth => "rural-vs-urban-population-growth",
        }
    }
}

/// Graph panels arranged in rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewLayout {
    pub label: String,
    pub rows: Vec<Vec<GraphId>>,
}

// ---------------------------------------------------------------------------
// Plugin layout
// ---------------------------------------------------------------------------

/// What the plugin hands the hosting framework to render: either the
/// dashboard (settings panel + chart view) or a plain error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PluginLayout {
    Error { message: String },
    Dashboard { settings: SettingsLayout, view: ViewLayout },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsLayout {
    pub label: String,
    pub controls: Vec<Control>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_ids_serialize_kebab_case() {
        let json = serde_json::to_value(GraphId::RuralVsUrbanPopulationGrowth).unwrap();
        assert_eq!(json, "rural-vs-urban-population-growth");
        assert_eq!(
            GraphId::RuralVsUrbanPopulationGrowth.as_str(),
            "rural-vs-urban-population-growth"
        );
    }

    #[test]
    fn error_layout_carries_the_message() {
        let layout = PluginLayout::Error {
            message: "File '/x.csv' not found.".to_string(),
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["kind"], "error");
        assert!(json["message"].as_str().unwrap().contains("/x.csv"));
    }
}
