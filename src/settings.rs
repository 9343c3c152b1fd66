use crate::data::model::PopulationTable;
use crate::framework::{CallbackContext, SettingsGroup};
use crate::layout::{ids, Control};
use crate::state::{FilterSelection, SELECTED_COUNTRIES, SELECTED_YEARS};

// ---------------------------------------------------------------------------
// Filter settings group
// ---------------------------------------------------------------------------

/// The shared filter panel: a country multi-select and a year range slider.
/// Control changes are written to the session store verbatim; the indicator
/// view picks them up from there. No debouncing, no validation beyond what
/// the controls themselves enforce.
#[derive(Debug, Clone)]
pub struct Filter {
    countries: Vec<String>,
    years: Vec<i32>,
}

/// Year-slider tick spacing.
const MARK_STEP: usize = 25;

/// Visible rows in the country select box.
const MAX_SELECT_SIZE: usize = 15;

impl Filter {
    pub fn new(table: &PopulationTable) -> Self {
        Filter {
            countries: table.countries(),
            years: table.years.clone(),
        }
    }

    /// The selection published at registration time: first country, full
    /// year range.
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection {
            countries: self.countries.first().cloned().into_iter().collect(),
            years: self.full_year_range(),
        }
    }

    fn full_year_range(&self) -> [i32; 2] {
        match (self.years.first(), self.years.last()) {
            (Some(&min), Some(&max)) => [min, max],
            _ => [0, 0],
        }
    }
}

impl SettingsGroup for Filter {
    fn label(&self) -> &str {
        "Filter"
    }

    fn layout(&self) -> Vec<Control> {
        let default = self.default_selection();
        vec![
            Control::MultiSelect {
                id: ids::COUNTRY_SELECT,
                label: "Countries".to_string(),
                options: self.countries.clone(),
                value: default.countries,
                size: MAX_SELECT_SIZE.min(self.countries.len()),
            },
            Control::RangeSlider {
                id: ids::YEAR_SLIDER,
                label: "Years".to_string(),
                min: default.years[0],
                max: default.years[1],
                step: 1,
                marks: self.years.iter().copied().step_by(MARK_STEP.max(1)).collect(),
                value: default.years,
            },
        ]
    }

    /// Pass-through writers: whatever the control reports lands in the
    /// matching store slot unchanged.
    fn register_callbacks(&self, ctx: &mut CallbackContext) {
        ctx.on_control_change(ids::COUNTRY_SELECT, |store, value| {
            store.set(SELECTED_COUNTRIES, value);
        });
        ctx.on_control_change(ids::YEAR_SLIDER, |store, value| {
            store.set(SELECTED_YEARS, value);
        });
    }
}
