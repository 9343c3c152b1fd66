use std::path::Path;

use anyhow::Result;

use crate::data::loader::load_population_csv;
use crate::framework::{CallbackContext, SettingsGroup, View};
use crate::layout::{PluginLayout, SettingsLayout};
use crate::settings::Filter;
use crate::state::SessionStore;
use crate::views::population::PopulationIndicators;

// ---------------------------------------------------------------------------
// Plugin assembler
// ---------------------------------------------------------------------------

/// The population analysis plugin: loads the CSV once at construction and
/// wires the filter settings group and the indicator view together through
/// the session store. The two components never call each other.
pub struct PopulationAnalysis {
    state: PluginState,
}

enum PluginState {
    /// The CSV could not be opened for a recognized reason; the plugin
    /// renders this message instead of the dashboard and registers nothing.
    Failed { message: String },
    Ready {
        filter: Filter,
        indicators: PopulationIndicators,
    },
}

impl PopulationAnalysis {
    /// Load the CSV and assemble the plugin. Access-denied and not-found
    /// produce a plugin in the failed state; any other load problem
    /// (malformed CSV, unexpected columns) propagates.
    pub fn new(path: &Path) -> Result<Self> {
        let state = match load_population_csv(path) {
            Ok(table) => PluginState::Ready {
                filter: Filter::new(&table),
                indicators: PopulationIndicators::new(&table),
            },
            Err(err) => match err.user_message() {
                Some(message) => {
                    log::warn!("population CSV unavailable: {message}");
                    PluginState::Failed { message }
                }
                None => return Err(err.into()),
            },
        };
        Ok(PopulationAnalysis { state })
    }

    /// The user-facing load failure, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            PluginState::Failed { message } => Some(message),
            PluginState::Ready { .. } => None,
        }
    }

    /// What the hosting framework should render.
    pub fn layout(&self) -> PluginLayout {
        match &self.state {
            PluginState::Failed { message } => PluginLayout::Error {
                message: message.clone(),
            },
            PluginState::Ready { filter, indicators } => PluginLayout::Dashboard {
                settings: SettingsLayout {
                    label: filter.label().to_string(),
                    controls: filter.layout(),
                },
                view: indicators.layout(),
            },
        }
    }

    /// Seed the two store slots with the default selection and register all
    /// callbacks. A failed plugin registers nothing: downstream components
    /// are skipped entirely.
    pub fn register(&self, store: &mut SessionStore, ctx: &mut CallbackContext) {
        let PluginState::Ready { filter, indicators } = &self.state else {
            return;
        };

        let default = filter.default_selection();
        store.set_countries(default.countries);
        store.set_years(default.years);

        filter.register_callbacks(ctx);
        indicators.register_callbacks(ctx);
    }
}
