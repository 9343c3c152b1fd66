use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Store keys
// ---------------------------------------------------------------------------

/// Session store slot holding the selected country names (list of strings).
pub const SELECTED_COUNTRIES: &str = "selected-countries";

/// Session store slot holding the selected year range (`[min, max]`).
pub const SELECTED_YEARS: &str = "selected-years";

// ---------------------------------------------------------------------------
// FilterSelection
// ---------------------------------------------------------------------------

/// The current filter state: written only by the filter settings group,
/// read only by the indicator view, mediated by the [`SessionStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub countries: Vec<String>,
    pub years: [i32; 2],
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Session-scoped key-value state, modelled after the hosting framework's
/// per-session stores: JSON-ish values, one writer per key, synchronous
/// reads. Components never call each other; they communicate only through
/// these slots.
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: BTreeMap<String, Value>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Overwrite a slot. Every control change lands here, unconditionally.
    pub fn set(&mut self, key: &str, value: Value) {
        log::debug!("store['{key}'] = {value}");
        self.slots.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(key)
    }

    pub fn set_countries(&mut self, countries: Vec<String>) {
        self.set(SELECTED_COUNTRIES, serde_json::json!(countries));
    }

    pub fn set_years(&mut self, years: [i32; 2]) {
        self.set(SELECTED_YEARS, serde_json::json!(years));
    }

    /// The typed filter selection, once both slots hold valid values.
    pub fn selection(&self) -> Option<FilterSelection> {
        let countries: Vec<String> =
            serde_json::from_value(self.get(SELECTED_COUNTRIES)?.clone()).ok()?;
        let years: [i32; 2] = serde_json::from_value(self.get(SELECTED_YEARS)?.clone()).ok()?;
        Some(FilterSelection { countries, years })
    }
}
