use std::collections::BTreeMap;

use serde_json::Value;

use crate::chart::ChartSpec;
use crate::layout::{Control, GraphId, ViewLayout};
use crate::state::SessionStore;

// ---------------------------------------------------------------------------
// Capabilities the hosting framework consumes
// ---------------------------------------------------------------------------

/// A settings panel: declares its controls and registers handlers for their
/// changes. The hosting framework renders the controls and routes UI events
/// into the registered handlers.
pub trait SettingsGroup {
    fn label(&self) -> &str;
    fn layout(&self) -> Vec<Control>;
    fn register_callbacks(&self, ctx: &mut CallbackContext);
}

/// A view: declares its graph panels and registers a listener that rebuilds
/// chart specifications whenever the session state it watches changes.
pub trait View {
    fn label(&self) -> &str;
    fn layout(&self) -> ViewLayout;
    fn register_callbacks(&self, ctx: &mut CallbackContext);
}

// ---------------------------------------------------------------------------
// Callback registration and dispatch
// ---------------------------------------------------------------------------

pub type ControlHandler = Box<dyn Fn(&mut SessionStore, Value) + Send>;
pub type StoreListener = Box<dyn Fn(&SessionStore) -> Vec<(GraphId, ChartSpec)> + Send>;

/// Registration context standing in for the hosting framework's reactive
/// wiring. Control handlers write session state; store listeners produce
/// fresh chart specs from it. Dispatch is synchronous: one user interaction,
/// one recomputation.
#[derive(Default)]
pub struct CallbackContext {
    control_handlers: BTreeMap<&'static str, ControlHandler>,
    store_listeners: Vec<(Vec<&'static str>, StoreListener)>,
}

impl CallbackContext {
    pub fn new() -> Self {
        CallbackContext::default()
    }

    /// Register the handler invoked when the control `id` changes.
    pub fn on_control_change(
        &mut self,
        id: &'static str,
        handler: impl Fn(&mut SessionStore, Value) + Send + 'static,
    ) {
        self.control_handlers.insert(id, Box::new(handler));
    }

    /// Register a listener over one or more store keys.
    pub fn on_store_change(
        &mut self,
        keys: Vec<&'static str>,
        listener: impl Fn(&SessionStore) -> Vec<(GraphId, ChartSpec)> + Send + 'static,
    ) {
        self.store_listeners.push((keys, Box::new(listener)));
    }

    /// Route one control change: run its handler against the store, then
    /// every listener (all listeners here watch the filter slots, so no
    /// finer-grained change tracking is needed). Returns the rebuilt charts.
    pub fn dispatch_control(
        &self,
        store: &mut SessionStore,
        id: &str,
        value: Value,
    ) -> Vec<(GraphId, ChartSpec)> {
        match self.control_handlers.get(id) {
            Some(handler) => handler(store, value),
            None => {
                log::warn!("control change for unregistered id '{id}' dropped");
                return Vec::new();
            }
        }
        self.notify(store)
    }

    /// Run every store listener against the current state.
    pub fn notify(&self, store: &SessionStore) -> Vec<(GraphId, ChartSpec)> {
        self.store_listeners
            .iter()
            .flat_map(|(_, listener)| listener(store))
            .collect()
    }

    pub fn has_control(&self, id: &str) -> bool {
        self.control_handlers.contains_key(id)
    }

    pub fn listener_count(&self) -> usize {
        self.store_listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SELECTED_COUNTRIES;

    #[test]
    fn dispatch_runs_handler_then_listeners() {
        let mut ctx = CallbackContext::new();
        ctx.on_control_change("country-select", |store, value| {
            store.set(SELECTED_COUNTRIES, value);
        });
        ctx.on_store_change(vec![SELECTED_COUNTRIES], |store| {
            let n = store
                .get(SELECTED_COUNTRIES)
                .and_then(|v| v.as_array().map(|a| a.len()))
                .unwrap_or(0);
            vec![(
                GraphId::Population,
                ChartSpec::new(format!("{n} selected"), [0, 1], Vec::new()),
            )]
        });

        let mut store = SessionStore::new();
        let updates = ctx.dispatch_control(
            &mut store,
            "country-select",
            serde_json::json!(["Norway", "Chile"]),
        );
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1.layout.title, "2 selected");
    }

    #[test]
    fn unregistered_control_is_dropped() {
        let ctx = CallbackContext::new();
        let mut store = SessionStore::new();
        let updates = ctx.dispatch_control(&mut store, "unknown", Value::Null);
        assert!(updates.is_empty());
        assert!(store.get("unknown").is_none());
    }
}
