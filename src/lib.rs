//! Population indicators dashboard plugin.
//!
//! Loads a wide-format CSV of World-Bank-style population indicators and
//! produces filterable line-chart specifications for a hosting dashboard
//! framework:
//!
//! ```text
//!  population.csv ──► loader ──► PopulationTable
//!                                   │
//!                 ┌─────────────────┴─────────────────┐
//!                 ▼                                   ▼
//!           Filter settings                 PopulationIndicators
//!       (countries, year range)           (six indicator subsets)
//!                 │                                   ▲
//!                 └────────► SessionStore ────────────┘
//!                    selected-countries, selected-years
//! ```
//!
//! The two components communicate only through the session store; the
//! hosting framework renders the declared controls and chart specs and
//! routes UI events through [`framework::CallbackContext`].

pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod framework;
pub mod layout;
pub mod plugin;
pub mod settings;
pub mod state;
pub mod views;

pub use chart::{ChartSpec, LineDash, Series};
pub use error::LoadError;
pub use framework::{CallbackContext, SettingsGroup, View};
pub use layout::{GraphId, PluginLayout};
pub use plugin::PopulationAnalysis;
pub use state::{FilterSelection, SessionStore};
