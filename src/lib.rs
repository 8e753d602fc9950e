//! Instant sea/air freight quotes and shipment CO₂ reporting.
//!
//! Quotes: [`search_ports`] → [`calculate_quote`], optionally recorded with
//! [`QuoteHistoryStore`]. Emissions: [`calculate_shipment_co2`] and the
//! fleet aggregations, [`simulate_reduction`] and [`estimate_offset_cost`].

pub mod config;
pub mod domain;
pub mod infra;
pub mod util;

pub use config::{load_config, load_config_from, ConfigError, EngineConfig};
pub use domain::*;
pub use infra::{FileStore, KeyValueStore, MemoryStore, QuoteHistoryStore, StoreError};
pub use util::format::{format_currency, Currency};
