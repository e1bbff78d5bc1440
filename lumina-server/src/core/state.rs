//! Server state

use std::sync::Arc;

use crate::core::Config;
use crate::store::{InMemoryStore, RecordStore, SeedData};

/// Shared state handed to every handler
///
/// Holds the immutable configuration and the record store behind `Arc`, so
/// cloning per request is cheap. The store is a trait object; swapping the
/// in-memory backend for a persistent one does not touch aggregation code.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn RecordStore>,
}

impl ServerState {
    /// Load the base tables and build the state.
    ///
    /// `DATA_DIR` CSVs take precedence; otherwise the embedded November 2025
    /// snapshot is used.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let seed = match &config.data_dir {
            Some(dir) => {
                tracing::info!(dir = %dir, "Loading base tables from DATA_DIR");
                SeedData::load_from_dir(dir)?
            }
            None => SeedData::load_embedded()?,
        };

        tracing::info!(
            units = seed.units.len(),
            pics = seed.pics.len(),
            sales = seed.sales.len(),
            "Record store loaded"
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            store: Arc::new(InMemoryStore::new(seed)),
        })
    }

    /// Build a state over an explicit store (tests, alternative backends).
    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
