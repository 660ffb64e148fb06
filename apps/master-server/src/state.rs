//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::storage::MasteringStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: MasteringStore,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// The store directories are not touched here; call
    /// [`MasteringStore::init`] before serving.
    pub fn new(config: Config) -> Self {
        let store = MasteringStore::new(
            config.storage.upload_dir.clone(),
            config.storage.master_dir.clone(),
        );

        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the mastering store
    pub fn store(&self) -> &MasteringStore {
        &self.inner.store
    }
}
