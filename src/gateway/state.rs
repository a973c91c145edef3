use std::sync::Arc;

use crate::account::Registry;
use crate::transfer::TransferEngine;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    /// Account registry (shared with the engine)
    pub registry: Arc<Registry>,
    /// Transfer engine
    pub engine: TransferEngine,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            engine: TransferEngine::new(registry.clone()),
            registry,
        }
    }
}
