//! Application state
//!
//! Caption parsing keeps nothing between requests, so the shared state is
//! just the configuration and the metadata provider.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::metadata::{provider_from_config, VideoInfoProvider};

/// State shared by all request handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Video metadata source
    pub metadata: Arc<dyn VideoInfoProvider>,
}

impl AppState {
    /// Create state with the metadata provider chosen by `config`
    pub fn new(config: ServerConfig) -> Self {
        let metadata = provider_from_config(&config.metadata);
        Self::with_provider(config, metadata)
    }

    /// Create state with an explicit metadata provider
    pub fn with_provider(config: ServerConfig, metadata: Arc<dyn VideoInfoProvider>) -> Self {
        Self { config, metadata }
    }
}
