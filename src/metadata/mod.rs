//! Video metadata lookup
//!
//! The HTTP layer only needs a title, duration and thumbnail for the video
//! being captioned. Lookups go through the `VideoInfoProvider` trait so the
//! real yt-dlp backend can be swapped out in tests or switched off in
//! configuration.

pub mod ytdlp;

use async_trait::async_trait;
use caption_lib::VideoInfo;
use std::sync::Arc;

use crate::config::MetadataConfig;
use crate::error::{Result, ServerError};

pub use ytdlp::YtDlpProvider;

/// Source of basic video information
#[async_trait]
pub trait VideoInfoProvider: Send + Sync {
    /// Look up the video behind `url`
    async fn fetch(&self, url: &str) -> Result<VideoInfo>;
}

/// Provider used when lookups are disabled; every fetch fails so callers
/// fall back to placeholder info.
#[derive(Debug, Default)]
pub struct DisabledProvider;

#[async_trait]
impl VideoInfoProvider for DisabledProvider {
    async fn fetch(&self, _url: &str) -> Result<VideoInfo> {
        Err(ServerError::Metadata("metadata lookup is disabled".to_string()))
    }
}

/// Build the provider selected by the configuration
pub fn provider_from_config(config: &MetadataConfig) -> Arc<dyn VideoInfoProvider> {
    if config.enabled {
        Arc::new(YtDlpProvider::new(config))
    } else {
        Arc::new(DisabledProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_provider() {
        let provider = provider_from_config(&MetadataConfig {
            enabled: false,
            ..Default::default()
        });
        let result = provider.fetch("https://youtu.be/abc").await;
        assert!(matches!(result, Err(ServerError::Metadata(_))));
    }
}
