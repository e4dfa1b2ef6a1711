//! yt-dlp backed metadata provider

use async_trait::async_trait;
use caption_lib::VideoInfo;
use serde::Deserialize;
use std::time::Duration;
use tokio::process::Command;

use super::VideoInfoProvider;
use crate::config::MetadataConfig;
use crate::error::{Result, ServerError};

/// Fields we read from `yt-dlp --dump-single-json`
#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    title: Option<String>,
    duration: Option<f64>,
    id: Option<String>,
    thumbnail: Option<String>,
}

impl From<YtDlpInfo> for VideoInfo {
    fn from(info: YtDlpInfo) -> Self {
        VideoInfo {
            title: info.title.unwrap_or_else(|| "Unknown Video".to_string()),
            duration: info.duration.unwrap_or(0.0),
            video_id: info.id.unwrap_or_default(),
            thumbnail: info.thumbnail.unwrap_or_default(),
            captions: Vec::new(),
        }
    }
}

/// Runs yt-dlp as a subprocess to read video metadata without downloading
#[derive(Debug, Clone)]
pub struct YtDlpProvider {
    program: String,
    timeout: Duration,
    user_agent: String,
}

impl YtDlpProvider {
    pub fn new(config: &MetadataConfig) -> Self {
        Self {
            program: config.yt_dlp_path.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl VideoInfoProvider for YtDlpProvider {
    async fn fetch(&self, url: &str) -> Result<VideoInfo> {
        tracing::debug!("Getting basic video info for: {}", url);

        let child = Command::new(&self.program)
            .args([
                "--dump-single-json",
                "--skip-download",
                "--no-warnings",
                "--quiet",
                "--user-agent",
                self.user_agent.as_str(),
                "--",
                url,
            ])
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| {
                ServerError::Metadata(format!(
                    "{} timed out after {} seconds",
                    self.program,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ServerError::Metadata(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ServerError::Metadata(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let info = parse_info(&output.stdout)?;
        tracing::info!("Successfully extracted basic info: {}", info.title);
        Ok(info)
    }
}

/// Parse yt-dlp's JSON dump into `VideoInfo`
fn parse_info(stdout: &[u8]) -> Result<VideoInfo> {
    let info: Option<YtDlpInfo> = serde_json::from_slice(stdout)
        .map_err(|e| ServerError::Metadata(format!("invalid yt-dlp output: {}", e)))?;
    info.map(VideoInfo::from)
        .ok_or_else(|| ServerError::Metadata("yt-dlp returned no video info".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info() {
        let json = br#"{
            "id": "dQw4w9WgXcQ",
            "title": "Example video",
            "duration": 212,
            "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq.jpg",
            "formats": []
        }"#;
        let info = parse_info(json).unwrap();
        assert_eq!(info.video_id, "dQw4w9WgXcQ");
        assert_eq!(info.title, "Example video");
        assert_eq!(info.duration, 212.0);
        assert_eq!(info.thumbnail, "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq.jpg");
        assert!(info.captions.is_empty());
    }

    #[test]
    fn test_parse_info_defaults() {
        let info = parse_info(br#"{"id": "abc", "duration": null}"#).unwrap();
        assert_eq!(info.title, "Unknown Video");
        assert_eq!(info.duration, 0.0);
        assert_eq!(info.thumbnail, "");
    }

    #[test]
    fn test_parse_info_errors() {
        assert!(parse_info(b"null").is_err());
        assert!(parse_info(b"not json").is_err());
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let provider = YtDlpProvider::new(&MetadataConfig {
            yt_dlp_path: "/nonexistent/yt-dlp".to_string(),
            timeout_secs: 5,
            ..Default::default()
        });
        let result = provider.fetch("https://youtu.be/abc").await;
        assert!(matches!(result, Err(ServerError::Metadata(_))));
    }
}
