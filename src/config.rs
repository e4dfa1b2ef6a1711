//! Server configuration

use serde::{Deserialize, Serialize};

/// Video metadata lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Look up titles and durations with yt-dlp. When off, every lookup
    /// returns placeholder info.
    pub enabled: bool,

    /// Path or name of the yt-dlp executable
    pub yt_dlp_path: String,

    /// Maximum time a single lookup may take, in seconds
    pub timeout_secs: u64,

    /// User agent yt-dlp presents to the video site
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            yt_dlp_path: "yt-dlp".to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Maximum caption upload size in megabytes
    pub max_upload_size_mb: usize,

    /// Metadata lookup configuration
    pub metadata: MetadataConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            max_upload_size_mb: 10,
            metadata: MetadataConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get maximum upload size in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_size_mb.saturating_mul(1024 * 1024)
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5001);
        assert_eq!(config.max_upload_size_mb, 10);
        assert!(config.metadata.enabled);
        assert_eq!(config.metadata.yt_dlp_path, "yt-dlp");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_max_upload_bytes() {
        let config = ServerConfig {
            max_upload_size_mb: 2,
            ..Default::default()
        };
        assert_eq!(config.max_upload_bytes(), 2 * 1024 * 1024);

        let config = ServerConfig {
            max_upload_size_mb: usize::MAX,
            ..Default::default()
        };
        assert_eq!(config.max_upload_bytes(), usize::MAX);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_json_logs() {
        let config = ServerConfig {
            log_format: "JSON".to_string(),
            ..Default::default()
        };
        assert!(config.json_logs());
    }
}
