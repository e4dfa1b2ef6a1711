//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{MetadataConfig, ServerConfig};
use crate::error::{Result, ServerError};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Metadata lookup settings
    pub metadata: Option<MetadataSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Limits settings
    pub limits: Option<LimitsSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataSettings {
    /// Look up video info with yt-dlp
    pub enabled: Option<bool>,
    /// yt-dlp executable
    pub yt_dlp_path: Option<String>,
    /// Lookup timeout in seconds
    pub timeout_secs: Option<u64>,
    /// User agent passed to yt-dlp
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsSettings {
    /// Maximum caption upload size in MB
    pub max_upload_size_mb: Option<usize>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let defaults = ServerConfig::default();
        Self {
            server: ServerSettings {
                host: defaults.host,
                port: defaults.port,
                cors_enabled: Some(defaults.cors_enabled),
            },
            metadata: Some(MetadataSettings {
                enabled: Some(defaults.metadata.enabled),
                yt_dlp_path: Some(defaults.metadata.yt_dlp_path),
                timeout_secs: Some(defaults.metadata.timeout_secs),
                user_agent: Some(defaults.metadata.user_agent),
            }),
            logging: Some(LoggingSettings {
                level: defaults.log_level,
                format: Some(defaults.log_format),
            }),
            limits: Some(LimitsSettings {
                max_upload_size_mb: Some(defaults.max_upload_size_mb),
            }),
        }
    }

    /// Convert to ServerConfig, filling unset values with defaults
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let metadata = match self.metadata {
            Some(m) => MetadataConfig {
                enabled: m.enabled.unwrap_or(defaults.metadata.enabled),
                yt_dlp_path: m.yt_dlp_path.unwrap_or(defaults.metadata.yt_dlp_path),
                timeout_secs: m.timeout_secs.unwrap_or(defaults.metadata.timeout_secs),
                user_agent: m.user_agent.unwrap_or(defaults.metadata.user_agent),
            },
            None => defaults.metadata,
        };
        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or(defaults.log_format)),
            None => (defaults.log_level, defaults.log_format),
        };

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            cors_enabled: self.server.cors_enabled.unwrap_or(defaults.cors_enabled),
            log_level,
            log_format,
            max_upload_size_mb: self
                .limits
                .and_then(|l| l.max_upload_size_mb)
                .unwrap_or(defaults.max_upload_size_mb),
            metadata,
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    ConfigFile::default_config().to_file(path)
}

/// Load the server configuration from `path`.
///
/// A missing file yields the defaults. An unreadable or invalid file is
/// reported back alongside the defaults so the caller can log it once
/// logging is up.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> (ServerConfig, Option<ServerError>) {
    let path = path.as_ref();
    if !path.exists() {
        return (ServerConfig::default(), None);
    }
    match ConfigFile::from_file(path) {
        Ok(cf) => (cf.into_server_config(), None),
        Err(e) => (ServerConfig::default(), Some(e)),
    }
}
