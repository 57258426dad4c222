//! Configuration System
//!
//! Host configuration from a TOML file with environment overrides.
//! CLI flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::settings::DashboardSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built page (`index.html` and assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> String {
    "./skyboard-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "skyboard=info,tower_http=debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from the first default location that parses, else environment only
    ///
    /// Runs before logging is set up, so the outcome is returned for the
    /// caller to report.
    pub fn load_default() -> (Self, LoadReport) {
        Self::load_first(&Self::search_paths())
    }

    /// Load from the first of `paths` that exists and parses
    ///
    /// Files that exist but fail to load are skipped and recorded.
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.errors.push(e),
            }
        }

        (Self::from_env(), report)
    }

    /// Candidate config files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("skyboard").join("config.toml")),
            Some(PathBuf::from("/etc/skyboard/config.toml")),
            Some(PathBuf::from("./skyboard.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply `SKYBOARD_*` overrides read through `lookup`
    ///
    /// Unparseable port values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SKYBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SKYBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dist_dir) = lookup("SKYBOARD_DIST_DIR") {
            self.server.dist_dir = dist_dir;
        }
        if let Some(url) = lookup("SKYBOARD_WEATHER_URL") {
            self.dashboard.weather_base_url = url;
        }
        if let Some(level) = lookup("SKYBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SKYBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where [`Config::load_default`] found its settings
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the configuration came from; `None` means defaults
    pub source: Option<PathBuf>,

    /// Files that exist but could not be read or parsed
    pub errors: Vec<ConfigError>,
}

impl LoadReport {
    /// Report for a file named explicitly on the command line
    pub fn from_path(path: &Path) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            errors: Vec::new(),
        }
    }

    /// Log the outcome through the installed subscriber
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!("Skipping config: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Skyboard Configuration
#
# Environment variables override these settings:
# - SKYBOARD_HOST
# - SKYBOARD_PORT
# - SKYBOARD_DIST_DIR
# - SKYBOARD_WEATHER_URL
# - SKYBOARD_LOG_LEVEL
# - SKYBOARD_LOG_FORMAT

[server]
# Address the page is served on
host = "127.0.0.1"
port = 8084

# Built page directory (trunk build output)
dist_dir = "./skyboard-ui/dist"

[dashboard]
# Forecast provider origin
weather_base_url = "https://api.open-meteo.com"

# Radar map page and zoom level
radar_base_url = "https://www.rainviewer.com/map.html"
radar_zoom = 7

# Used when no location is available (New York)
default_latitude = 40.7128
default_longitude = -74.006

# How long the location request may take (ms)
geolocation_timeout_ms = 5000

# Clock refresh interval (ms)
clock_tick_ms = 1000

[logging]
# Filter directives, overridden by RUST_LOG
level = "skyboard=info,tower_http=debug"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.server.dist_dir, defaults.server.dist_dir);
        assert_eq!(config.dashboard, defaults.dashboard);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skyboard.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[dashboard]\nradar_zoom = 5\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dashboard.radar_zoom, 5);
        assert_eq!(config.dashboard.weather_base_url, "https://api.open-meteo.com");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        let broken = Config::load(&path).unwrap_err();
        assert!(matches!(broken, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SKYBOARD_HOST", "0.0.0.0"),
            ("SKYBOARD_PORT", "not-a-port"),
            ("SKYBOARD_DIST_DIR", "/srv/skyboard"),
            ("SKYBOARD_WEATHER_URL", "http://localhost:9999"),
            ("SKYBOARD_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.server.dist_dir, "/srv/skyboard");
        assert_eq!(config.dashboard.weather_base_url, "http://localhost:9999");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_first_reports_broken_files() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let absent = dir.path().join("absent.toml");
        let valid = dir.path().join("skyboard.toml");
        std::fs::write(&broken, "[server\nport=").unwrap();
        std::fs::write(&valid, "[server]\nport = 9100\n").unwrap();

        let (config, report) =
            Config::load_first(&[absent.clone(), broken.clone(), valid.clone()]);
        assert_eq!(config.server.port, 9100);
        assert_eq!(report.source, Some(valid));
        assert_eq!(report.errors.len(), 1);
        assert!(matches!(
            &report.errors[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_load_first_falls_back_with_errors() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("skyboard.toml");
        std::fs::write(&broken, "[server\nport=").unwrap();

        let (config, report) = Config::load_first(&[broken]);
        assert!(report.source.is_none());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(config.server.dist_dir, "./skyboard-ui/dist");
    }

    #[test]
    fn test_search_paths_end_with_working_directory() {
        let paths = Config::search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from("./skyboard.toml")));
        assert!(paths.contains(&PathBuf::from("/etc/skyboard/config.toml")));
    }
}
