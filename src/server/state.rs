//! Server State
//!
//! Shared state for the health handlers. The host is stateless apart from
//! its configuration and start instant.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::ServerConfig;

#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
        }
    }

    pub fn dist_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.dist_dir)
    }

    /// Whether the bundle directory holds an `index.html`
    pub fn dist_available(&self) -> bool {
        self.dist_dir().join("index.html").is_file()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
