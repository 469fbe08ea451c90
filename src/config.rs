//! Configuration for TallyKV
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, TallyError};

/// Main configuration for a TallyKV instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Number of independently locked shards the key space is split over.
    /// `1` means a single lock guards the whole map.
    pub shard_count: usize,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Max concurrently in-flight requests
    pub max_connections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: 16,
            listen_addr: "0.0.0.0:3000".to_string(),
            max_connections: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration can be served
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(TallyError::Config("shard_count must be at least 1".to_string()));
        }
        if self.max_connections == 0 {
            return Err(TallyError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(TallyError::Config("listen_addr is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of store shards
    pub fn shard_count(mut self, count: usize) -> Self {
        self.config.shard_count = count;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum number of concurrently in-flight requests
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
