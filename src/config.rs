//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Filter used when verbose logging is requested.
pub const VERBOSE_DIRECTIVES: &str = "fruit_stand=debug,tower_http=debug,info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for static assets (`/style.css` etc.).
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    // === Store Configuration ===
    /// Optional JSON file with the initial fruit records.
    #[serde(default)]
    pub seed_path: Option<String>,

    // === Observability ===
    /// Expose Prometheus metrics at `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            seed_path: None,
            metrics_enabled: default_true(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Tracing filter directives: `RUST_LOG`, or the verbose set when either
    /// the CLI flag or `VERBOSE` asks for it.
    pub fn log_directives(&self, verbose_flag: bool) -> String {
        if verbose_flag || self.verbose {
            VERBOSE_DIRECTIVES.to_string()
        } else {
            self.rust_log.clone()
        }
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("HOST is required".to_string());
        }

        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST must be an IP address, got {}", self.host));
        }

        if let Some(path) = &self.seed_path {
            if !Path::new(path).is_file() {
                return Err(format!("SEED_PATH {} does not exist", path));
            }
        }

        Ok(())
    }

    /// Socket address the HTTP server listens on.
    pub fn bind_addr(&self) -> std::result::Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| format!("invalid HOST {}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
