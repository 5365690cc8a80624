// Configuration module
// Typed configuration and shared application state

use serde::Deserialize;
use std::net::SocketAddr;

use crate::http::mime::MimeTable;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined or common)
    pub access_log_format: String,
}

/// Routes configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Directory the server resolves request paths under
    pub root: String,
    /// Files tried, in order, when a request targets a directory
    pub index_files: Vec<String>,
}

impl Config {
    /// Build the configuration from fixed defaults.
    ///
    /// The server deliberately consumes no CLI arguments, environment
    /// variables, or config files: port and served root are constants.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("routes.root", ".")?
            .set_default(
                "routes.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Application state
///
/// Constructed once at startup and shared read-only across connections.
pub struct AppState {
    pub config: Config,
    pub mime: MimeTable,
}

impl AppState {
    pub const fn new(config: Config, mime: MimeTable) -> Self {
        Self { config, mime }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::load().expect("defaults must build");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.routes.root, ".");
        assert_eq!(cfg.routes.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.logging.access_log);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load().expect("defaults must build");
        let addr = cfg.socket_addr().expect("default address must parse");
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_unspecified());
    }
}
