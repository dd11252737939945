//! Server configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Application configuration, built once at startup and passed down
/// explicitly — there is no global application object.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Config {
    /// Load configuration from `SEOSCOPE_BIND` and `SEOSCOPE_PORT`.
    ///
    /// Both are optional; defaults are `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self> {
        let bind = env::var("SEOSCOPE_BIND").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SEOSCOPE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("SEOSCOPE_PORT must be a valid port number")?;

        Ok(Self { bind, port })
    }

    /// The socket address to listen on.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.bind, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr() {
        let config = Config::default();
        let addr = config.listen_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }
}
