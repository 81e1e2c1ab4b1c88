use dotenvy::dotenv;
use log::{error, info};
use std::{
    env as stdenv,
    net::{IpAddr, UdpSocket},
    num::ParseIntError,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_MOVIES_FILE: &str = "movies.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_PORT must be a port number, got {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub movies_file: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = load_env_var("API_PORT", DEFAULT_PORT);
        let port = port
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: port, source })?;

        Ok(Self {
            host: load_env_var("HOST", DEFAULT_HOST),
            port,
            movies_file: PathBuf::from(load_env_var("MOVIES_FILE", DEFAULT_MOVIES_FILE)),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

pub fn load_env_file() {
    let current_dir = stdenv::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let env_path = current_dir.join(".env");

    if dotenv().is_err() {
        error!(
            ".env file not found. Expected it at: {}",
            env_path.display()
        );
    } else {
        info!(".env loading at: {}", env_path.display());
    }
}

pub fn load_env_var(key: &str, default: &str) -> String {
    stdenv::var(key).unwrap_or_else(|_| default.to_string())
}

/// First non-loopback IPv4 address of this host, or `localhost`.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
pub fn local_ip() -> String {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("192.0.2.1:80")?;
            socket.local_addr()
        })
        .ok()
        .map(|addr| addr.ip())
        .filter(|ip| matches!(ip, IpAddr::V4(v4) if !v4.is_loopback() && !v4.is_unspecified()))
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_ip_is_never_loopback() {
        let ip = local_ip();
        assert!(ip == "localhost" || !ip.starts_with("127."));
    }

    #[test]
    fn missing_env_var_falls_back_to_default() {
        assert_eq!(
            load_env_var("MOVIES_API_SURELY_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
