use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("CIRCUIT__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_parses() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: false,
            request_timeout_secs: 10,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 8080,
            enable_cors: false,
            request_timeout_secs: 10,
        };
        assert!(server.socket_addr().is_err());
    }
}
