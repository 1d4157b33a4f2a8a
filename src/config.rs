use crate::naver::NAVER_API_BASE;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service account JSON key file.
    pub credentials_path: String,
    pub bind_addr: SocketAddr,
    pub naver_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials_path = env::var("GOOGLE_APPLICATION_CREDENTIALS")
            .map_err(|_| ConfigError::MissingVar("GOOGLE_APPLICATION_CREDENTIALS"))?;

        let bind_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidVar {
            name: "BIND_ADDR",
            value: bind_raw,
        })?;

        let naver_api_base =
            env::var("NAVER_API_BASE").unwrap_or_else(|_| NAVER_API_BASE.to_string());

        Ok(Self {
            credentials_path,
            bind_addr,
            naver_api_base,
        })
    }
}
