//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `NAMECHECK_*` environment
//! variables. The model endpoint credential (`OPENAI_API_KEY`) is the one
//! setting with no default.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

/// Model used when `NAMECHECK_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `NAMECHECK_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Chat model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Override for the model endpoint base URL (proxies, self-hosted
    /// gateways). `None` uses the provider default.
    pub api_base: Option<String>,

    /// Credential for the model endpoint. Required.
    pub api_key: String,
}

impl Config {
    const ENV_PORT: &'static str = "NAMECHECK_PORT";
    const ENV_BIND_ADDR: &'static str = "NAMECHECK_BIND_ADDR";
    const ENV_MODEL: &'static str = "NAMECHECK_MODEL";
    const ENV_API_BASE: &'static str = "NAMECHECK_API_BASE";
    const ENV_API_KEY: &'static str = "OPENAI_API_KEY";

    /// Loads configuration from environment variables (falling back to
    /// defaults where they exist).
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = Self::parse_port_from_env(8080)?;
        let bind_addr = Self::parse_bind_addr_from_env(IpAddr::V4(std::net::Ipv4Addr::new(
            127, 0, 0, 1,
        )))?;
        let model = Self::parse_string_from_env(Self::ENV_MODEL, DEFAULT_MODEL.to_string());
        let api_base = Self::parse_optional_string_from_env(Self::ENV_API_BASE);
        let api_key = Self::parse_required_string_from_env(Self::ENV_API_KEY)?;

        Ok(Self {
            port,
            bind_addr,
            model,
            api_base,
            api_key,
        })
    }

    /// Validates basic invariants not already enforced during parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidModel {
                value: self.model.clone(),
            });
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_required_string_from_env(var_name: &'static str) -> Result<String, ConfigError> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnvVar { name: var_name })
    }
}
