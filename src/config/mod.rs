//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VERACITY_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::constants::{DEFAULT_EQS_TOP_N, DEFAULT_MAX_SOURCES};
use crate::credibility::FactCheckers;
use crate::scoring::ScoringConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERACITY_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Sources (by directness) that feed the EQS. Default: `5`.
    pub eqs_top_n: usize,

    /// Fact-checking outlets that get the credibility floor.
    pub factcheck_domains: FactCheckers,

    /// Budget for scoring one request. Default: 4 s.
    pub request_timeout: Duration,

    /// Cap applied when a request asks for domain de-duplication. Default: `12`.
    pub max_sources: usize,

    /// Max entries in the assessment cache. Default: `10_000`.
    pub cache_capacity: u64,
}

/// Default per-request timeout used when `VERACITY_REQUEST_TIMEOUT_MS` is not set.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 4_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            eqs_top_n: DEFAULT_EQS_TOP_N,
            factcheck_domains: FactCheckers::default(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            max_sources: DEFAULT_MAX_SOURCES,
            cache_capacity: 10_000,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VERACITY_PORT";
    const ENV_BIND_ADDR: &'static str = "VERACITY_BIND_ADDR";
    const ENV_EQS_TOP_N: &'static str = "VERACITY_EQS_TOP_N";
    const ENV_FACTCHECK_DOMAINS: &'static str = "VERACITY_FACTCHECK_DOMAINS";
    const ENV_REQUEST_TIMEOUT_MS: &'static str = "VERACITY_REQUEST_TIMEOUT_MS";
    const ENV_MAX_SOURCES: &'static str = "VERACITY_MAX_SOURCES";
    const ENV_CACHE_CAPACITY: &'static str = "VERACITY_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Unparseable numbers fall back to their defaults; an unparseable port or bind
    /// address is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let eqs_top_n =
            Self::parse_u64_from_env(Self::ENV_EQS_TOP_N, defaults.eqs_top_n as u64) as usize;
        let factcheck_domains = env::var(Self::ENV_FACTCHECK_DOMAINS)
            .map(|v| FactCheckers::parse_list(&v))
            .unwrap_or(defaults.factcheck_domains);
        let request_timeout = Duration::from_millis(Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_MS,
            DEFAULT_REQUEST_TIMEOUT_MS,
        ));
        let max_sources =
            Self::parse_u64_from_env(Self::ENV_MAX_SOURCES, defaults.max_sources as u64) as usize;
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity);

        Ok(Self {
            port,
            bind_addr,
            eqs_top_n,
            factcheck_domains,
            request_timeout,
            max_sources,
            cache_capacity,
        })
    }

    /// Checks the invariants the scorer and gateway rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.eqs_top_n == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_EQS_TOP_N,
            });
        }

        if self.max_sources == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_MAX_SOURCES,
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_REQUEST_TIMEOUT_MS,
            });
        }

        if self.factcheck_domains.is_empty() {
            return Err(ConfigError::EmptyFactCheckers);
        }

        Ok(())
    }

    /// Immutable scoring tunables derived from this configuration.
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig::new(self.eqs_top_n, self.factcheck_domains.clone())
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

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}
