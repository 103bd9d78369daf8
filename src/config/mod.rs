//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RELCHART_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_CHART_TITLE;
use crate::dataset::LoadOptions;
use crate::domain::CanonicalDomain;
use crate::scoring::{DomainPolicy, PolicyTable};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RELCHART_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// JSON table of similarity records. Default: `./data/output_dataset.json`.
    pub dataset_path: PathBuf,

    /// Where `--render` writes the HTML page. Default: `./similarity_chart.html`.
    pub output_path: PathBuf,

    /// Title drawn above the chart.
    pub chart_title: String,

    /// Strip `.txt` from document identifiers when loading. Default: `false`.
    pub strip_txt_extension: bool,

    /// Per-domain thresholds and marker styling.
    pub policies: PolicyTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            dataset_path: PathBuf::from("./data/output_dataset.json"),
            output_path: PathBuf::from("./similarity_chart.html"),
            chart_title: DEFAULT_CHART_TITLE.to_string(),
            strip_txt_extension: false,
            policies: PolicyTable::with_defaults(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "RELCHART_PORT";
    const ENV_BIND_ADDR: &'static str = "RELCHART_BIND_ADDR";
    const ENV_DATASET_PATH: &'static str = "RELCHART_DATASET_PATH";
    const ENV_OUTPUT_PATH: &'static str = "RELCHART_OUTPUT_PATH";
    const ENV_CHART_TITLE: &'static str = "RELCHART_CHART_TITLE";
    const ENV_STRIP_TXT_EXTENSION: &'static str = "RELCHART_STRIP_TXT_EXTENSION";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let dataset_path = Self::parse_path_from_env(Self::ENV_DATASET_PATH, defaults.dataset_path);
        let output_path = Self::parse_path_from_env(Self::ENV_OUTPUT_PATH, defaults.output_path);
        let chart_title = Self::parse_string_from_env(Self::ENV_CHART_TITLE, defaults.chart_title);
        let strip_txt_extension =
            Self::parse_bool_from_env(Self::ENV_STRIP_TXT_EXTENSION, defaults.strip_txt_extension);
        let policies = Self::parse_policies_from_env()?;

        Ok(Self {
            port,
            bind_addr,
            dataset_path,
            output_path,
            chart_title,
            strip_txt_extension,
            policies,
        })
    }

    /// Checks the dataset path and policy table (does not read the dataset).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dataset_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.dataset_path.clone(),
            });
        }
        if !self.dataset_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.dataset_path.clone(),
            });
        }

        self.policies.validate()?;

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    /// URL of `/healthz` on the configured listener.
    ///
    /// An unspecified bind address (`0.0.0.0`, `::`) is reached through loopback.
    pub fn health_url(&self) -> String {
        let host = match self.bind_addr {
            IpAddr::V4(addr) if addr.is_unspecified() => IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            IpAddr::V6(addr) if addr.is_unspecified() => IpAddr::V6(std::net::Ipv6Addr::LOCALHOST),
            addr => addr,
        };
        let authority = match host {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        };
        format!("http://{}/healthz", authority)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strip_txt_extension: self.strip_txt_extension,
        }
    }

    /// `RELCHART_<DOMAIN>_THRESHOLD` variable name for `domain`.
    pub fn threshold_env_var(domain: CanonicalDomain) -> String {
        format!("RELCHART_{}_THRESHOLD", domain.env_key())
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

    fn parse_policies_from_env() -> Result<PolicyTable, ConfigError> {
        CanonicalDomain::ALL
            .into_iter()
            .map(|domain| {
                let policy = DomainPolicy::default_for(domain);
                let var = Self::threshold_env_var(domain);
                let policy = match env::var(&var) {
                    Ok(value) => {
                        let threshold = Self::parse_threshold(&var, &value)?;
                        policy.with_threshold(threshold)
                    }
                    Err(_) => policy,
                };
                Ok::<_, ConfigError>((domain, policy))
            })
            .collect()
    }

    fn parse_threshold(var: &str, value: &str) -> Result<f64, ConfigError> {
        let threshold: f64 = value
            .trim()
            .parse()
            .map_err(|e| ConfigError::ThresholdParseError {
                name: var.to_string(),
                value: value.to_string(),
                source: e,
            })?;

        if !threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                name: var.to_string(),
                value: value.to_string(),
            });
        }

        Ok(threshold)
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(default)
    }
}
