use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::{Result, ScanError};

pub const MAINNET_HOST: &str = "https://evmapi.confluxscan.org";
pub const TESTNET_HOST: &str = "https://evmapi-testnet.confluxscan.org";

/// Path of the module/action style endpoints.
pub const ACTION_PATH: &str = "/api";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_NETWORK: &str = "CONFLUXSCAN_NETWORK";
pub const ENV_API_KEY: &str = "CONFLUXSCAN_API_KEY";
pub const ENV_HOST: &str = "CONFLUXSCAN_HOST";
pub const ENV_TIMEOUT_SECS: &str = "CONFLUXSCAN_TIMEOUT_SECS";

/// Conflux eSpace network the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn default_host(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_HOST,
            Network::Testnet => TESTNET_HOST,
        }
    }
}

impl FromStr for Network {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            other => Err(ScanError::InvalidArgument(format!(
                "Unknown network '{}'; expected 'mainnet' or 'testnet'",
                other
            ))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Immutable client configuration.
///
/// Built once and handed to the SDK builder; nothing reads it from global state.
#[derive(Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub network: Network,
    pub api_key: Option<String>,
    /// Overrides the network's default host when set.
    pub host: Option<String>,
    pub timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            api_key: None,
            host: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ScanConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present. Unset
    /// variables fall back to the defaults; malformed values are rejected.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = ScanConfig::default();

        if let Ok(network) = env::var(ENV_NETWORK) {
            cfg.network = network.parse()?;
        }

        cfg.api_key = env::var(ENV_API_KEY)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        cfg.host = env::var(ENV_HOST)
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ScanError::InvalidArgument(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            cfg.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(network = %cfg.network, host = ?cfg.host, "loaded scan config from environment");
        Ok(cfg)
    }

    /// The base URL requests are sent to: the host override, or the network default.
    pub fn base_url(&self) -> Result<Url> {
        let host = self
            .host
            .as_deref()
            .unwrap_or_else(|| self.network.default_host());
        Ok(Url::parse(host)?)
    }
}

// The API key never shows up in logs or panics.
impl fmt::Debug for ScanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanConfig")
            .field("network", &self.network)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}
