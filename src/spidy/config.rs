use log::warn;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://www.gw2spidy.com";
const DEFAULT_API_PATH: &str = "api/v0.9/json";

/// Price index client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Host of the price index service
    pub base_url: String,

    /// API prefix appended to the host
    pub api_path: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Upper bound on pages fetched for one paginated query
    pub max_pages: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            request_timeout_secs: 30,
            max_pages: 200,
        }
    }
}

impl Config {
    /// Defaults overridden by `SPIDY_*` environment variables.
    ///
    /// Falls back to the defaults when the environment holds invalid values.
    pub fn from_env() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid SPIDY_* configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("api_path", defaults.api_path)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("max_pages", defaults.max_pages as i64)?
            .add_source(config::Environment::with_prefix("SPIDY").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
