use crate::domain::model::CarrierId;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub tracker: TrackerSettings,
    pub http: HttpConfig,
    pub server: ServerConfig,
    /// Per-carrier overrides keyed by carrier id (`elta`, `box_now`, ...).
    pub carriers: HashMap<String, CarrierOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    pub min_length: usize,
    /// Upper bound on a single batch, `0` for no limit.
    pub max_batch_size: usize,
    pub concurrent_requests: usize,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_batch_size: 0,
            concurrent_requests: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierOverride {
    pub endpoint: Option<String>,
}

impl TrackerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ELTA_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn set_endpoint(&mut self, carrier: CarrierId, endpoint: impl Into<String>) {
        self.carriers
            .entry(carrier.as_str().to_string())
            .or_default()
            .endpoint = Some(endpoint.into());
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_min("tracker.min_length", self.tracker.min_length, 1)?;
        validation::validate_min(
            "tracker.concurrent_requests",
            self.tracker.concurrent_requests,
            1,
        )?;
        validation::validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 300)?;
        validation::validate_header_value("http.user_agent", &self.http.user_agent)?;
        validation::validate_bind_address("server.bind", &self.server.bind)?;

        for (key, carrier) in &self.carriers {
            let id = validation::validate_carrier_key(key)?;
            if let Some(endpoint) = &carrier.endpoint {
                validation::validate_endpoint(&format!("carriers.{}.endpoint", id), endpoint)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TrackerConfig {
    fn min_length(&self) -> usize {
        self.tracker.min_length
    }

    fn max_batch_size(&self) -> usize {
        self.tracker.max_batch_size
    }

    fn concurrent_requests(&self) -> usize {
        self.tracker.concurrent_requests
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }

    fn endpoint_override(&self, carrier: CarrierId) -> Option<&str> {
        self.carriers
            .get(carrier.as_str())
            .and_then(|c| c.endpoint.as_deref())
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
