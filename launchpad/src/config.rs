//! Configuration for a launchpad session.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use launchpad_agent::backend::gemini::{DEFAULT_GEMINI_MODEL, GOOGLE_API_BASE};
use launchpad_agent::backend::openai::OPENAI_API_BASE;
use launchpad_agent::backend::{GeminiBackend, MockBackend, OpenAiBackend};
use launchpad_agent::{LlmBackend, LlmError, ServiceConfig};
use launchpad_core::{PortfolioParams, TradeParams, SEED_MARKET_CAP};

use crate::types::ConfigError;

/// Configuration for a launchpad session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// The local user
    pub user: UserConfig,
    /// Trade simulation
    pub trading: TradingConfig,
    /// Dashboard estimates
    pub portfolio: PortfolioParams,
    /// Text generation
    pub agent: AgentConfig,
    /// General settings
    pub general: GeneralConfig,
}

impl LaunchpadConfig {
    /// Load and validate config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trading.simulator.validate()?;
        Ok(())
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            info!(path = %path.display(), "Loading config");
            Self::from_file(path)
        } else {
            info!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// The local user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Name recorded as creator and comment author
    pub display_name: String,
    /// Connected wallet address
    pub wallet_address: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            display_name: "You".to_string(),
            wallet_address: "0x847...F2A".to_string(),
        }
    }
}

/// Trade simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingConfig {
    /// Market cap of a fresh launch
    pub seed_market_cap: f64,
    /// Price-impact constants
    pub simulator: TradeParams,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            seed_market_cap: SEED_MARKET_CAP,
            simulator: TradeParams::default(),
        }
    }
}

/// Which text-generation backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Gemini,
    OpenAi,
    Mock,
}

/// Text-generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Backend flavour
    pub backend: BackendKind,
    /// Override the backend's default base URL
    pub base_url: Option<String>,
    /// Model name
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Canned reply for the mock backend
    pub mock_response: String,
    /// Timeout and sampling
    pub service: ServiceConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Gemini,
            base_url: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key_env: "API_KEY".to_string(),
            mock_response: "Launch different. Your storefront, now with a bonding curve.".to_string(),
            service: ServiceConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    /// Build the configured backend.
    ///
    /// A missing API key is not an error: requests will fail and fall back.
    pub fn build_backend(&self) -> Result<Arc<dyn LlmBackend>, LlmError> {
        let api_key = self.api_key();
        if api_key.is_none() && self.backend != BackendKind::Mock {
            warn!(env = %self.api_key_env, "No API key set; generated copy will use fallbacks");
        }

        let backend: Arc<dyn LlmBackend> = match self.backend {
            BackendKind::Gemini => Arc::new(GeminiBackend::new(
                self.base_url.as_deref().unwrap_or(GOOGLE_API_BASE),
                &self.model,
                api_key,
            )?),
            BackendKind::OpenAi => Arc::new(OpenAiBackend::new(
                self.base_url.as_deref().unwrap_or(OPENAI_API_BASE),
                &self.model,
                api_key,
            )?),
            BackendKind::Mock => Arc::new(MockBackend::new(&self.model).with_response(&self.mock_response)),
        };
        Ok(backend)
    }
}

/// General configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,
    /// Start with the demo tokens
    pub seed_demo_data: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed_demo_data: true,
        }
    }
}
