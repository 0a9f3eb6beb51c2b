use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub secrets: SecretsConfig,
}

#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    pub provider: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_key_env: String,
}

#[derive(Debug, Deserialize)]
pub struct SecretsConfig {
    pub file: String,
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("PLANWRIGHT_LLM_PROVIDER") {
            self.llm.provider = v;
        }
        if let Ok(v) = std::env::var("PLANWRIGHT_LLM_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Ok(v) = std::env::var("PLANWRIGHT_LLM_MODEL") {
            self.llm.model = v;
        }
    }

    fn default() -> Self {
        Self {
            llm: LlmConfig {
                provider: "openai".into(),
                base_url: "https://api.openai.com/v1".into(),
                model: "gpt-4o-mini".into(),
                max_tokens: planwright_llm::openai::DEFAULT_MAX_TOKENS,
                temperature: planwright_llm::openai::DEFAULT_TEMPERATURE,
                api_key_env: "OPENAI_API_KEY".into(),
            },
            secrets: SecretsConfig {
                file: "secrets.env".into(),
            },
        }
    }
}
