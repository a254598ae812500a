use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 800;
/// Vision models accept a handful of images per request; five is the provider's recommendation.
pub const DEFAULT_MAX_MEDIA_ITEMS: usize = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
#[error("{name}: invalid value {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absent credentials are reported per request, not at startup.
    pub llm_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub max_media_items: usize,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            llm_temperature: DEFAULT_TEMPERATURE,
            llm_max_tokens: DEFAULT_MAX_TOKENS,
            max_media_items: DEFAULT_MAX_MEDIA_ITEMS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let llm_api_key = non_empty_var("GROQ_API_KEY").or_else(|| non_empty_var("LLM_API_KEY"));

        Ok(Self {
            llm_api_key,
            llm_base_url: non_empty_var("LLM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_model: non_empty_var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_timeout: Duration::from_secs(parse_var("LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),
            llm_temperature: parse_var("LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            llm_max_tokens: parse_var("LLM_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            max_media_items: parse_var("MAX_MEDIA_ITEMS", DEFAULT_MAX_MEDIA_ITEMS)?,
            bind_addr: non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match non_empty_var(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError { name, value: raw }),
    }
}
