use std::path::PathBuf;

use crate::config::{
    DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use crate::error::{ParserError, Result};

/// Configuration for the annotation service.
///
/// Constructed once and passed in explicitly; nothing here is read from
/// ambient state after construction.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub temperature: f64,
    pub timeout_secs: u64,
    /// When set, every raw service response is written to this directory
    /// for inspection.
    pub dump_dir: Option<PathBuf>,
}

impl EnrichmentConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANNOTATION_API_KEY")
            .map_err(|_| ParserError::Config("ANNOTATION_API_KEY not set".into()))?;

        let model = std::env::var("ANNOTATION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let api_base_url = std::env::var("ANNOTATION_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());

        let temperature = std::env::var("ANNOTATION_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let timeout_secs = std::env::var("ANNOTATION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let dump_dir = std::env::var("ANNOTATION_DUMP_DIR").ok().map(PathBuf::from);

        Ok(Self {
            api_key,
            model,
            api_base_url,
            temperature,
            timeout_secs,
            dump_dir,
        })
    }

    /// Create a config builder for testing.
    pub fn builder(api_key: impl Into<String>) -> EnrichmentConfigBuilder {
        EnrichmentConfigBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dump_dir: None,
        }
    }
}

/// Builder for constructing `EnrichmentConfig` in tests.
pub struct EnrichmentConfigBuilder {
    api_key: String,
    model: String,
    api_base_url: String,
    temperature: f64,
    timeout_secs: u64,
    dump_dir: Option<PathBuf>,
}

impl EnrichmentConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn dump_dir(mut self, dump_dir: impl Into<PathBuf>) -> Self {
        self.dump_dir = Some(dump_dir.into());
        self
    }

    pub fn build(self) -> EnrichmentConfig {
        EnrichmentConfig {
            api_key: self.api_key,
            model: self.model,
            api_base_url: self.api_base_url,
            temperature: self.temperature,
            timeout_secs: self.timeout_secs,
            dump_dir: self.dump_dir,
        }
    }
}
