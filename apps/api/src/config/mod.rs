use crate::error::Result;
use ::config::{Environment, Source};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Checked when a completion is requested, not at startup.
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub completion_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from the process environment on top of defaults.
    pub fn load() -> Result<Self> {
        Self::from_source(environment())
    }

    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = ::config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("groq_base_url", DEFAULT_GROQ_BASE_URL)?
            .add_source(source)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn completion_timeout(&self) -> Option<Duration> {
        self.completion_timeout_secs.map(Duration::from_secs)
    }
}

/// Variables set to an empty string count as unset and keep their defaults.
fn environment() -> Environment {
    Environment::default().ignore_empty(true)
}
