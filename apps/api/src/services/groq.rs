use crate::config::Config;
use crate::error::PipelineError;
use crate::services::completion::CompletionProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;

/// Client for Groq's OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqClient {
    /// The key is not validated here; a missing key only fails once a
    /// completion is requested.
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, PipelineError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        Self::new(
            config.groq_api_key.clone(),
            &config.groq_base_url,
            config.completion_timeout(),
        )
    }

    fn api_key(&self) -> Result<&str, PipelineError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PipelineError::Configuration("GROQ_API_KEY is not set".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, PipelineError> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest {
            model: GROQ_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        info!("Requesting completion from {} ({} prompt bytes)", GROQ_MODEL, prompt.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PipelineError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(PipelineError::MalformedEnvelope)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or(PipelineError::EmptyResponse)?
            .message
            .content
            .unwrap_or_default();

        debug!("Completion returned {} bytes", content.len());
        Ok(content)
    }
}
