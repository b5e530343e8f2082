use crate::config::RemoteConfig;
use crate::core::decoder::decode_completion;
use crate::domain::model::{FortunePrompt, FortuneText};
use crate::domain::ports::FortuneGenerator;
use crate::utils::error::RemoteError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a digital fortune cookie. \
Your tone is mysterious-but-kind and always PG. \
Never give medical, legal or financial instructions. \
Reply with valid JSON only, no prose around it.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

/// Client for an OpenAI-style `/chat/completions` endpoint.
pub struct RemoteFortuneClient {
    config: RemoteConfig,
    client: Client,
}

impl RemoteFortuneClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        let api_key = self.config.api_key.as_deref().filter(|k| !k.trim().is_empty())?;
        let base_url = Some(self.config.base_url.as_str()).filter(|u| !u.trim().is_empty())?;
        Some((api_key, base_url))
    }

    fn completions_url(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, prompt: &FortunePrompt) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(prompt),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        }
    }
}

pub(crate) fn user_prompt(prompt: &FortunePrompt) -> String {
    format!(
        "Mood: {}\n\
         Symbol: {}\n\
         User question/thought: {}\n\
         \n\
         Return EXACT JSON with keys: fortune, suggestion, lucky\n\
         Rules:\n\
         - fortune: 1-2 sentences, max ~35 words, mysterious-but-kind\n\
         - suggestion: 3-10 words, tiny action\n\
         - lucky: a color OR number",
        prompt.mood, prompt.symbol, prompt.question
    )
}

#[async_trait::async_trait]
impl FortuneGenerator for RemoteFortuneClient {
    async fn generate(&self, prompt: &FortunePrompt) -> Result<FortuneText, RemoteError> {
        let (api_key, base_url) = self.credentials().ok_or(RemoteError::MissingCredentials)?;
        let url = Self::completions_url(base_url);

        tracing::debug!(
            "Requesting fortune from {} (model: {}, mood: {}, symbol: {})",
            url,
            self.config.model,
            prompt.mood,
            prompt.symbol
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.build_request(prompt))
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await
            .map_err(RemoteError::Transport)?;

        let status = response.status();
        tracing::debug!("Remote response status: {}", status);

        if !status.is_success() {
            return Err(RemoteError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(RemoteError::Transport)?;
        decode_completion(&body)
    }
}
