use crate::error::{Result, StatementError};
use crate::llm::types::*;
use log::debug;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model, matching what the hosted analyzer uses.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Read the API key from `GEMINI_API_KEY`. Checked before any network
    /// call so a missing credential surfaces as a setup error, not a
    /// request failure.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| StatementError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(StatementError::MissingApiKey);
        }
        Ok(Self::new(api_key))
    }

    pub(crate) async fn generate_content(
        &self,
        model: &str,
        system_prompt: &str,
        messages: Vec<Content>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: messages,
            system_instruction: Some(Content::user(system_prompt)),
            generation_config: None,
        };

        debug!("Submitting generation request to model {}", model);

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(StatementError::ServiceError(format!(
                "status {}: {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| StatementError::ServiceError("No candidates returned".to_string()))?
            .first()
            .ok_or_else(|| StatementError::ServiceError("Empty candidates list".to_string()))?
            .content
            .parts
            .first()
            .ok_or_else(|| StatementError::ServiceError("No parts in content".to_string()))?
            .clone();

        let Part::Text { text } = part;
        Ok(text)
    }
}
