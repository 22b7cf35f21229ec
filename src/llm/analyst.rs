use crate::error::{Result, StatementError};
use crate::llm::client::{GeminiClient, DEFAULT_MODEL};
use crate::llm::prompts::{CHAT_SYSTEM_PROMPT, COMMENTARY_DATA_HEADER, COMMENTARY_SYSTEM_PROMPT};
use crate::llm::types::Content;
use crate::report::render_markdown;
use crate::schema::StatementAnalysis;
use crate::session::ChatMessage;
use log::info;

/// The AI collaborator behind one narrow interface: a single-shot
/// commentary request and `send_conversation` (full ordered history plus
/// the new message in, one text reply out). Provider-specific session
/// objects stay behind this adapter.
pub struct FinancialAnalyst {
    client: GeminiClient,
    model: String,
}

impl FinancialAnalyst {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Request narrative commentary for a derived analysis. The full
    /// serialized table and liquidity metrics are submitted as a single
    /// generation request under the analyst persona.
    pub async fn commentary(&self, analysis: &StatementAnalysis) -> Result<String> {
        let report = render_markdown(analysis);
        let prompt = format!("{}\n\n{}", COMMENTARY_DATA_HEADER, report);

        info!("Requesting AI commentary for {} rows", analysis.table.len());

        self.client
            .generate_content(&self.model, COMMENTARY_SYSTEM_PROMPT, vec![Content::user(prompt)])
            .await
    }

    /// Send one chat turn: the accumulated history followed by the new
    /// user message. The caller records the reply before submitting the
    /// next turn.
    pub async fn send_conversation(
        &self,
        history: &[ChatMessage],
        new_message: &str,
    ) -> Result<String> {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(new_message));

        let reply = self
            .client
            .generate_content(&self.model, CHAT_SYSTEM_PROMPT, contents)
            .await?;

        let reply = reply.trim();
        if reply.is_empty() {
            return Err(StatementError::ServiceError(
                "Model returned an empty reply".to_string(),
            ));
        }
        Ok(reply.to_string())
    }
}

/// Convert a failure into the inline string shown in place of the reply.
/// Service and configuration failures never terminate the session.
pub fn inline_error_message(err: &StatementError) -> String {
    match err {
        StatementError::MissingApiKey => {
            "AI features are disabled: set GEMINI_API_KEY to enable commentary and chat."
                .to_string()
        }
        other => format!(
            "The AI request failed; please check your API key or quota. Details: {}",
            other
        ),
    }
}
