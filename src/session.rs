//! Per-session context: the derived-table cache and the append-only
//! conversation history. All state lives here explicitly rather than in
//! globals, so the ratio engine stays pure and independently testable.

use crate::engine::{derive_statement, AnchorConfig};
use crate::error::Result;
use crate::report::render_markdown;
use crate::schema::{StatementAnalysis, StatementTable};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    /// Instructional context seeded once at chat start.
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// One interactive session: anchor configuration, a memoized derivation and
/// the conversation so far. Discarded when the session ends; nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    anchors: AnchorConfig,
    cache: Option<(StatementTable, StatementAnalysis)>,
    history: Vec<ChatMessage>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::with_anchors(AnchorConfig::default())
    }

    pub fn with_anchors(anchors: AnchorConfig) -> Self {
        Self {
            anchors,
            cache: None,
            history: Vec::new(),
        }
    }

    pub fn anchors(&self) -> &AnchorConfig {
        &self.anchors
    }

    /// Derive the statement, reusing the cached result when the input is
    /// the exact table analyzed last. Memoization is for responsiveness on
    /// repeated renders and chat turns; recomputation yields bit-identical
    /// output either way.
    pub fn analyze(&mut self, table: &StatementTable) -> Result<&StatementAnalysis> {
        let stale = match &self.cache {
            Some((cached_table, _)) => cached_table != table,
            None => true,
        };

        if stale {
            let analysis = derive_statement(table, &self.anchors)?;
            self.cache = Some((table.clone(), analysis));
        } else {
            debug!("Reusing cached derivation for identical input table");
        }

        Ok(&self.cache.as_ref().unwrap().1)
    }

    /// Seed the chat with the serialized analysis as a one-time context
    /// message. No-op if the history has already been seeded.
    pub fn seed_chat_context(&mut self, analysis: &StatementAnalysis) {
        if !self.history.is_empty() {
            return;
        }
        let context = format!(
            "The user is analyzing the following two-period financial statement:\n\n{}",
            render_markdown(analysis)
        );
        self.history.push(ChatMessage::system(context));
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Record one completed exchange. A new turn is only recorded after
    /// the previous reply (or its failure substitute) is in hand, keeping
    /// the history strictly sequential.
    pub fn record_exchange(&mut self, question: impl Into<String>, reply: impl Into<String>) {
        self.history.push(ChatMessage::user(question));
        self.history.push(ChatMessage::assistant(reply));
    }
}
