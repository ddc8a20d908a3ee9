//! services/backend/src/adapters/lease_llm.rs
//!
//! This module contains the adapter for the lease-review LLM.
//! It implements the `LeaseReviewService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use tracing::warn;

use rentflow_core::ports::{LeaseReviewService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `LeaseReviewService` using an OpenAI-compatible LLM.
/// Runs on the reasoning model; lease language rewards the extra care.
#[derive(Clone)]
pub struct GeminiLeaseAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiLeaseAdapter {
    /// Creates a new `GeminiLeaseAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn review(&self, clause: &str) -> PortResult<String> {
        let prompt = format!(
            "Review this lease clause for red flags or unusual terms for a tenant in India:\n\
             \"{}\"\n\
             Identify any risks politely. If safe, say \"Looks standard.\"",
            clause
        );

        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty());

        Ok(content.unwrap_or_else(|| "Could not review terms.".to_string()))
    }
}

//=========================================================================================
// `LeaseReviewService` Trait Implementation
//=========================================================================================

#[async_trait]
impl LeaseReviewService for GeminiLeaseAdapter {
    async fn review_clause(&self, clause: &str) -> String {
        match self.review(clause).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Lease review failed: {}", e);
                "Error reviewing terms.".to_string()
            }
        }
    }
}
