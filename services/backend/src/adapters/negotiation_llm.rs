//! services/backend/src/adapters/negotiation_llm.rs
//!
//! This module contains the adapter for the rent-negotiation LLM.
//! It implements the `NegotiationService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use tracing::warn;

use rentflow_core::ports::{NegotiationService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `NegotiationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct GeminiNegotiationAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiNegotiationAdapter {
    /// Creates a new `GeminiNegotiationAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn draft(
        &self,
        property_title: &str,
        listing_price: i64,
        target_price: i64,
        reason: &str,
    ) -> PortResult<String> {
        let prompt = format!(
            "Draft a polite but persuasive message to a landlord to negotiate rent.\n\
             Property: {}\n\
             Listing Price: ₹{}\n\
             Target Price: ₹{}\n\
             Reason: {}\n\
             Keep it professional, respectful, and under 100 words.",
            property_title, listing_price, target_price, reason
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

        Ok(content.unwrap_or_else(|| "Could not draft message.".to_string()))
    }
}

//=========================================================================================
// `NegotiationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl NegotiationService for GeminiNegotiationAdapter {
    async fn draft_message(
        &self,
        property_title: &str,
        listing_price: i64,
        target_price: i64,
        reason: &str,
    ) -> String {
        match self
            .draft(property_title, listing_price, target_price, reason)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Negotiation draft failed: {}", e);
                "Error drafting message.".to_string()
            }
        }
    }
}
