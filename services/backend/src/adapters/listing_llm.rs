//! services/backend/src/adapters/listing_llm.rs
//!
//! This module contains the adapter for the listing-copy LLM.
//! It implements the `ListingCopyService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use tracing::warn;

use rentflow_core::{
    domain::PropertyCategory,
    ports::{ListingCopyService, PortError, PortResult},
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `ListingCopyService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct GeminiListingAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiListingAdapter {
    /// Creates a new `GeminiListingAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn draft(
        &self,
        title: &str,
        features: &[String],
        category: PropertyCategory,
    ) -> PortResult<String> {
        let prompt = format!(
            "Write a compelling, professional real estate listing description for a {}.\n\
             Title: {}\n\
             Key Features: {}.\n\
             Keep it under 150 words. Highlight the lifestyle benefits.",
            category.as_str(),
            title,
            features.join(", ")
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

        Ok(content.unwrap_or_else(|| "Could not generate description.".to_string()))
    }
}

//=========================================================================================
// `ListingCopyService` Trait Implementation
//=========================================================================================

#[async_trait]
impl ListingCopyService for GeminiListingAdapter {
    async fn generate_description(
        &self,
        title: &str,
        features: &[String],
        category: PropertyCategory,
    ) -> String {
        match self.draft(title, features, category).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Listing copy generation failed: {}", e);
                "Error generating description.".to_string()
            }
        }
    }
}
