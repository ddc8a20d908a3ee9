//! services/backend/src/adapters/qa_llm.rs
//!
//! This module contains the adapter for the property question-answering LLM.
//! It implements the `PropertyQaService` port from the `core` crate.

const CONTEXT_TEMPLATE: &str = r#"You are a helpful virtual leasing agent for the property "{title}".
Details:
- Price: ₹{price}/month
- Address: {address}
- Size: {sqft} sqft, {bedrooms} Beds
- Amenities: {amenities}
- Description: {description}
User Question: "{question}""#;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use tracing::warn;

use rentflow_core::{
    domain::Property,
    ports::{PortError, PortResult, PropertyQaService},
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `PropertyQaService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct GeminiQaAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiQaAdapter {
    /// Creates a new `GeminiQaAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn ask(&self, property: &Property, question: &str) -> PortResult<String> {
        let context = CONTEXT_TEMPLATE
            .replace("{title}", &property.title)
            .replace("{price}", &property.price.to_string())
            .replace("{address}", &property.address)
            .replace("{sqft}", &property.sqft.to_string())
            .replace("{bedrooms}", &property.bedrooms.to_string())
            .replace("{amenities}", &property.amenities.join(", "))
            .replace("{description}", &property.description)
            .replace("{question}", question);

        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(context)
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

        Ok(content.unwrap_or_else(|| "I'm not sure, please contact the owner.".to_string()))
    }
}

//=========================================================================================
// `PropertyQaService` Trait Implementation
//=========================================================================================

#[async_trait]
impl PropertyQaService for GeminiQaAdapter {
    /// Answers a prospective tenant's question grounded in the listing details.
    async fn answer_question(&self, property: &Property, question: &str) -> String {
        match self.ask(property, question).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Property assistant failed: {}", e);
                "I'm having trouble connecting right now.".to_string()
            }
        }
    }
}
