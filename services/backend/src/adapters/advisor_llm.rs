//! services/backend/src/adapters/advisor_llm.rs
//!
//! This module contains the adapter for the long-form real estate advisor.
//! It implements the `AdvisorService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::responses::CreateResponseArgs,
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use tracing::warn;

use rentflow_core::ports::{AdvisorService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `AdvisorService` using an OpenAI-compatible LLM.
/// Uses the Responses API against the reasoning model with a generous output
/// budget, since advisor answers run long.
#[derive(Clone)]
pub struct GeminiAdvisorAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiAdvisorAdapter {
    /// Creates a new `GeminiAdvisorAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn advise(&self, query: &str) -> PortResult<String> {
        let request = CreateResponseArgs::default()
            .model(&self.model)
            .input(query.to_string())
            .max_output_tokens(4000u32)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .responses()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let text = response.output_text().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok("I couldn't generate a detailed analysis.".to_string());
        }
        Ok(text)
    }
}

//=========================================================================================
// `AdvisorService` Trait Implementation
//=========================================================================================

#[async_trait]
impl AdvisorService for GeminiAdvisorAdapter {
    async fn market_brief(&self, query: &str) -> String {
        match self.advise(query).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Advisor request failed: {}", e);
                "Expert Advisor is currently taking a break.".to_string()
            }
        }
    }
}
