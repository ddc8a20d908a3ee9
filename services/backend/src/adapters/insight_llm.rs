//! services/backend/src/adapters/insight_llm.rs
//!
//! This module contains the adapter for the owner-dashboard insight LLM.
//! It implements the `StatsInsightService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use tracing::warn;

use rentflow_core::{
    domain::Stats,
    ports::{PortError, PortResult, StatsInsightService},
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `StatsInsightService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct GeminiInsightAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiInsightAdapter {
    /// Creates a new `GeminiInsightAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn analyze(&self, stats: &Stats) -> PortResult<String> {
        let prompt = format!(
            "Analyze these rental business stats:\n\
             Revenue: ₹{}, Occupancy: {}%.\n\
             Provide 3 strategic insights (Performance, Attention, Action).",
            stats.total_revenue, stats.occupancy_rate
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

        Ok(content.unwrap_or_else(|| "Analysis incomplete.".to_string()))
    }
}

//=========================================================================================
// `StatsInsightService` Trait Implementation
//=========================================================================================

#[async_trait]
impl StatsInsightService for GeminiInsightAdapter {
    async fn portfolio_insights(&self, stats: &Stats) -> String {
        match self.analyze(stats).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Stats insight generation failed: {}", e);
                "Unable to generate insights.".to_string()
            }
        }
    }
}
