//! services/backend/src/adapters/trends_llm.rs
//!
//! This module contains the adapter for web-grounded rental market search.
//! It implements the `MarketTrendsService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::responses::{CreateResponseArgs, Tool, WebSearchTool},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use regex::Regex;
use tracing::warn;

use rentflow_core::{
    domain::{SourceLink, TrendSearchResult},
    ports::{MarketTrendsService, PortError, PortResult},
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `MarketTrendsService` using the Responses API
/// with the web search tool. Citations are collected from the markdown links
/// the model writes into its answer.
#[derive(Clone)]
pub struct GeminiTrendsAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiTrendsAdapter {
    /// Creates a new `GeminiTrendsAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    fn extract_sources(text: &str) -> Vec<SourceLink> {
        // Markdown links like [RBI housing index](https://example.org/...)
        let link_regex = Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").unwrap();
        let mut sources = Vec::new();
        for capture in link_regex.captures_iter(text) {
            let source = SourceLink {
                title: capture[1].to_string(),
                uri: capture[2].to_string(),
            };
            if !sources.iter().any(|s: &SourceLink| s.uri == source.uri) {
                sources.push(source);
            }
        }
        sources
    }

    async fn search(&self, query: &str) -> PortResult<TrendSearchResult> {
        let request = CreateResponseArgs::default()
            .model(&self.model)
            .input(query.to_string())
            .tools(vec![Tool::WebSearch(WebSearchTool::default())])
            .max_output_tokens(1500u32)
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
            return Ok(TrendSearchResult {
                text: "No results found.".to_string(),
                sources: vec![],
            });
        }

        let sources = Self::extract_sources(&text);
        Ok(TrendSearchResult { text, sources })
    }
}

//=========================================================================================
// `MarketTrendsService` Trait Implementation
//=========================================================================================

#[async_trait]
impl MarketTrendsService for GeminiTrendsAdapter {
    async fn trend_search(&self, query: &str) -> TrendSearchResult {
        match self.search(query).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Trend search failed: {}", e);
                TrendSearchResult {
                    text: "Error fetching trends.".to_string(),
                    sources: vec![],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_markdown_links_without_duplicates() {
        let text = "Rents in Pune rose 8% ([Mint](https://mint.example/rents)). \
                    See also [Mint](https://mint.example/rents) and \
                    [RBI data](https://rbi.example/index).";

        let sources = GeminiTrendsAdapter::extract_sources(text);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "Mint");
        assert_eq!(sources[0].uri, "https://mint.example/rents");
        assert_eq!(sources[1].title, "RBI data");
    }

    #[test]
    fn plain_text_yields_no_sources() {
        assert!(GeminiTrendsAdapter::extract_sources("No links here.").is_empty());
    }
}
