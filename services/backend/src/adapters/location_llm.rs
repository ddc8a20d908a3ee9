//! services/backend/src/adapters/location_llm.rs
//!
//! This module contains the adapter for neighbourhood scouting.
//! It implements the `LocationScoutService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::responses::{CreateResponseArgs, Tool, WebSearchTool},
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use regex::Regex;
use tracing::warn;

use rentflow_core::{
    domain::{GeoPoint, MapSearchResult, SourceLink},
    ports::{LocationScoutService, PortError, PortResult},
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `LocationScoutService` using the Responses API
/// with the web search tool. The instructions steer the model towards ending
/// with Google Maps links, which are then pulled out for the map panel.
#[derive(Clone)]
pub struct GeminiScoutAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiScoutAdapter {
    /// Creates a new `GeminiScoutAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    fn extract_map_links(text: &str) -> Vec<SourceLink> {
        let link_regex = Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").unwrap();
        let mut links = Vec::new();
        for capture in link_regex.captures_iter(text) {
            let uri = capture[2].to_string();
            // Only map destinations belong in the panel; prose citations stay in the text.
            if !uri.contains("google.com/maps") {
                continue;
            }
            if !links.iter().any(|l: &SourceLink| l.uri == uri) {
                links.push(SourceLink {
                    title: capture[1].to_string(),
                    uri,
                });
            }
        }
        links
    }

    async fn scout_area(&self, query: &str, near: Option<GeoPoint>) -> PortResult<MapSearchResult> {
        let mut input = format!("{} location details and nearby amenities on Google Maps", query);
        if let Some(point) = near {
            input.push_str(&format!(
                " (around latitude {}, longitude {})",
                point.lat, point.lng
            ));
        }

        let request = CreateResponseArgs::default()
            .model(&self.model)
            .instructions(
                "Provide a structured summary of the location.\n\
                 Always conclude with a list of direct Google Maps links for key landmarks nearby.",
            )
            .input(input)
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
            return Ok(MapSearchResult {
                text: "No insights found.".to_string(),
                map_links: vec![],
            });
        }

        let map_links = Self::extract_map_links(&text);
        Ok(MapSearchResult { text, map_links })
    }
}

//=========================================================================================
// `LocationScoutService` Trait Implementation
//=========================================================================================

#[async_trait]
impl LocationScoutService for GeminiScoutAdapter {
    async fn scout(&self, query: &str, near: Option<GeoPoint>) -> MapSearchResult {
        match self.scout_area(query, near).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Location scout failed: {}", e);
                MapSearchResult {
                    text: "Unable to retrieve location data.".to_string(),
                    map_links: vec![],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_google_maps_links() {
        let text = "Koramangala is a lively area ([news](https://news.example/k)). \
                    Landmarks: [Forum Mall](https://www.google.com/maps/place/Forum+Mall), \
                    [Sony Signal](https://www.google.com/maps/place/Sony+Signal).";

        let links = GeminiScoutAdapter::extract_map_links(text);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Forum Mall");
        assert!(links[0].uri.contains("google.com/maps"));
        assert_eq!(links[1].title, "Sony Signal");
    }

    #[test]
    fn repeated_landmarks_appear_once() {
        let text = "[Forum Mall](https://www.google.com/maps/place/Forum+Mall) and again \
                    [Forum Mall](https://www.google.com/maps/place/Forum+Mall).";

        assert_eq!(GeminiScoutAdapter::extract_map_links(text).len(), 1);
    }
}
