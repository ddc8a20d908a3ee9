//! services/backend/src/adapters/offline.rs
//!
//! Placeholder implementations of every AI port, wired in when no API key is
//! configured. Each method returns the fixed copy the UI shows in place of a
//! model answer, so the rest of the app never has to branch on key presence.

use async_trait::async_trait;

use rentflow_core::{
    domain::{
        GeoPoint, InlineImage, MapSearchResult, Property, PropertyCategory, Stats,
        TrendSearchResult,
    },
    ports::{
        AdvisorService, ImageStudioService, LeaseReviewService, ListingCopyService,
        LocationScoutService, MarketTrendsService, NegotiationService, PropertyQaService,
        StatsInsightService,
    },
};

/// The no-key stand-in for all AI collaborator ports.
#[derive(Clone, Copy, Default)]
pub struct OfflineAssistAdapter;

#[async_trait]
impl ListingCopyService for OfflineAssistAdapter {
    async fn generate_description(
        &self,
        _title: &str,
        _features: &[String],
        _category: PropertyCategory,
    ) -> String {
        "AI description unavailable (Missing API Key).".to_string()
    }
}

#[async_trait]
impl PropertyQaService for OfflineAssistAdapter {
    async fn answer_question(&self, _property: &Property, _question: &str) -> String {
        "AI Assistant unavailable.".to_string()
    }
}

#[async_trait]
impl LocationScoutService for OfflineAssistAdapter {
    async fn scout(&self, _query: &str, _near: Option<GeoPoint>) -> MapSearchResult {
        MapSearchResult {
            text: "AI Maps unavailable.".to_string(),
            map_links: vec![],
        }
    }
}

#[async_trait]
impl NegotiationService for OfflineAssistAdapter {
    async fn draft_message(
        &self,
        _property_title: &str,
        _listing_price: i64,
        _target_price: i64,
        _reason: &str,
    ) -> String {
        "Negotiation tool unavailable.".to_string()
    }
}

#[async_trait]
impl LeaseReviewService for OfflineAssistAdapter {
    async fn review_clause(&self, _clause: &str) -> String {
        "Legal tool unavailable.".to_string()
    }
}

#[async_trait]
impl MarketTrendsService for OfflineAssistAdapter {
    async fn trend_search(&self, _query: &str) -> TrendSearchResult {
        TrendSearchResult {
            text: "Search unavailable.".to_string(),
            sources: vec![],
        }
    }
}

#[async_trait]
impl AdvisorService for OfflineAssistAdapter {
    async fn market_brief(&self, _query: &str) -> String {
        "Advisor unavailable.".to_string()
    }
}

#[async_trait]
impl ImageStudioService for OfflineAssistAdapter {
    async fn analyze_image(&self, _image: &InlineImage) -> String {
        "Analysis unavailable.".to_string()
    }

    async fn edit_image(&self, _image: &InlineImage, _prompt: &str) -> Option<String> {
        None
    }
}

#[async_trait]
impl StatsInsightService for OfflineAssistAdapter {
    async fn portfolio_insights(&self, _stats: &Stats) -> String {
        "Insights unavailable.".to_string()
    }
}
