//! services/backend/src/session/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use rentflow_core::domain::{Booking, Inquiry, Property, Stats, User};
use rentflow_core::ports::{
    AdvisorService, ImageStudioService, LeaseReviewService, ListingCopyService,
    LocationScoutService, MarketStore, MarketTrendsService, NegotiationService, PropertyQaService,
    StatsInsightService,
};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Sessions)
//=========================================================================================

/// The shared application state, created once at startup and handed to every
/// session. The AI ports are either the live adapters or the offline
/// placeholders, decided at wiring time by the presence of an API key.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MarketStore>,
    pub config: Arc<Config>,
    pub listing_copy: Arc<dyn ListingCopyService>,
    pub property_qa: Arc<dyn PropertyQaService>,
    pub location_scout: Arc<dyn LocationScoutService>,
    pub negotiation: Arc<dyn NegotiationService>,
    pub lease_review: Arc<dyn LeaseReviewService>,
    pub market_trends: Arc<dyn MarketTrendsService>,
    pub advisor: Arc<dyn AdvisorService>,
    pub image_studio: Arc<dyn ImageStudioService>,
    pub stats_insight: Arc<dyn StatsInsightService>,
}

//=========================================================================================
// Session State (Specific to One Signed-In User)
//=========================================================================================

/// The authentication state machine. There is no intermediate state: a
/// failed login or signup leaves the session Anonymous.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Anonymous,
    Authenticated(User),
}

/// The session's local copy of the four stored collections. The refresh task
/// replaces it wholesale; confirmed mutations patch it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionCache {
    pub properties: Vec<Property>,
    pub inquiries: Vec<Inquiry>,
    pub bookings: Vec<Booking>,
    pub stats: Stats,
}
