//! crates/rentflow_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like file stores or APIs.

use async_trait::async_trait;
use crate::domain::{
    Booking, BookingStatus, GeoPoint, InlineImage, Inquiry, InteractionKind, MapSearchResult,
    NewUser, Property, PropertyCategory, Stats, TrendSearchResult, User, UserRole,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., filesystem, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Store Port
//=========================================================================================

/// The marketplace repository: typed accessors over the persisted collections.
/// Operations are independent of one another; there are no cross-collection
/// transactions.
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Seeds every collection that has never been written. Idempotent, safe
    /// to call on each startup.
    async fn init(&self) -> PortResult<()>;

    // --- Auth ---
    async fn create_user(&self, new_user: NewUser) -> PortResult<User>;

    async fn authenticate_user(&self, email: &str, password: &str) -> PortResult<User>;

    // --- Collection reads ---
    async fn properties(&self) -> PortResult<Vec<Property>>;

    async fn inquiries(&self) -> PortResult<Vec<Inquiry>>;

    async fn bookings(&self) -> PortResult<Vec<Booking>>;

    async fn stats(&self) -> PortResult<Stats>;

    // --- Properties ---
    async fn add_property(&self, property: Property) -> PortResult<Property>;

    async fn delete_property(&self, property_id: &str) -> PortResult<()>;

    // --- Inquiries ---
    async fn add_inquiry(&self, inquiry: Inquiry) -> PortResult<Inquiry>;

    /// Whole-record replacement by id. The caller supplies the complete
    /// updated inquiry, appended message included.
    async fn update_inquiry(&self, inquiry: Inquiry) -> PortResult<Inquiry>;

    // --- Bookings ---
    /// Stores the booking with `is_read` forced to false.
    async fn create_booking(&self, booking: Booking) -> PortResult<Booking>;

    /// Replaces the status and resets `is_read`, so the change shows up as
    /// a fresh notification.
    async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> PortResult<()>;

    /// Marks every booking visible to this viewer as read.
    async fn mark_all_notifications_read(&self, user_id: &str, role: UserRole) -> PortResult<()>;

    // --- Audit ---
    async fn log_interaction(
        &self,
        user_id: &str,
        action: InteractionKind,
        details: &str,
    ) -> PortResult<()>;
}

//=========================================================================================
// AI Collaborator Ports
//=========================================================================================
//
// These ports are infallible by contract: when the model is unreachable or no
// API key is configured, implementations return fixed placeholder text (or
// None for the image editor) instead of an error. The UI renders whatever
// comes back.

#[async_trait]
pub trait ListingCopyService: Send + Sync {
    /// Drafts listing copy (under 150 words) for a new property.
    async fn generate_description(
        &self,
        title: &str,
        features: &[String],
        category: PropertyCategory,
    ) -> String;
}

#[async_trait]
pub trait PropertyQaService: Send + Sync {
    /// Answers a prospective tenant's question as a virtual leasing agent
    /// grounded in the property's listed details.
    async fn answer_question(&self, property: &Property, question: &str) -> String;
}

#[async_trait]
pub trait LocationScoutService: Send + Sync {
    /// Summarizes a location and collects map links for nearby landmarks.
    async fn scout(&self, query: &str, near: Option<GeoPoint>) -> MapSearchResult;
}

#[async_trait]
pub trait NegotiationService: Send + Sync {
    /// Drafts a polite rent-negotiation message to a landlord.
    async fn draft_message(
        &self,
        property_title: &str,
        listing_price: i64,
        target_price: i64,
        reason: &str,
    ) -> String;
}

#[async_trait]
pub trait LeaseReviewService: Send + Sync {
    /// Reviews a lease clause for tenant red flags.
    async fn review_clause(&self, clause: &str) -> String;
}

#[async_trait]
pub trait MarketTrendsService: Send + Sync {
    /// Web-grounded rental market search with source citations.
    async fn trend_search(&self, query: &str) -> TrendSearchResult;
}

#[async_trait]
pub trait AdvisorService: Send + Sync {
    /// Long-form advisory answer from the reasoning model.
    async fn market_brief(&self, query: &str) -> String;
}

#[async_trait]
pub trait ImageStudioService: Send + Sync {
    /// Describes room type, style, and key features of a listing photo.
    async fn analyze_image(&self, image: &InlineImage) -> String;

    /// Applies an edit prompt to a listing photo. Returns a data URL for
    /// the edited image, or None when editing is unavailable.
    async fn edit_image(&self, image: &InlineImage, prompt: &str) -> Option<String>;
}

#[async_trait]
pub trait StatsInsightService: Send + Sync {
    /// Turns the owner-dashboard numbers into three strategic insights.
    async fn portfolio_insights(&self, stats: &Stats) -> String;
}
