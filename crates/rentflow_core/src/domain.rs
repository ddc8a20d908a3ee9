//! crates/rentflow_core/src/domain.rs
//!
//! Defines the pure, core data structures for the marketplace.
//! Serde layouts (camelCase keys, UPPERCASE enum values) match the JSON
//! blobs the client already persists, so existing data stays readable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Owner,
    Tenant,
}

// Represents a user - used throughout the app. Credential material never
// leaves the store, so there is no password field here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    pub joined_date: DateTime<Utc>,
}

/// Signup payload. The plain password is hashed by the store and discarded.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyStatus {
    Available,
    Rented,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyCategory {
    Apartment,
    House,
    Villa,
    Commercial,
    Land,
}

impl PropertyCategory {
    /// The stored spelling, also used when rendering the category into
    /// model prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "APARTMENT",
            PropertyCategory::House => "HOUSE",
            PropertyCategory::Villa => "VILLA",
            PropertyCategory::Commercial => "COMMERCIAL",
            PropertyCategory::Land => "LAND",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A rental listing. Created whole and deleted whole, never field-updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    /// Monthly rent in whole rupees.
    pub price: i64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub sqft: u32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub status: PropertyStatus,
    pub rating: f64,
    pub category: PropertyCategory,
    #[serde(default)]
    pub is_featured: bool,
    pub posted_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InquiryStatus {
    Pending,
    Replied,
    Closed,
    Accepted,
    Declined,
}

/// A single message inside an inquiry thread. Immutable once sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A tenant-to-owner conversation about one property. Messages are
/// append-only and kept in send order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub property_id: String,
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    pub owner_id: String,
    pub status: InquiryStatus,
    pub messages: Vec<Message>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Declined,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCount {
    pub adults: u8,
    pub children: u8,
    pub pets: u8,
}

/// A stay request. Every status change resets `is_read` so the affected
/// side sees a fresh notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub tenant_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<GuestCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub name: String,
    pub value: i64,
}

/// Owner-dashboard headline numbers. Incrementally maintained counters,
/// never recomputed from the collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_revenue: i64,
    pub occupancy_rate: u32,
    pub active_inquiries: u32,
    pub total_properties: u32,
    pub monthly_revenue_data: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionKind {
    ViewProperty,
    ClickMap,
    AiQuery,
    BookingRequest,
}

/// Append-only audit entry. Written on user actions, never read back by
/// application logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionLog {
    pub id: String,
    pub user_id: String,
    pub action: InteractionKind,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// A citation link extracted from a grounded model answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub uri: String,
}

/// Location-scout answer: summary text plus landmark map links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSearchResult {
    pub text: String,
    pub map_links: Vec<SourceLink>,
}

/// Web-grounded market answer with its source citations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSearchResult {
    pub text: String,
    pub sources: Vec<SourceLink>,
}

/// Raw image handed to the vision features.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// The single ownership rule for booking notifications: owners see bookings
/// against properties they own, tenants see their own bookings. Owner
/// visibility cross-references the property list because bookings do not
/// carry an owner id.
pub fn belongs_to_viewer(
    booking: &Booking,
    user_id: &str,
    role: UserRole,
    properties: &[Property],
) -> bool {
    match role {
        UserRole::Owner => properties
            .iter()
            .any(|p| p.id == booking.property_id && p.owner_id == user_id),
        UserRole::Tenant => booking.tenant_id == user_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: &str, owner_id: &str) -> Property {
        Property {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            title: "2BHK in Andheri".to_string(),
            description: String::new(),
            address: "Andheri West, Mumbai".to_string(),
            price: 45_000,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 950,
            images: vec![],
            amenities: vec![],
            status: PropertyStatus::Available,
            rating: 4.5,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: Utc::now(),
            location: None,
        }
    }

    fn booking(property_id: &str, tenant_id: &str) -> Booking {
        Booking {
            id: "bk1".to_string(),
            property_id: property_id.to_string(),
            tenant_id: tenant_id.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
            is_read: false,
            guests: None,
        }
    }

    #[test]
    fn owner_sees_bookings_for_owned_properties_only() {
        let props = vec![property("p1", "owner1"), property("p2", "owner2")];
        let b = booking("p1", "tenant1");

        assert!(belongs_to_viewer(&b, "owner1", UserRole::Owner, &props));
        assert!(!belongs_to_viewer(&b, "owner2", UserRole::Owner, &props));
    }

    #[test]
    fn owner_does_not_see_bookings_for_deleted_properties() {
        // The booking references a property that is no longer listed.
        let props = vec![property("p2", "owner1")];
        let b = booking("p1", "tenant1");

        assert!(!belongs_to_viewer(&b, "owner1", UserRole::Owner, &props));
    }

    #[test]
    fn tenant_sees_own_bookings_regardless_of_property() {
        let b = booking("p1", "tenant1");

        assert!(belongs_to_viewer(&b, "tenant1", UserRole::Tenant, &[]));
        assert!(!belongs_to_viewer(&b, "tenant2", UserRole::Tenant, &[]));
    }

    #[test]
    fn enum_values_keep_the_stored_spelling() {
        let role = serde_json::to_string(&UserRole::Owner).unwrap();
        assert_eq!(role, "\"OWNER\"");

        let action = serde_json::to_string(&InteractionKind::BookingRequest).unwrap();
        assert_eq!(action, "\"BOOKING_REQUEST\"");

        let status: BookingStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }

    #[test]
    fn property_keys_are_camel_case() {
        let json = serde_json::to_string(&property("p1", "owner1")).unwrap();
        assert!(json.contains("\"ownerId\""));
        assert!(json.contains("\"isFeatured\""));
        assert!(json.contains("\"postedDate\""));
        // Absent location is omitted, not written as null.
        assert!(!json.contains("location"));
    }
}
