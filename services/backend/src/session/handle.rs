//! services/backend/src/session/handle.rs
//!
//! The session facade the UI drives. It owns the authentication state
//! machine, the cached view of the stored collections, and the lifecycle of
//! the background refresh task. Mutations call the store first and patch
//! the cache only after the store confirms.

use crate::error::BackendError;
use crate::session::compare::CompareList;
use crate::session::refresh_task::{refresh_once, refresh_process};
use crate::session::state::{AppState, AuthState, CollectionCache};
use chrono::{NaiveDate, Utc};
use rentflow_core::domain::{
    belongs_to_viewer, Booking, BookingStatus, GuestCount, Inquiry, InquiryStatus,
    InteractionKind, Message, NewUser, Property, Stats, User, UserRole,
};
use rentflow_core::ports::PortError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

//=========================================================================================
// AppSession
//=========================================================================================

/// One user's live view of the marketplace.
///
/// The session starts Anonymous. A successful `login` or `signup` fills the
/// cache and starts the refresh task; `logout` stops the task and empties
/// the cache. All reads are served from the cache, never from the store
/// directly.
pub struct AppSession {
    app_state: Arc<AppState>,
    cache: Arc<Mutex<CollectionCache>>,
    auth: AuthState,
    compare: CompareList,
    refresh_token: CancellationToken,
    refresh_handle: Option<JoinHandle<()>>,
}

impl AppSession {
    /// Creates a new, signed-out session.
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self {
            app_state,
            cache: Arc::new(Mutex::new(CollectionCache::default())),
            auth: AuthState::Anonymous,
            compare: CompareList::new(),
            refresh_token: CancellationToken::new(),
            refresh_handle: None,
        }
    }

    //=====================================================================================
    // Authentication
    //=====================================================================================

    pub fn current_user(&self) -> Option<&User> {
        match &self.auth {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth, AuthState::Authenticated(_))
    }

    /// Signs an existing user in. On failure the session stays Anonymous
    /// and the error is returned to the caller alone.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, BackendError> {
        let user = self
            .app_state
            .store
            .authenticate_user(email, password)
            .await?;
        self.enter_authenticated(user.clone()).await;
        Ok(user)
    }

    /// Registers a new account and signs it in.
    pub async fn signup(&mut self, new_user: NewUser) -> Result<User, BackendError> {
        let user = self.app_state.store.create_user(new_user).await?;
        self.enter_authenticated(user.clone()).await;
        Ok(user)
    }

    /// Ends the session: stops the refresh task, clears the cached view,
    /// and returns to Anonymous.
    pub async fn logout(&mut self) {
        self.stop_refresh_task().await;
        self.auth = AuthState::Anonymous;
        self.compare.clear();
        *self.cache.lock().await = CollectionCache::default();
        info!("Session ended.");
    }

    async fn enter_authenticated(&mut self, user: User) {
        // A re-login replaces the previous session's refresh task.
        self.stop_refresh_task().await;

        info!("User {} signed in.", user.id);
        self.auth = AuthState::Authenticated(user);

        // The first fetch happens inline; a failure here is the same as a
        // failed poll, so the session still comes up, just with an empty view.
        if let Err(e) = refresh_once(&self.app_state, &self.cache).await {
            warn!("Initial collection fetch failed: {}", e);
        }

        let token = CancellationToken::new();
        let handle = tokio::spawn(refresh_process(
            Arc::clone(&self.app_state),
            Arc::clone(&self.cache),
            token.clone(),
        ));
        self.refresh_token = token;
        self.refresh_handle = Some(handle);
    }

    async fn stop_refresh_task(&mut self) {
        self.refresh_token.cancel();
        if let Some(handle) = self.refresh_handle.take() {
            let _ = handle.await;
        }
    }

    fn viewer(&self) -> Result<&User, BackendError> {
        self.current_user().ok_or(BackendError::NotSignedIn)
    }

    //=====================================================================================
    // Cached Reads
    //=====================================================================================

    pub async fn properties(&self) -> Vec<Property> {
        self.cache.lock().await.properties.clone()
    }

    pub async fn inquiries(&self) -> Vec<Inquiry> {
        self.cache.lock().await.inquiries.clone()
    }

    pub async fn bookings(&self) -> Vec<Booking> {
        self.cache.lock().await.bookings.clone()
    }

    pub async fn stats(&self) -> Stats {
        self.cache.lock().await.stats.clone()
    }

    /// Re-fetches every collection immediately, outside the timer.
    pub async fn refresh(&self) -> Result<(), BackendError> {
        refresh_once(&self.app_state, &self.cache).await?;
        Ok(())
    }

    //=====================================================================================
    // Mutations (confirm, then patch the cache)
    //=====================================================================================

    /// Publishes a new listing. The confirmed record goes to the front of
    /// the cached list, matching the store's ordering.
    pub async fn add_property(&self, property: Property) -> Result<Property, BackendError> {
        let created = self.app_state.store.add_property(property).await?;

        self.cache.lock().await.properties.insert(0, created.clone());

        if let Some(user) = self.current_user() {
            self.record_interaction(
                &user.id,
                InteractionKind::ViewProperty,
                &format!("Added property {}", created.title),
            )
            .await;
        }
        Ok(created)
    }

    /// Removes a listing. Inquiries and bookings that reference it stay
    /// behind as orphans.
    pub async fn delete_property(&self, property_id: &str) -> Result<(), BackendError> {
        self.app_state.store.delete_property(property_id).await?;
        self.cache
            .lock()
            .await
            .properties
            .retain(|p| p.id != property_id);
        Ok(())
    }

    /// Opens a new inquiry thread against a listing.
    pub async fn add_inquiry(&self, inquiry: Inquiry) -> Result<Inquiry, BackendError> {
        let created = self.app_state.store.add_inquiry(inquiry).await?;

        self.cache.lock().await.inquiries.insert(0, created.clone());

        if let Some(user) = self.current_user() {
            self.record_interaction(
                &user.id,
                InteractionKind::AiQuery,
                &format!("Inquiry sent for property {}", created.property_id),
            )
            .await;
        }
        Ok(created)
    }

    /// Appends a message to an inquiry thread. An owner reply marks the
    /// thread REPLIED; a tenant message puts it back to PENDING.
    pub async fn send_message(
        &self,
        inquiry_id: &str,
        text: &str,
    ) -> Result<Inquiry, BackendError> {
        let user = self.viewer()?;
        let (sender_id, role) = (user.id.clone(), user.role);

        let target = {
            let cache = self.cache.lock().await;
            cache
                .inquiries
                .iter()
                .find(|i| i.id == inquiry_id)
                .cloned()
        };
        let mut updated = target.ok_or_else(|| PortError::NotFound(inquiry_id.to_string()))?;

        updated.status = match role {
            UserRole::Owner => InquiryStatus::Replied,
            UserRole::Tenant => InquiryStatus::Pending,
        };
        updated.last_updated = Utc::now();
        updated.messages.push(Message {
            id: Uuid::new_v4().to_string(),
            sender_id,
            text: text.to_string(),
            timestamp: Utc::now(),
        });

        let confirmed = self.app_state.store.update_inquiry(updated).await?;

        let mut cache = self.cache.lock().await;
        if let Some(slot) = cache.inquiries.iter_mut().find(|i| i.id == inquiry_id) {
            *slot = confirmed.clone();
        }
        Ok(confirmed)
    }

    /// Files a stay request for the signed-in tenant. The booking starts
    /// PENDING and unread, so it surfaces on the owner's side.
    pub async fn book_property(
        &self,
        property_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        guests: GuestCount,
    ) -> Result<Booking, BackendError> {
        let tenant_id = self.viewer()?.id.clone();

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            property_id: property_id.to_string(),
            tenant_id: tenant_id.clone(),
            start_date,
            end_date,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
            is_read: false,
            guests: Some(guests),
        };

        let created = self.app_state.store.create_booking(booking).await?;

        self.cache.lock().await.bookings.push(created.clone());

        self.record_interaction(
            &tenant_id,
            InteractionKind::BookingRequest,
            &format!("Booking req for {}", property_id),
        )
        .await;
        Ok(created)
    }

    /// Applies the owner's decision to a stay request. The patched booking
    /// comes back unread so the tenant notices the change.
    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<(), BackendError> {
        self.app_state
            .store
            .update_booking_status(booking_id, status)
            .await?;

        let mut cache = self.cache.lock().await;
        if let Some(booking) = cache.bookings.iter_mut().find(|b| b.id == booking_id) {
            booking.status = status;
            booking.is_read = false;
        }
        Ok(())
    }

    /// Clears the unread flag on everything currently visible to the viewer.
    pub async fn mark_notifications_read(&self) -> Result<(), BackendError> {
        let user = self.viewer()?;
        let (user_id, role) = (user.id.clone(), user.role);

        self.app_state
            .store
            .mark_all_notifications_read(&user_id, role)
            .await?;

        let mut cache = self.cache.lock().await;
        let CollectionCache {
            properties,
            bookings,
            ..
        } = &mut *cache;
        for booking in bookings.iter_mut() {
            if belongs_to_viewer(booking, &user_id, role, properties) {
                booking.is_read = true;
            }
        }
        Ok(())
    }

    /// Records a user action in the audit log. A quiet no-op when signed out.
    pub async fn log_interaction(&self, action: InteractionKind, details: &str) {
        if let Some(user) = self.current_user() {
            self.record_interaction(&user.id, action, details).await;
        }
    }

    // Audit writes never fail the user action they ride on.
    async fn record_interaction(&self, user_id: &str, action: InteractionKind, details: &str) {
        if let Err(e) = self
            .app_state
            .store
            .log_interaction(user_id, action, details)
            .await
        {
            warn!("Failed to record interaction: {}", e);
        }
    }

    //=====================================================================================
    // Derived Views
    //=====================================================================================

    /// The viewer's bookings, newest first. Empty when signed out.
    pub async fn notifications(&self) -> Vec<Booking> {
        let user = match self.current_user() {
            Some(user) => user,
            None => return Vec::new(),
        };

        let cache = self.cache.lock().await;
        let mut visible: Vec<Booking> = cache
            .bookings
            .iter()
            .filter(|b| belongs_to_viewer(b, &user.id, user.role, &cache.properties))
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        visible
    }

    /// How many visible bookings still carry an unacknowledged status change.
    pub async fn unread_count(&self) -> usize {
        let user = match self.current_user() {
            Some(user) => user,
            None => return 0,
        };

        let cache = self.cache.lock().await;
        cache
            .bookings
            .iter()
            .filter(|b| !b.is_read && belongs_to_viewer(b, &user.id, user.role, &cache.properties))
            .count()
    }

    //=====================================================================================
    // Comparison Basket
    //=====================================================================================

    /// Adds a listing to the comparison basket. Returns false when the
    /// basket is already full.
    pub fn add_to_compare(&mut self, property: Property) -> bool {
        self.compare.add(property)
    }

    pub fn remove_from_compare(&mut self, property_id: &str) {
        self.compare.remove(property_id);
    }

    pub fn clear_compare(&mut self) {
        self.compare.clear();
    }

    pub fn compare_list(&self) -> &[Property] {
        self.compare.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{JsonStoreAdapter, OfflineAssistAdapter, StoreOptions};
    use crate::config::Config;
    // The store fixture is a concrete adapter, so the trait has to be in scope.
    use rentflow_core::ports::MarketStore;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::tempdir;

    fn test_config(dir: &Path, refresh: Duration) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            log_level: tracing::Level::INFO,
            gemini_api_key: None,
            gemini_api_base: "http://localhost:0".to_string(),
            copy_model: "test".to_string(),
            qa_model: "test".to_string(),
            scout_model: "test".to_string(),
            counsel_model: "test".to_string(),
            image_model: "test".to_string(),
            refresh_interval: refresh,
        }
    }

    async fn seeded_state(dir: &Path, refresh: Duration) -> Arc<AppState> {
        let store = Arc::new(JsonStoreAdapter::new(StoreOptions::instant(dir)));
        store.init().await.unwrap();

        let offline = Arc::new(OfflineAssistAdapter);
        Arc::new(AppState {
            store,
            config: Arc::new(test_config(dir, refresh)),
            listing_copy: offline.clone(),
            property_qa: offline.clone(),
            location_scout: offline.clone(),
            negotiation: offline.clone(),
            lease_review: offline.clone(),
            market_trends: offline.clone(),
            advisor: offline.clone(),
            image_studio: offline.clone(),
            stats_insight: offline,
        })
    }

    fn listing(id: &str, owner_id: &str, title: &str) -> Property {
        Property {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            description: "Bright corner unit.".to_string(),
            address: "HSR Layout, Bangalore".to_string(),
            price: 38_000,
            bedrooms: 2,
            bathrooms: 2,
            sqft: 1_050,
            images: vec![],
            amenities: vec!["Parking".to_string()],
            status: rentflow_core::domain::PropertyStatus::Available,
            rating: 4.4,
            category: rentflow_core::domain::PropertyCategory::Apartment,
            is_featured: false,
            posted_date: Utc::now(),
            location: None,
        }
    }

    fn inquiry_about(property: &Property, tenant: &User, text: &str) -> Inquiry {
        Inquiry {
            id: Uuid::new_v4().to_string(),
            property_id: property.id.clone(),
            tenant_id: tenant.id.clone(),
            tenant_name: Some(tenant.name.clone()),
            owner_id: property.owner_id.clone(),
            status: InquiryStatus::Pending,
            messages: vec![Message {
                id: Uuid::new_v4().to_string(),
                sender_id: tenant.id.clone(),
                text: text.to_string(),
                timestamp: Utc::now(),
            }],
            last_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn login_fills_the_cache_and_logout_empties_it() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;
        let mut session = AppSession::new(state);

        assert!(!session.is_authenticated());
        let user = session.login("tenant@rentflow.com", "password").await.unwrap();
        assert_eq!(user.role, UserRole::Tenant);
        assert!(session.is_authenticated());

        let properties = session.properties().await;
        assert!(!properties.is_empty());
        assert_eq!(
            session.stats().await.total_properties as usize,
            properties.len()
        );

        session.logout().await;
        assert!(!session.is_authenticated());
        assert!(session.properties().await.is_empty());
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn failed_login_leaves_the_session_anonymous() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;
        let mut session = AppSession::new(state);

        let err = session.login("tenant@rentflow.com", "nope").await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::Port(PortError::InvalidCredentials)
        ));
        assert!(!session.is_authenticated());
        assert!(session.properties().await.is_empty());
    }

    #[tokio::test]
    async fn anonymous_sessions_cannot_act_for_a_user() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;
        let session = AppSession::new(state);

        let err = session.send_message("inq-1", "hello").await.unwrap_err();
        assert!(matches!(err, BackendError::NotSignedIn));

        let err = session
            .book_property(
                "p-1",
                NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
                GuestCount {
                    adults: 2,
                    children: 0,
                    pets: 0,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NotSignedIn));

        assert!(session.notifications().await.is_empty());
        assert_eq!(session.unread_count().await, 0);
    }

    #[tokio::test]
    async fn new_listing_is_visible_before_the_next_poll() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;
        let mut session = AppSession::new(state);

        let owner = session.login("owner@rentflow.com", "password").await.unwrap();
        let before = session.properties().await.len();

        let created = session
            .add_property(listing("p-new", &owner.id, "Loft near the metro"))
            .await
            .unwrap();

        let after = session.properties().await;
        assert_eq!(after.len(), before + 1);
        assert_eq!(after[0].id, created.id);

        session.delete_property(&created.id).await.unwrap();
        assert_eq!(session.properties().await.len(), before);
        session.logout().await;
    }

    #[tokio::test]
    async fn inquiry_reply_flips_status_and_keeps_send_order() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;

        let mut tenant_session = AppSession::new(Arc::clone(&state));
        let tenant = tenant_session
            .login("tenant@rentflow.com", "password")
            .await
            .unwrap();

        let properties = tenant_session.properties().await;
        let subject = properties
            .iter()
            .find(|p| p.owner_id == "owner1")
            .expect("seeded owner1 listing");

        let inquiry = tenant_session
            .add_inquiry(inquiry_about(subject, &tenant, "Is parking included?"))
            .await
            .unwrap();
        assert_eq!(inquiry.status, InquiryStatus::Pending);
        assert_eq!(inquiry.messages.len(), 1);

        // The owner signs in afterwards, so the thread is in their snapshot.
        let mut owner_session = AppSession::new(Arc::clone(&state));
        owner_session
            .login("owner@rentflow.com", "password")
            .await
            .unwrap();

        let replied = owner_session
            .send_message(&inquiry.id, "Yes, one covered slot.")
            .await
            .unwrap();
        assert_eq!(replied.status, InquiryStatus::Replied);
        assert_eq!(replied.messages.len(), 2);
        assert_eq!(replied.messages[0].text, "Is parking included?");
        assert_eq!(replied.messages[1].text, "Yes, one covered slot.");

        // A tenant follow-up reopens the thread.
        tenant_session.refresh().await.unwrap();
        let followed_up = tenant_session
            .send_message(&inquiry.id, "Great, and is it gated?")
            .await
            .unwrap();
        assert_eq!(followed_up.status, InquiryStatus::Pending);
        assert_eq!(followed_up.messages.len(), 3);

        tenant_session.logout().await;
        owner_session.logout().await;
    }

    #[tokio::test]
    async fn replying_to_an_unknown_inquiry_is_not_found() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;
        let mut session = AppSession::new(state);
        session.login("owner@rentflow.com", "password").await.unwrap();

        let err = session.send_message("missing", "hello").await.unwrap_err();
        assert!(matches!(err, BackendError::Port(PortError::NotFound(_))));
        session.logout().await;
    }

    #[tokio::test]
    async fn booking_lifecycle_crosses_both_sessions() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;

        let mut tenant_session = AppSession::new(Arc::clone(&state));
        tenant_session
            .login("tenant@rentflow.com", "password")
            .await
            .unwrap();

        let properties = tenant_session.properties().await;
        let subject = properties
            .iter()
            .find(|p| p.owner_id == "owner1")
            .expect("seeded owner1 listing");

        let booking = tenant_session
            .book_property(
                &subject.id,
                NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
                GuestCount {
                    adults: 2,
                    children: 1,
                    pets: 0,
                },
            )
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!booking.is_read);

        // The owner sees the request and confirms it.
        let mut owner_session = AppSession::new(Arc::clone(&state));
        owner_session
            .login("owner@rentflow.com", "password")
            .await
            .unwrap();
        assert_eq!(owner_session.unread_count().await, 1);

        owner_session
            .update_booking_status(&booking.id, BookingStatus::Confirmed)
            .await
            .unwrap();

        // The tenant's next refresh picks up the decision as a fresh
        // notification. The unread flag is one field on the booking, so
        // this has to be observed before either side marks it read.
        tenant_session.refresh().await.unwrap();
        let notifications = tenant_session.notifications().await;
        assert_eq!(notifications[0].id, booking.id);
        assert_eq!(notifications[0].status, BookingStatus::Confirmed);
        assert!(!notifications[0].is_read);
        assert_eq!(tenant_session.unread_count().await, 1);

        tenant_session.mark_notifications_read().await.unwrap();
        assert_eq!(tenant_session.unread_count().await, 0);

        owner_session.mark_notifications_read().await.unwrap();
        assert_eq!(owner_session.unread_count().await, 0);

        tenant_session.logout().await;
        owner_session.logout().await;
    }

    #[tokio::test]
    async fn background_poll_picks_up_outside_writes() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_millis(200)).await;
        let mut session = AppSession::new(Arc::clone(&state));

        let owner = session.login("owner@rentflow.com", "password").await.unwrap();
        let before = session.properties().await.len();

        // Written straight to the store, as another client would.
        state
            .store
            .add_property(listing("p-ext", &owner.id, "Added elsewhere"))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(800)).await;
        let after = session.properties().await;
        assert_eq!(after.len(), before + 1);
        assert_eq!(after[0].id, "p-ext");

        session.logout().await;
    }

    #[tokio::test]
    async fn comparison_basket_caps_at_three() {
        let dir = tempdir().unwrap();
        let state = seeded_state(dir.path(), Duration::from_secs(30)).await;
        let mut session = AppSession::new(state);

        assert!(session.add_to_compare(listing("c1", "o", "A")));
        assert!(session.add_to_compare(listing("c2", "o", "B")));
        assert!(session.add_to_compare(listing("c1", "o", "A again")));
        assert_eq!(session.compare_list().len(), 2);

        assert!(session.add_to_compare(listing("c3", "o", "C")));
        assert!(!session.add_to_compare(listing("c4", "o", "D")));
        assert_eq!(session.compare_list().len(), 3);

        session.remove_from_compare("c2");
        assert_eq!(session.compare_list().len(), 2);
        session.clear_compare();
        assert!(session.compare_list().is_empty());
    }
}
