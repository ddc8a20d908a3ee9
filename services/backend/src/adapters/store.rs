//! services/backend/src/adapters/store.rs
//!
//! This module contains the file-backed store adapter, the concrete
//! implementation of the `MarketStore` port from the `core` crate. Each
//! collection lives in its own pretty-printed JSON file under the data
//! directory; the files are the only ground truth, there is no in-memory
//! cache.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use rentflow_core::domain::{
    belongs_to_viewer, Booking, BookingStatus, Inquiry, InteractionKind, InteractionLog, NewUser,
    Property, Stats, User, UserRole,
};
use rentflow_core::ports::{MarketStore, PortError, PortResult};

use super::seed;

//=========================================================================================
// Collections and Options
//=========================================================================================

/// The six persisted collections. Fixed names, no versioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Properties,
    Inquiries,
    Users,
    Stats,
    Bookings,
    Logs,
}

impl Collection {
    fn file_name(self) -> &'static str {
        match self {
            Collection::Properties => "properties.json",
            Collection::Inquiries => "inquiries.json",
            Collection::Users => "users.json",
            Collection::Stats => "stats.json",
            Collection::Bookings => "bookings.json",
            Collection::Logs => "logs.json",
        }
    }
}

/// Where the store keeps its files and how long collection reads stall.
///
/// The read delay models the latency of a future network-backed store so UI
/// loading states stay exercised. It applies to reads only; mutations write
/// through immediately.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub data_dir: PathBuf,
    pub read_delay: Duration,
    pub stats_delay: Duration,
}

impl StoreOptions {
    /// Production latencies: 300ms for collection reads, 200ms for stats.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            read_delay: Duration::from_millis(300),
            stats_delay: Duration::from_millis(200),
        }
    }

    /// No simulated latency. Tests use this.
    pub fn instant(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            read_delay: Duration::ZERO,
            stats_delay: Duration::ZERO,
        }
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A file-backed adapter that implements the `MarketStore` port.
pub struct JsonStoreAdapter {
    options: StoreOptions,
    // Serializes every read-modify-write cycle so concurrent mutations
    // cannot drop each other's updates.
    file_lock: Mutex<()>,
}

impl JsonStoreAdapter {
    /// Creates a new `JsonStoreAdapter`. The data directory is created
    /// lazily on first write.
    pub fn new(options: StoreOptions) -> Self {
        Self {
            options,
            file_lock: Mutex::new(()),
        }
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.options.data_dir.join(collection.file_name())
    }

    /// Sleeps before the lock is taken, so concurrent reads overlap instead
    /// of queueing their delays.
    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    async fn is_seeded(&self, collection: Collection) -> PortResult<bool> {
        tokio::fs::try_exists(self.path(collection))
            .await
            .map_err(|e| PortError::Unexpected(format!("stat {}: {}", collection.file_name(), e)))
    }

    /// Reads a whole collection. A file that has never been written reads
    /// as the empty value.
    async fn read_json<T>(&self, collection: Collection) -> PortResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(collection);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => {
                return Err(PortError::Unexpected(format!(
                    "read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&text)
            .map_err(|e| PortError::Unexpected(format!("parse {}: {}", path.display(), e)))
    }

    /// Replaces a whole collection file.
    async fn write_json<T>(&self, collection: Collection, value: &T) -> PortResult<()>
    where
        T: Serialize,
    {
        tokio::fs::create_dir_all(&self.options.data_dir)
            .await
            .map_err(|e| {
                PortError::Unexpected(format!(
                    "create {}: {}",
                    self.options.data_dir.display(),
                    e
                ))
            })?;
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| PortError::Unexpected(format!("encode {}: {}", collection.file_name(), e)))?;
        tokio::fs::write(self.path(collection), text)
            .await
            .map_err(|e| PortError::Unexpected(format!("write {}: {}", collection.file_name(), e)))
    }

    fn hash_password(password: &str) -> PortResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PortError::Unexpected(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

//=========================================================================================
// "Impure" Store Record Structs
//=========================================================================================

/// The persisted user row. Carries the argon2 PHC string under the legacy
/// `password` key; it is stripped off before the record crosses the port
/// boundary.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: String,
    name: String,
    email: String,
    password: String,
    role: UserRole,
    avatar: String,
    joined_date: DateTime<Utc>,
}

impl UserRecord {
    fn to_domain(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar: self.avatar,
            joined_date: self.joined_date,
        }
    }
}

//=========================================================================================
// `MarketStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl MarketStore for JsonStoreAdapter {
    /// Seeds each missing collection independently, so a partially-seeded
    /// data directory heals without clobbering data that already exists.
    async fn init(&self) -> PortResult<()> {
        let _guard = self.file_lock.lock().await;

        if !self.is_seeded(Collection::Properties).await? {
            self.write_json(Collection::Properties, &seed::seed_properties())
                .await?;
        }
        if !self.is_seeded(Collection::Stats).await? {
            self.write_json(Collection::Stats, &seed::seed_stats()).await?;
        }
        if !self.is_seeded(Collection::Users).await? {
            // Every demo account shares one password, so one hash covers
            // them all.
            let demo_hash = Self::hash_password(seed::DEMO_PASSWORD)?;
            let now = Utc::now();
            let users: Vec<UserRecord> = seed::seed_users()
                .into_iter()
                .map(|account| UserRecord {
                    id: account.id.to_string(),
                    name: account.name.to_string(),
                    email: account.email.to_string(),
                    password: demo_hash.clone(),
                    role: account.role,
                    avatar: account.avatar,
                    joined_date: now,
                })
                .collect();
            self.write_json(Collection::Users, &users).await?;
        }
        if !self.is_seeded(Collection::Inquiries).await? {
            self.write_json(Collection::Inquiries, &Vec::<Inquiry>::new())
                .await?;
        }
        if !self.is_seeded(Collection::Bookings).await? {
            self.write_json(Collection::Bookings, &Vec::<Booking>::new())
                .await?;
        }
        if !self.is_seeded(Collection::Logs).await? {
            self.write_json(Collection::Logs, &Vec::<InteractionLog>::new())
                .await?;
        }

        Ok(())
    }

    // --- Auth ---

    async fn create_user(&self, new_user: NewUser) -> PortResult<User> {
        let _guard = self.file_lock.lock().await;
        let mut users: Vec<UserRecord> = self.read_json(Collection::Users).await?;

        // 1. Reject duplicate emails before doing any hashing work.
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(PortError::DuplicateEmail);
        }

        // 2. Hash the password.
        let password = Self::hash_password(&new_user.password)?;

        // 3. Build and append the new record.
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            avatar: format!(
                "https://ui-avatars.com/api/?name={}&background=00B5B7&color=fff",
                new_user.name.replace(' ', "+")
            ),
            name: new_user.name,
            email: new_user.email,
            password,
            role: new_user.role,
            joined_date: Utc::now(),
        };
        users.push(record.clone());
        self.write_json(Collection::Users, &users).await?;

        Ok(record.to_domain())
    }

    async fn authenticate_user(&self, email: &str, password: &str) -> PortResult<User> {
        let _guard = self.file_lock.lock().await;
        let users: Vec<UserRecord> = self.read_json(Collection::Users).await?;

        // 1. Look up the account. An unknown email fails the same way as a
        //    bad password so the error does not reveal which emails exist.
        let record = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(PortError::InvalidCredentials)?;

        // 2. Verify the password against the stored hash.
        let parsed_hash = PasswordHash::new(&record.password)
            .map_err(|e| PortError::Unexpected(format!("Stored hash unreadable: {}", e)))?;
        let valid = Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();
        if !valid {
            return Err(PortError::InvalidCredentials);
        }

        Ok(record.clone().to_domain())
    }

    // --- Collection reads ---

    async fn properties(&self) -> PortResult<Vec<Property>> {
        self.simulate_latency(self.options.read_delay).await;
        let _guard = self.file_lock.lock().await;
        self.read_json(Collection::Properties).await
    }

    async fn inquiries(&self) -> PortResult<Vec<Inquiry>> {
        self.simulate_latency(self.options.read_delay).await;
        let _guard = self.file_lock.lock().await;
        self.read_json(Collection::Inquiries).await
    }

    async fn bookings(&self) -> PortResult<Vec<Booking>> {
        self.simulate_latency(self.options.read_delay).await;
        let _guard = self.file_lock.lock().await;
        self.read_json(Collection::Bookings).await
    }

    async fn stats(&self) -> PortResult<Stats> {
        self.simulate_latency(self.options.stats_delay).await;
        let _guard = self.file_lock.lock().await;
        self.read_json(Collection::Stats).await
    }

    // --- Properties ---

    async fn add_property(&self, property: Property) -> PortResult<Property> {
        let _guard = self.file_lock.lock().await;

        let mut properties: Vec<Property> = self.read_json(Collection::Properties).await?;
        // Newest listings first.
        properties.insert(0, property.clone());
        self.write_json(Collection::Properties, &properties).await?;

        let mut stats: Stats = self.read_json(Collection::Stats).await?;
        stats.total_properties += 1;
        self.write_json(Collection::Stats, &stats).await?;

        Ok(property)
    }

    async fn delete_property(&self, property_id: &str) -> PortResult<()> {
        let _guard = self.file_lock.lock().await;

        let mut properties: Vec<Property> = self.read_json(Collection::Properties).await?;
        let before = properties.len();
        properties.retain(|p| p.id != property_id);
        if properties.len() == before {
            return Err(PortError::NotFound(format!(
                "Property {} not found",
                property_id
            )));
        }
        self.write_json(Collection::Properties, &properties).await?;

        // Inquiries and bookings that reference the listing stay in place;
        // only the counter moves, and never below zero.
        let mut stats: Stats = self.read_json(Collection::Stats).await?;
        stats.total_properties = stats.total_properties.saturating_sub(1);
        self.write_json(Collection::Stats, &stats).await?;

        Ok(())
    }

    // --- Inquiries ---

    async fn add_inquiry(&self, inquiry: Inquiry) -> PortResult<Inquiry> {
        let _guard = self.file_lock.lock().await;

        let mut inquiries: Vec<Inquiry> = self.read_json(Collection::Inquiries).await?;
        inquiries.insert(0, inquiry.clone());
        self.write_json(Collection::Inquiries, &inquiries).await?;

        // The counter only ever goes up; closing an inquiry does not
        // decrement it.
        let mut stats: Stats = self.read_json(Collection::Stats).await?;
        stats.active_inquiries += 1;
        self.write_json(Collection::Stats, &stats).await?;

        Ok(inquiry)
    }

    async fn update_inquiry(&self, inquiry: Inquiry) -> PortResult<Inquiry> {
        let _guard = self.file_lock.lock().await;

        let mut inquiries: Vec<Inquiry> = self.read_json(Collection::Inquiries).await?;
        let slot = inquiries
            .iter_mut()
            .find(|i| i.id == inquiry.id)
            .ok_or_else(|| PortError::NotFound(format!("Inquiry {} not found", inquiry.id)))?;
        *slot = inquiry.clone();
        self.write_json(Collection::Inquiries, &inquiries).await?;

        Ok(inquiry)
    }

    // --- Bookings ---

    async fn create_booking(&self, booking: Booking) -> PortResult<Booking> {
        let _guard = self.file_lock.lock().await;

        let mut bookings: Vec<Booking> = self.read_json(Collection::Bookings).await?;
        // A new request always lands unread, whatever the caller set.
        let booking = Booking {
            is_read: false,
            ..booking
        };
        bookings.push(booking.clone());
        self.write_json(Collection::Bookings, &bookings).await?;

        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> PortResult<()> {
        let _guard = self.file_lock.lock().await;

        let mut bookings: Vec<Booking> = self.read_json(Collection::Bookings).await?;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| PortError::NotFound(format!("Booking {} not found", booking_id)))?;
        booking.status = status;
        // The decision must show up as a fresh notification.
        booking.is_read = false;
        self.write_json(Collection::Bookings, &bookings).await?;

        Ok(())
    }

    async fn mark_all_notifications_read(&self, user_id: &str, role: UserRole) -> PortResult<()> {
        let _guard = self.file_lock.lock().await;

        let properties: Vec<Property> = self.read_json(Collection::Properties).await?;
        let mut bookings: Vec<Booking> = self.read_json(Collection::Bookings).await?;
        for booking in bookings.iter_mut() {
            if belongs_to_viewer(booking, user_id, role, &properties) {
                booking.is_read = true;
            }
        }
        self.write_json(Collection::Bookings, &bookings).await?;

        Ok(())
    }

    // --- Audit ---

    async fn log_interaction(
        &self,
        user_id: &str,
        action: InteractionKind,
        details: &str,
    ) -> PortResult<()> {
        let _guard = self.file_lock.lock().await;

        let mut logs: Vec<InteractionLog> = self.read_json(Collection::Logs).await?;
        logs.insert(
            0,
            InteractionLog {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                action,
                details: details.to_string(),
                timestamp: Utc::now(),
            },
        );
        self.write_json(Collection::Logs, &logs).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rentflow_core::domain::{
        GeoPoint, InquiryStatus, Message, PropertyCategory, PropertyStatus,
    };
    use tempfile::TempDir;

    fn test_store() -> (TempDir, JsonStoreAdapter) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonStoreAdapter::new(StoreOptions::instant(dir.path()));
        (dir, store)
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Kiran Rao".to_string(),
            email: email.to_string(),
            password: "hunter2".to_string(),
            role: UserRole::Tenant,
        }
    }

    fn property(id: &str, owner_id: &str) -> Property {
        Property {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            title: "Test Flat".to_string(),
            description: "Two rooms, one view.".to_string(),
            address: "Indiranagar, Bangalore".to_string(),
            price: 30_000,
            bedrooms: 2,
            bathrooms: 1,
            sqft: 900,
            images: vec![],
            amenities: vec!["Lift".to_string()],
            status: PropertyStatus::Available,
            rating: 4.4,
            category: PropertyCategory::Apartment,
            is_featured: false,
            posted_date: Utc::now(),
            location: Some(GeoPoint {
                lat: 12.97,
                lng: 77.64,
            }),
        }
    }

    fn booking(id: &str, property_id: &str, tenant_id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            property_id: property_id.to_string(),
            tenant_id: tenant_id.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
            // Deliberately wrong; the store must force this to false.
            is_read: true,
            guests: None,
        }
    }

    fn inquiry(id: &str, property_id: &str, tenant_id: &str, owner_id: &str) -> Inquiry {
        Inquiry {
            id: id.to_string(),
            property_id: property_id.to_string(),
            tenant_id: tenant_id.to_string(),
            tenant_name: Some("Anjali Sharma".to_string()),
            owner_id: owner_id.to_string(),
            status: InquiryStatus::Pending,
            messages: vec![Message {
                id: "msg1".to_string(),
                sender_id: tenant_id.to_string(),
                text: "Is the flat still available?".to_string(),
                timestamp: Utc::now(),
            }],
            last_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn signup_then_login_returns_the_same_identity() {
        let (_dir, store) = test_store();

        let created = store.create_user(new_user("kiran@example.com")).await.unwrap();
        let authed = store
            .authenticate_user("kiran@example.com", "hunter2")
            .await
            .unwrap();

        assert_eq!(created.id, authed.id);
        assert_eq!(authed.email, "kiran@example.com");
        assert_eq!(authed.role, UserRole::Tenant);
        assert!(authed.avatar.contains("Kiran+Rao"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_a_new_record() {
        let (_dir, store) = test_store();

        store.create_user(new_user("kiran@example.com")).await.unwrap();
        let err = store
            .create_user(new_user("kiran@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::DuplicateEmail));

        let records: Vec<UserRecord> = store.read_json(Collection::Users).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_both_fail_closed() {
        let (_dir, store) = test_store();
        store.create_user(new_user("kiran@example.com")).await.unwrap();

        let err = store
            .authenticate_user("kiran@example.com", "not-hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::InvalidCredentials));

        let err = store
            .authenticate_user("nobody@example.com", "hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::InvalidCredentials));
    }

    #[tokio::test]
    async fn stored_password_is_a_salted_hash() {
        let (_dir, store) = test_store();
        store.create_user(new_user("kiran@example.com")).await.unwrap();

        let records: Vec<UserRecord> = store.read_json(Collection::Users).await.unwrap();
        assert!(records[0].password.starts_with("$argon2"));
        assert!(!records[0].password.contains("hunter2"));
    }

    #[tokio::test]
    async fn collections_round_trip_through_the_files() {
        let (_dir, store) = test_store();

        // An unwritten collection reads as its default, not as an error.
        assert!(store.inquiries().await.unwrap().is_empty());
        assert_eq!(store.stats().await.unwrap(), Stats::default());

        let added = property("p1", "owner1");
        store.add_property(added.clone()).await.unwrap();
        let read = store.properties().await.unwrap();
        assert_eq!(read, vec![added]);

        // The write also moved the listing counter.
        assert_eq!(store.stats().await.unwrap().total_properties, 1);
    }

    #[tokio::test]
    async fn new_listings_and_inquiries_go_to_the_front() {
        let (_dir, store) = test_store();

        store.add_property(property("p1", "owner1")).await.unwrap();
        store.add_property(property("p2", "owner1")).await.unwrap();
        let ids: Vec<String> = store
            .properties()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p2", "p1"]);

        store
            .add_inquiry(inquiry("i1", "p1", "tenant1", "owner1"))
            .await
            .unwrap();
        store
            .add_inquiry(inquiry("i2", "p2", "tenant1", "owner1"))
            .await
            .unwrap();
        let ids: Vec<String> = store
            .inquiries()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["i2", "i1"]);
    }

    #[tokio::test]
    async fn init_seeds_once_and_never_clobbers() {
        let (_dir, store) = test_store();

        store.init().await.unwrap();
        let seeded = store.properties().await.unwrap();
        assert_eq!(seeded.len(), 18);
        assert_eq!(store.stats().await.unwrap().total_properties, 18);

        // A change survives a second init because the file already exists.
        store.delete_property("m1").await.unwrap();
        store.create_user(new_user("late@example.com")).await.unwrap();
        store.init().await.unwrap();

        assert_eq!(store.properties().await.unwrap().len(), 17);
        store
            .authenticate_user("late@example.com", "hunter2")
            .await
            .unwrap();
        // Demo accounts from the first seed still work too.
        store
            .authenticate_user("tenant@rentflow.com", seed::DEMO_PASSWORD)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn booking_lifecycle_tracks_read_state() {
        let (_dir, store) = test_store();
        store.add_property(property("p1", "owner1")).await.unwrap();

        // Created unread even though the caller said otherwise.
        let created = store.create_booking(booking("bk1", "p1", "tenant1")).await.unwrap();
        assert!(!created.is_read);
        assert_eq!(created.status, BookingStatus::Pending);

        // The owner's decision resets the flag.
        store
            .update_booking_status("bk1", BookingStatus::Confirmed)
            .await
            .unwrap();
        let stored = &store.bookings().await.unwrap()[0];
        assert_eq!(stored.status, BookingStatus::Confirmed);
        assert!(!stored.is_read);

        // The tenant catches up.
        store
            .mark_all_notifications_read("tenant1", UserRole::Tenant)
            .await
            .unwrap();
        assert!(store.bookings().await.unwrap()[0].is_read);
    }

    #[tokio::test]
    async fn mark_all_read_respects_ownership() {
        let (_dir, store) = test_store();
        store.add_property(property("p1", "owner1")).await.unwrap();
        store.add_property(property("p2", "owner2")).await.unwrap();
        store.create_booking(booking("bk1", "p1", "tenant1")).await.unwrap();
        store.create_booking(booking("bk2", "p2", "tenant2")).await.unwrap();

        // owner1 only owns p1, so only bk1 flips.
        store
            .mark_all_notifications_read("owner1", UserRole::Owner)
            .await
            .unwrap();

        let bookings = store.bookings().await.unwrap();
        let bk1 = bookings.iter().find(|b| b.id == "bk1").unwrap();
        let bk2 = bookings.iter().find(|b| b.id == "bk2").unwrap();
        assert!(bk1.is_read);
        assert!(!bk2.is_read);
    }

    #[tokio::test]
    async fn inquiry_update_replaces_the_whole_record() {
        let (_dir, store) = test_store();

        let mut threaded = store
            .add_inquiry(inquiry("i1", "p1", "tenant1", "owner1"))
            .await
            .unwrap();
        threaded.messages.push(Message {
            id: "msg2".to_string(),
            sender_id: "owner1".to_string(),
            text: "Yes, come by on Saturday.".to_string(),
            timestamp: Utc::now(),
        });
        threaded.status = InquiryStatus::Replied;
        store.update_inquiry(threaded).await.unwrap();

        let stored = &store.inquiries().await.unwrap()[0];
        assert_eq!(stored.status, InquiryStatus::Replied);
        assert_eq!(stored.messages.len(), 2);
        assert_eq!(stored.messages[0].id, "msg1");
        assert_eq!(stored.messages[1].id, "msg2");
    }

    #[tokio::test]
    async fn updates_against_missing_records_are_not_found() {
        let (_dir, store) = test_store();

        let err = store.update_inquiry(inquiry("ghost", "p1", "t", "o")).await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));

        let err = store
            .update_booking_status("ghost", BookingStatus::Declined)
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));

        let err = store.delete_property("ghost").await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }

    #[tokio::test]
    async fn stats_counters_move_with_mutations_and_drift_on_orphans() {
        let (_dir, store) = test_store();

        store.add_property(property("p1", "owner1")).await.unwrap();
        store.add_property(property("p2", "owner1")).await.unwrap();
        store
            .add_inquiry(inquiry("i1", "p1", "tenant1", "owner1"))
            .await
            .unwrap();
        store.create_booking(booking("bk1", "p1", "tenant1")).await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_properties, 2);
        assert_eq!(stats.active_inquiries, 1);

        // Deleting the listing leaves the inquiry and booking orphaned and
        // only moves the property counter.
        store.delete_property("p1").await.unwrap();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_properties, 1);
        assert_eq!(stats.active_inquiries, 1);
        assert_eq!(store.bookings().await.unwrap().len(), 1);
        assert_eq!(store.inquiries().await.unwrap().len(), 1);

        // The orphaned booking no longer surfaces for the former owner.
        let properties = store.properties().await.unwrap();
        let orphan = &store.bookings().await.unwrap()[0];
        assert!(!belongs_to_viewer(orphan, "owner1", UserRole::Owner, &properties));
    }

    #[tokio::test]
    async fn interaction_log_is_newest_first() {
        let (_dir, store) = test_store();

        store
            .log_interaction("tenant1", InteractionKind::ViewProperty, "Viewed: Test Flat")
            .await
            .unwrap();
        store
            .log_interaction("tenant1", InteractionKind::BookingRequest, "Booked property p1")
            .await
            .unwrap();

        let logs: Vec<InteractionLog> = store.read_json(Collection::Logs).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].action, InteractionKind::BookingRequest);
        assert_eq!(logs[1].action, InteractionKind::ViewProperty);
    }
}
