//! services/backend/src/bin/rentflow.rs
//!
//! Headless walkthrough of the marketplace: seeds the store, signs in the
//! demo tenant and owner, runs an inquiry and a booking across both sides,
//! and tours the AI toolbox. With no API key configured the AI answers
//! degrade to their offline placeholders and everything else still works.

use backend_lib::{
    adapters::{
        GeminiAdvisorAdapter, GeminiImageStudioAdapter, GeminiInsightAdapter, GeminiLeaseAdapter,
        GeminiListingAdapter, GeminiNegotiationAdapter, GeminiQaAdapter, GeminiScoutAdapter,
        GeminiTrendsAdapter, JsonStoreAdapter, OfflineAssistAdapter, StoreOptions,
    },
    config::Config,
    error::BackendError,
    session::{AppSession, AppState},
};

use async_openai::{config::OpenAIConfig, Client};
use base64::{Engine as _, engine::general_purpose};
use chrono::{Days, Utc};
use rentflow_core::{
    domain::{BookingStatus, GuestCount, InlineImage, Inquiry, InquiryStatus, Message},
    ports::MarketStore,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

// A 1x1 PNG standing in for an uploaded listing photo.
const SAMPLE_PHOTO_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAADElEQVR4nGM4ceIEAAS0AlkWLoFAAAAAAElFTkSuQmCC";

#[tokio::main]
async fn main() -> Result<(), BackendError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Data directory: {}", config.data_dir.display());

    // --- 2. Open the Store & Seed the Demo Data ---
    let store = Arc::new(JsonStoreAdapter::new(StoreOptions::new(
        config.data_dir.clone(),
    )));
    store.init().await?;
    info!("Store ready; missing collections were seeded.");

    // --- 3. Initialize Service Adapters & Build the Shared AppState ---
    let app_state = match &config.gemini_api_key {
        Some(key) => {
            let gemini_config = OpenAIConfig::new()
                .with_api_key(key)
                .with_api_base(&config.gemini_api_base);
            let gemini_client = Client::with_config(gemini_config);

            Arc::new(AppState {
                store: store.clone(),
                config: config.clone(),
                listing_copy: Arc::new(GeminiListingAdapter::new(
                    gemini_client.clone(),
                    config.copy_model.clone(),
                )),
                property_qa: Arc::new(GeminiQaAdapter::new(
                    gemini_client.clone(),
                    config.qa_model.clone(),
                )),
                location_scout: Arc::new(GeminiScoutAdapter::new(
                    gemini_client.clone(),
                    config.scout_model.clone(),
                )),
                negotiation: Arc::new(GeminiNegotiationAdapter::new(
                    gemini_client.clone(),
                    config.copy_model.clone(),
                )),
                lease_review: Arc::new(GeminiLeaseAdapter::new(
                    gemini_client.clone(),
                    config.counsel_model.clone(),
                )),
                market_trends: Arc::new(GeminiTrendsAdapter::new(
                    gemini_client.clone(),
                    config.scout_model.clone(),
                )),
                advisor: Arc::new(GeminiAdvisorAdapter::new(
                    gemini_client.clone(),
                    config.counsel_model.clone(),
                )),
                image_studio: Arc::new(GeminiImageStudioAdapter::new(
                    gemini_client.clone(),
                    config.copy_model.clone(),
                    config.image_model.clone(),
                )),
                stats_insight: Arc::new(GeminiInsightAdapter::new(
                    gemini_client,
                    config.copy_model.clone(),
                )),
            })
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI features will return placeholder text.");
            let offline = Arc::new(OfflineAssistAdapter);
            Arc::new(AppState {
                store: store.clone(),
                config: config.clone(),
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
    };

    // --- 4. Tenant Walkthrough: Browse, Inquire, Book ---
    let mut tenant = AppSession::new(app_state.clone());
    let tenant_user = tenant.login("tenant@rentflow.com", "password").await?;
    info!("Signed in as {} ({})", tenant_user.name, tenant_user.email);

    let properties = tenant.properties().await;
    info!("{} listings on the market.", properties.len());

    let featured = properties
        .iter()
        .find(|p| p.is_featured)
        .cloned()
        .ok_or_else(|| BackendError::Internal("seed data has no featured listing".to_string()))?;
    info!(
        "Spotlight: {} at {} for {} INR/month.",
        featured.title, featured.address, featured.price
    );

    let answer = app_state
        .property_qa
        .answer_question(&featured, "Is the security deposit negotiable?")
        .await;
    info!("Leasing agent. {}", answer);

    let inquiry = tenant
        .add_inquiry(Inquiry {
            id: Uuid::new_v4().to_string(),
            property_id: featured.id.clone(),
            tenant_id: tenant_user.id.clone(),
            tenant_name: Some(tenant_user.name.clone()),
            owner_id: featured.owner_id.clone(),
            status: InquiryStatus::Pending,
            messages: vec![Message {
                id: Uuid::new_v4().to_string(),
                sender_id: tenant_user.id.clone(),
                text: "Is covered parking included in the rent?".to_string(),
                timestamp: Utc::now(),
            }],
            last_updated: Utc::now(),
        })
        .await?;
    info!("Inquiry {} opened.", inquiry.id);

    let start_date = Utc::now().date_naive() + Days::new(7);
    let end_date = start_date + Days::new(30);
    let booking = tenant
        .book_property(
            &featured.id,
            start_date,
            end_date,
            GuestCount {
                adults: 2,
                children: 0,
                pets: 0,
            },
        )
        .await?;
    info!("Booking {} requested for {} to {}.", booking.id, start_date, end_date);

    // --- 5. Owner Walkthrough: Reply, Decide, Catch Up ---
    let mut owner = AppSession::new(app_state.clone());
    let owner_user = owner.login("owner@rentflow.com", "password").await?;
    info!(
        "Signed in as {}; {} unread notifications.",
        owner_user.name,
        owner.unread_count().await
    );

    let replied = owner
        .send_message(&inquiry.id, "Yes, one covered slot is included.")
        .await?;
    info!(
        "Replied to inquiry {}; thread now has {} messages.",
        replied.id,
        replied.messages.len()
    );

    owner
        .update_booking_status(&booking.id, BookingStatus::Confirmed)
        .await?;
    owner.mark_notifications_read().await?;
    info!("Booking confirmed; owner notifications cleared.");

    let stats = owner.stats().await;
    info!(
        "Portfolio: {} listings, {} active inquiries, {} INR total revenue.",
        stats.total_properties, stats.active_inquiries, stats.total_revenue
    );
    let insights = app_state.stats_insight.portfolio_insights(&stats).await;
    info!("Portfolio insights. {}", insights);

    // --- 6. The Tenant Sees the Decision ---
    tenant.refresh().await?;
    for note in tenant.notifications().await {
        info!(
            "Notification: booking {} is now {:?}{}.",
            note.id,
            note.status,
            if note.is_read { "" } else { " (new)" }
        );
    }
    tenant.mark_notifications_read().await?;

    // --- 7. AI Toolbox Tour ---
    let copy = app_state
        .listing_copy
        .generate_description(
            "Sunlit 2BHK near Indiranagar Metro",
            &[
                "Covered parking".to_string(),
                "Balcony".to_string(),
                "24x7 security".to_string(),
            ],
            featured.category,
        )
        .await;
    info!("Draft listing copy. {}", copy);

    let area = app_state
        .location_scout
        .scout(&featured.address, featured.location)
        .await;
    info!(
        "Area scout ({} map links). {}",
        area.map_links.len(),
        area.text
    );

    let pitch = app_state
        .negotiation
        .draft_message(
            &featured.title,
            featured.price,
            featured.price - 5_000,
            "long-term stay with immediate move-in",
        )
        .await;
    info!("Negotiation draft. {}", pitch);

    let review = app_state
        .lease_review
        .review_clause(
            "The security deposit shall be forfeited in full if the tenant vacates \
             before completing 11 months, regardless of notice given.",
        )
        .await;
    info!("Lease review. {}", review);

    let trends = app_state
        .market_trends
        .trend_search("average 2BHK rent trend in Bangalore 2025")
        .await;
    info!("Market trends ({} sources). {}", trends.sources.len(), trends.text);

    let brief = app_state
        .advisor
        .market_brief("Should I list my Koramangala flat furnished or unfurnished?")
        .await;
    info!("Advisor brief. {}", brief);

    let photo = InlineImage {
        mime_type: "image/png".to_string(),
        data: general_purpose::STANDARD
            .decode(SAMPLE_PHOTO_B64)
            .map_err(|e| BackendError::Internal(e.to_string()))?,
    };
    let analysis = app_state.image_studio.analyze_image(&photo).await;
    info!("Photo analysis. {}", analysis);
    match app_state
        .image_studio
        .edit_image(&photo, "Brighten the room and add warm evening lighting.")
        .await
    {
        Some(edited) => info!("Edited photo ready ({} characters).", edited.len()),
        None => info!("Photo editing unavailable."),
    }

    // --- 8. Wind Down ---
    tenant.logout().await;
    owner.logout().await;
    info!("Walkthrough complete.");

    Ok(())
}
