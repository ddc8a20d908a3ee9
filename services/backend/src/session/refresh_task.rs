//! services/backend/src/session/refresh_task.rs
//!
//! This module contains the asynchronous "worker" function that keeps a
//! session's collection cache in step with the store. The fixed-interval
//! poll stands in for server push and runs only while a user is signed in.

use crate::session::state::{AppState, CollectionCache};
use rentflow_core::ports::PortResult;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Fetches all four collections in parallel and replaces the cache wholesale.
/// No diffing; the snapshot that completes last wins.
pub async fn refresh_once(app_state: &AppState, cache: &Mutex<CollectionCache>) -> PortResult<()> {
    let (properties, inquiries, bookings, stats) = futures::try_join!(
        app_state.store.properties(),
        app_state.store.inquiries(),
        app_state.store.bookings(),
        app_state.store.stats(),
    )?;

    let mut guard = cache.lock().await;
    *guard = CollectionCache {
        properties,
        inquiries,
        bookings,
        stats,
    };
    Ok(())
}

/// The long-running poll task for one authenticated session.
///
/// It ticks at the configured interval until the `CancellationToken` fires,
/// which happens on logout. A failed poll is logged and the previous
/// snapshot stays in place.
pub async fn refresh_process(
    app_state: Arc<AppState>,
    cache: Arc<Mutex<CollectionCache>>,
    cancellation_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(app_state.config.refresh_interval);
    // The first tick completes immediately and would duplicate the fetch
    // done at sign-in, so it is consumed here.
    ticker.tick().await;

    info!("Collection refresh task started.");
    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => {
                info!("Collection refresh task stopped.");
                return;
            }
            _ = ticker.tick() => {
                if let Err(e) = refresh_once(&app_state, &cache).await {
                    warn!("Background refresh failed, keeping the previous snapshot: {}", e);
                }
            }
        }
    }
}
