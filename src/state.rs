//! State shared by the health server's request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::cache::Cache;

/// Application state cloned into each request handler.
///
/// Both fields are cheap to clone: `DateTime<Utc>` is `Copy` and the cache is shared
/// with the running bot through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// When the process started, for uptime reporting.
    pub started_at: DateTime<Utc>,

    /// The bot's serenity cache, read for the connected guild count.
    pub cache: Arc<Cache>,
}

impl AppState {
    pub fn new(cache: Arc<Cache>) -> Self {
        Self {
            started_at: Utc::now(),
            cache,
        }
    }
}
