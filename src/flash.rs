//! One-shot notifications carried in the session until the next page
//! renders them.

use serde::{Deserialize, Serialize};
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

const FLASH_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default()).with_secure(false)
}

/// Queues `flash` for the next rendered page.
///
/// A session failure only loses the notification, so it is logged rather
/// than returned.
pub async fn push(session: &Session, flash: Flash) {
    let mut pending = take(session).await;
    pending.push(flash);
    if let Err(e) = session.insert(FLASH_KEY, pending).await {
        tracing::warn!("Failed to store flash message: {}", e);
    }
}

/// Removes and returns every queued flash.
pub async fn take(session: &Session) -> Vec<Flash> {
    match session.remove::<Vec<Flash>>(FLASH_KEY).await {
        Ok(pending) => pending.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read flash messages: {}", e);
            Vec::new()
        }
    }
}

/// Drains the queue and appends `flash`, for handlers that render in the
/// same response instead of redirecting.
pub async fn take_with(session: &Session, flash: Flash) -> Vec<Flash> {
    let mut flashes = take(session).await;
    flashes.push(flash);
    flashes
}
