//! Platform services consumed by the presenter.
//!
//! - [`NotificationService`]: one-shot local notifications
//! - [`ShareService`]: hand text to a share surface
//! - [`CameraService`]: capture a photo and return its URI
//!
//! Implementations live with the binaries; the core only sees these traits.

use std::time::Duration;

/// Result type for service operations.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("cancelled by user")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

pub trait NotificationService: Send + Sync {
    /// Schedule a notification to fire once after `fire_delay`.
    ///
    /// Returns as soon as the notification is scheduled, not when it fires.
    fn schedule(&self, title: &str, body: &str, fire_delay: Duration) -> ServiceResult<()>;
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

pub trait ShareService: Send + Sync {
    fn share(&self, title: &str, text: &str) -> ServiceResult<()>;
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

pub trait CameraService: Send + Sync {
    /// Capture a photo and return a reference the UI can display.
    fn capture(&self) -> ServiceResult<String>;
}
