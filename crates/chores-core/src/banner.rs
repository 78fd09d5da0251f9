//! Single-message error banner with a fixed auto-dismiss lifetime.
//!
//! Failures never propagate past the store; they land here as one of the
//! fixed user-facing categories and stay visible for three seconds.
//! A new failure overwrites the current one and restarts the clock.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// How long a message stays visible before it clears on its own.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// User-facing failure categories with their fixed banner texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    LoadFailed,
    EmptyTitle,
    AddFailed,
    DeleteFailed,
    UpdateFailed,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::LoadFailed => "Unable to load tasks",
            Self::EmptyTitle => "Title should not be empty",
            Self::AddFailed => "Unable to add a task",
            Self::DeleteFailed => "Unable to delete a task",
            Self::UpdateFailed => "Unable to update a task",
        };
        write!(f, "{message}")
    }
}

/// Banner state: idle, or showing one message with its display deadline.
///
/// Expiry is evaluated on read rather than by a background timer, so the
/// banner works the same under a real clock and tokio's paused test clock.
#[derive(Debug, Default)]
pub struct ErrorBanner {
    showing: Option<(UserError, Instant)>,
}

impl ErrorBanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any prior one and restarting the clock.
    pub fn show(&mut self, error: UserError) {
        self.showing = Some((error, Instant::now() + DISMISS_AFTER));
    }

    /// Current visible message, if its three seconds have not elapsed.
    #[must_use]
    pub fn current(&self) -> Option<UserError> {
        match self.showing {
            Some((error, deadline)) if Instant::now() < deadline => Some(error),
            _ => None,
        }
    }

    /// Dismiss the current message immediately.
    pub fn dismiss(&mut self) {
        self.showing = None;
    }
}
