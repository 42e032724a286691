// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with user-presentable messages.

/// Error type for everything the client core can fail at.
///
/// Display output is what the UI layer shows the user, so variants carry
/// the backend's reason verbatim where one exists.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No access token in the store. Raised locally, before any request.
    #[error("Not authenticated")]
    AuthMissing,

    /// A local precondition failed (e.g. empty ride code). Nothing was sent.
    #[error("{0}")]
    PreconditionFailed(String),

    /// The request never produced an HTTP response (DNS, TLS, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status. Carries the reason
    /// from the response body, or the operation's default message.
    #[error("{0}")]
    BackendRejected(String),

    /// A device capability (location, for now) refused access.
    #[error("{0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
