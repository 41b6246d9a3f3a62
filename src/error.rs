//! Error types for the organizer front end

use thiserror::Error;

use crate::models::EntityKind;

/// Failure talking to the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    /// No response within the configured timeout
    #[error("request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u32 },

    /// Non-2xx status, with the backend's `detail` when it sent one
    #[error("{endpoint} returned status {status}{}", .detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { endpoint: String, status: u16, detail: Option<String> },

    /// Body was not the expected JSON shape
    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

/// Input rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} name cannot be empty!")]
    EmptyName(EntityKind),

    #[error("Please enter a command or question first.")]
    EmptyCommand,
}

/// Broken parent graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("space {space_id} is part of a parent cycle")]
    Cycle { space_id: u32 },
}

/// Error of a user-level action (create, edit, relocate, interpret)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error("cannot move space {space_id} under {new_parent}: it is inside space {space_id}")]
    WouldCreateCycle { space_id: u32, new_parent: u32 },
}

/// Result type alias for user-level actions
pub type Result<T> = std::result::Result<T, ActionError>;
