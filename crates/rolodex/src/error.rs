//! Error types for the client-record service.
//!
//! This module defines the central `Error` enum, which captures all
//! reportable failure cases across the allocator, store adapter, and client
//! service. The HTTP surface maps these onto status codes; nothing in this
//! crate knows about transports.
//!
//! ## Error classes
//! - `MissingField` / `InvalidField`: input validation failures.
//! - `DuplicateEmail` / `DuplicateClientId`: uniqueness violations raised by
//!   the store.
//! - `InvalidPayload`: a bulk payload (or one of its records) with the wrong
//!   shape.
//! - `StoreUnavailable`: the backing store could not be reached.

use crate::ClientId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for the client-record service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required input field was absent or empty.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// An input field was present but failed validation.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A record with the same email already exists.
    #[error("a client with email `{email}` already exists")]
    DuplicateEmail { email: String },

    /// A record with the same identifier already exists.
    #[error("a client with id {id} already exists")]
    DuplicateClientId { id: ClientId },

    /// The request payload had the wrong overall shape.
    #[error("invalid payload: {reason}")]
    InvalidPayload { reason: String },

    /// The backing store could not be reached or failed an I/O operation.
    #[error("store unavailable: {context}")]
    StoreUnavailable { context: String },
}

impl Error {
    /// True for uniqueness violations on either indexed field.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEmail { .. } | Self::DuplicateClientId { .. }
        )
    }

    pub(crate) fn unavailable(context: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            context: context.into(),
        }
    }
}
