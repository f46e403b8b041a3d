//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here. Configuration and process
/// setup failures belong to the crates that own those concerns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The sender of a package is not a registered customer of the carrier.
    #[error(
        "sender {sender} is not a customer of the carrier; only customers may ship packages"
    )]
    SenderNotCustomer { sender: String },

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn sender_not_customer(sender: impl Into<String>) -> Self {
        Self::SenderNotCustomer {
            sender: sender.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
