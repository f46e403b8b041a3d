//! `skyfreight-core` — shared domain building blocks.
//!
//! Identifiers, identity/value traits and the domain error type used by the
//! parties and shipping crates. Nothing in here performs IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::PersonId;
pub use value_object::ValueObject;
