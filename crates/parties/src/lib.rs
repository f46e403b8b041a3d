//! Parties domain module (people that can be customers or senders).
//!
//! Pure domain data: no IO, no storage.

pub mod person;

pub use person::Person;
