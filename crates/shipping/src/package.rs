use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use skyfreight_core::ValueObject;
use skyfreight_parties::Person;

/// A package handed to the carrier: route, ship date and sender.
///
/// The sender is shared with the carrier's customer list rather than copied,
/// so a package always points at the same person the carrier registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    origin: String,
    destination: String,
    ship_date: NaiveDate,
    sender: Arc<Person>,
}

impl Package {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        ship_date: NaiveDate,
        sender: Arc<Person>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ship_date,
            sender,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn ship_date(&self) -> NaiveDate {
        self.ship_date
    }

    pub fn sender(&self) -> &Arc<Person> {
        &self.sender
    }
}

impl ValueObject for Package {}
