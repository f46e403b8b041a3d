use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use skyfreight_core::{DomainError, DomainResult, Entity};
use skyfreight_parties::Person;

use crate::cost;
use crate::package::Package;

/// The carrier's ledger: who may ship, and what has been shipped.
///
/// Both collections are public and ordered by insertion. Customers are
/// registered by pushing onto `customers` directly; packages should go
/// through [`Carrier::ship_package`] so the sender check runs. Nothing is
/// ever removed.
///
/// The sender check and the append are not atomic across threads. Callers
/// sharing a carrier must guard it with a single lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    pub customers: Vec<Arc<Person>>,
    pub packages: Vec<Package>,
}

impl Carrier {
    /// A carrier with no customers and no packages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `person` is a registered customer (matched by id, not name).
    pub fn is_customer(&self, person: &Person) -> bool {
        self.customers
            .iter()
            .any(|customer| customer.same_identity_as(person))
    }

    /// Accept a package for transport.
    ///
    /// Fails with [`DomainError::SenderNotCustomer`] when the sender is not in
    /// `customers`; the package is then dropped and `packages` is unchanged.
    pub fn ship_package(&mut self, package: Package) -> DomainResult<()> {
        let sender = package.sender();

        if !self.is_customer(sender) {
            tracing::warn!(
                sender_id = %sender.id(),
                sender = sender.name(),
                "rejected package from non-customer"
            );
            return Err(DomainError::sender_not_customer(sender.name()));
        }

        tracing::debug!(
            sender_id = %sender.id(),
            origin = package.origin(),
            destination = package.destination(),
            ship_date = %package.ship_date(),
            "package accepted"
        );
        self.packages.push(package);
        Ok(())
    }

    /// Packages shipped on exactly `date`, in the order they were accepted.
    pub fn packages_on_date(&self, date: NaiveDate) -> Vec<&Package> {
        self.packages
            .iter()
            .filter(|package| package.ship_date() == date)
            .collect()
    }

    /// Daily report: the packages shipped on `date` and the revenue they
    /// brought in.
    pub fn transported_on_date(&self, date: NaiveDate) -> (Vec<&Package>, u64) {
        let packages = self.packages_on_date(date);
        let revenue = self.ship_cost(&packages);
        (packages, revenue)
    }

    /// Price of shipping `packages` at the flat per-package rate.
    pub fn ship_cost<T>(&self, packages: &[T]) -> u64 {
        cost::ship_cost(packages)
    }
}
