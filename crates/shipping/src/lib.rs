//! Shipping domain module: packages, the carrier ledger and its daily reports.
//!
//! All operations are synchronous and in-memory. A [`Carrier`] only accepts
//! packages whose sender is one of its registered customers; the reporting
//! queries filter the accepted packages by ship date and price them at a flat
//! per-package rate.

pub mod carrier;
pub mod cost;
pub mod package;

pub use carrier::Carrier;
pub use cost::{FLAT_RATE_PER_PACKAGE, ship_cost};
pub use package::Package;
