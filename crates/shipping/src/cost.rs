//! Shipping price rules.

/// Charge for every transported package, in the carrier's billing unit.
pub const FLAT_RATE_PER_PACKAGE: u64 = 10;

/// Price of shipping `packages`: the flat rate times the number of packages.
///
/// Only the count matters, so this accepts owned packages as well as the
/// borrowed slices returned by the carrier's queries. Empty input costs 0.
pub fn ship_cost<T>(packages: &[T]) -> u64 {
    FLAT_RATE_PER_PACKAGE * packages.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_shipment_costs_nothing() {
        let none: [(); 0] = [];
        assert_eq!(ship_cost(&none), 0);
    }

    #[test]
    fn single_package_costs_the_flat_rate() {
        assert_eq!(ship_cost(&["parcel"]), FLAT_RATE_PER_PACKAGE);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: cost is linear in the package count, with no discounts.
        #[test]
        fn cost_is_flat_rate_times_count(items in prop::collection::vec(any::<u8>(), 0..500)) {
            prop_assert_eq!(ship_cost(&items), 10 * items.len() as u64);
        }
    }
}
