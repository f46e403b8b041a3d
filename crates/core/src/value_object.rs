//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity of their own. They are immutable once
/// built and two instances with equal attributes are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Route {
///     origin: String,
///     destination: String,
/// }
///
/// impl ValueObject for Route {}
/// ```
///
/// A value object may still *reference* an entity (a package points at its
/// sender); equality then follows the entity's identity rules for that field.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
