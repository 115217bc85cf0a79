//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Line items, billing addresses and computed totals are values: two of them
/// with the same fields are interchangeable, and "editing" one means building
/// a replacement.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BillingAddress {
///     address_text: String,
/// }
///
/// impl ValueObject for BillingAddress {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
