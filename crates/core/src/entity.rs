//! Entity trait: records whose identity survives edits.

/// Something addressed by id rather than by value (an invoice draft, a
/// persisted invoice).
///
/// Two drafts with identical line items are still different drafts.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
