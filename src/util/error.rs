use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when a [`Position`](crate::collections::positional::Position) is used with a list it
/// isn't currently linked into. This covers positions that have been removed, positions belonging
/// to another list and positions that outlived their list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position is not linked into this list!")]
pub struct InvalidPosition;

/// Returned when attempting to read or remove an element from a container with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to access an element of an empty container!")]
pub struct EmptyContainer;

/// A length or capacity would exceed what the platform can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Any of the errors produced by the collections in this crate, for callers that would rather
/// handle a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    InvalidPosition(InvalidPosition),
    EmptyContainer(EmptyContainer),
    CapacityOverflow(CapacityOverflow),
}
