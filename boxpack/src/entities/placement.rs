use crate::geometry::{Position, RotationType};

/// Encapsulates all required information to commit an [`Item`](crate::entities::Item) to a [`Bin`](crate::entities::Bin).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Where the item will be placed
    pub position: Position,
    /// The orientation in which it will be placed
    pub rotation: RotationType,
}
