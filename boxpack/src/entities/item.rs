use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::entities::Placement;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::{Axis, Cuboid, Dimensions, Position, RotationType};

/// Item to be packed. Also holds the orientation and position in which it ended up after packing.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: u64,
    /// One of the three item dimensions, laid along the depth axis in [`RotationType::WidthHeightDepth`]
    pub length: Decimal,
    /// Another of the three item dimensions
    pub width: Decimal,
    /// The remaining item dimension
    pub height: Decimal,
    /// Number of identical units this item represents
    pub quantity: usize,
    pub rotation: RotationType,
    pub position: Position,
}

impl Item {
    pub fn new(id: u64, length: Decimal, width: Decimal, height: Decimal, quantity: usize) -> Self {
        Item {
            id,
            length,
            width,
            height,
            quantity,
            rotation: RotationType::default(),
            position: Position::ORIGIN,
        }
    }

    /// A copy of `self` with the same identity, dimensions and quantity, but no packing state.
    pub fn pristine_copy(&self) -> Item {
        Item::new(self.id, self.length, self.width, self.height, self.quantity)
    }

    /// A single, unplaced unit of `self` identified by `id`.
    pub fn unit_with_id(&self, id: u64) -> Item {
        Item::new(id, self.length, self.width, self.height, 1)
    }

    /// Copy of `self` laid down according to `placement`.
    pub fn placed(&self, placement: Placement) -> Item {
        Item {
            position: placement.position,
            rotation: placement.rotation,
            ..self.clone()
        }
    }

    /// Dimensions of the item before any rotation is applied, with the length along the depth axis.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height, self.length)
    }

    /// Dimensions of the item in its current orientation.
    pub fn rotated_dimensions(&self) -> Dimensions {
        self.dimensions().rotated(self.rotation)
    }

    /// Extent of the item along `axis`, in its current orientation.
    pub fn rotated_extent(&self, axis: Axis) -> Decimal {
        self.rotated_dimensions().along(axis)
    }

    pub fn position_at(&self, axis: Axis) -> Decimal {
        self.position.at(axis)
    }

    /// The position right behind the item along `axis`, where another item can be placed flush against it.
    pub fn rotate_position(&self, axis: Axis) -> Position {
        self.position.offset(axis, self.rotated_extent(axis))
    }

    /// The space occupied by the item in its current orientation and position.
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::new(self.position, self.rotated_dimensions())
    }

    /// Volume of the item, the same in every orientation
    pub fn volume(&self) -> Decimal {
        self.dimensions().volume()
    }

    pub fn intersects_with(&self, other: &Item) -> bool {
        self.collides_with(other)
    }
}

impl CollidesWith<Item> for Item {
    fn collides_with(&self, other: &Item) -> bool {
        self.cuboid().collides_with(&other.cuboid())
    }
}

impl CollidesWith<Cuboid> for Item {
    fn collides_with(&self, other: &Cuboid) -> bool {
        self.cuboid().collides_with(other)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}x{}x{}) pos({}) rt({}:{}) vol({})",
            self.id,
            self.length,
            self.width,
            self.height,
            self.position,
            self.rotation,
            self.rotation.index(),
            self.volume()
        )
    }
}
