use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::entities::{Item, Placement};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::{Cuboid, Dimensions, Position, RotationType};

/// A container in which [`Item`]s are packed.
///
/// Keeps track of the items packed so far, in the order in which they were packed,
/// and of the items for which no valid placement could be found.
/// A bin is driven by a single packing algorithm at a time and is not meant to be shared between threads.
#[derive(Clone, Debug)]
pub struct Bin {
    /// Name of the bin, also used as the key of its results
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    pub length: Decimal,
    packed_items: Vec<Item>,
    unfitted_items: Vec<Item>,
}

impl Bin {
    pub fn new(name: impl Into<String>, width: Decimal, height: Decimal, length: Decimal) -> Self {
        Bin {
            name: name.into(),
            width,
            height,
            length,
            packed_items: vec![],
            unfitted_items: vec![],
        }
    }

    /// A bin with the same name and capacity as `self`, without any items.
    pub fn empty_copy(&self) -> Bin {
        Bin::new(self.name.clone(), self.width, self.height, self.length)
    }

    /// Capacity of the bin, with its length along the depth axis.
    pub fn capacity(&self) -> Dimensions {
        Dimensions::new(self.width, self.height, self.length)
    }

    pub fn volume(&self) -> Decimal {
        self.capacity().volume()
    }

    /// Items packed in the bin, in the order in which they were packed
    pub fn packed_items(&self) -> &[Item] {
        &self.packed_items
    }

    /// Items for which no placement was found
    pub fn unfitted_items(&self) -> &[Item] {
        &self.unfitted_items
    }

    pub fn is_empty(&self) -> bool {
        self.packed_items.is_empty()
    }

    /// Total volume of all packed items
    pub fn packed_volume(&self) -> Decimal {
        self.packed_items.iter().map(Item::volume).sum()
    }

    /// Searches for an orientation in which `item` can be placed at `position`.
    ///
    /// Orientations are tried in the order of [`RotationType::ALL`].
    /// An orientation is valid if the item stays within the bin and does not collide with any packed item.
    /// Returns the first valid one, or `None` if the item cannot be placed at `position` at all.
    pub fn find_placement(&self, item: &Item, position: Position) -> Option<Placement> {
        let capacity = self.capacity();
        let dims = item.dimensions();

        RotationType::ALL.into_iter().find_map(|rotation| {
            let candidate = Cuboid::new(position, dims.rotated(rotation));
            if !candidate.fits_within(&capacity) {
                return None;
            }
            match self.packed_items.iter().any(|pi| pi.collides_with(&candidate)) {
                true => None,
                false => Some(Placement { position, rotation }),
            }
        })
    }

    /// Attempts to pack `item` at `position`.
    /// On success, a placed copy of the item is appended to the packed items and `true` is returned.
    /// Otherwise the bin is left untouched.
    pub fn put_item(&mut self, item: &Item, position: Position) -> bool {
        match self.find_placement(item, position) {
            Some(placement) => {
                self.place(item, placement);
                true
            }
            None => false,
        }
    }

    /// Commits `item` to the bin according to `placement`, which should originate from [`Bin::find_placement`].
    pub fn place(&mut self, item: &Item, placement: Placement) {
        debug_assert!(self.find_placement(item, placement.position).is_some());
        self.packed_items.push(item.placed(placement));
    }

    /// Registers `item` as not fitting in this bin.
    pub fn reject(&mut self, item: Item) {
        self.unfitted_items.push(item);
    }
}

impl Display for Bin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}x{}x{}) vol({})",
            self.name,
            self.width,
            self.length,
            self.height,
            self.volume()
        )
    }
}
