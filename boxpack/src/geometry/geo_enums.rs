use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The three spatial axes of a [`Bin`](crate::entities::Bin).
/// `Width` runs along x, `Height` along y and `Depth` along z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl Axis {
    /// All axes, in the order in which pivot positions are generated.
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];
}

/// Describes how the three dimensions of an item are mapped onto the axes of a bin.
///
/// The name lists, for the width, height and depth axis of the bin respectively,
/// which dimension of the item is laid along it.
/// The item's length is its depth dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationType {
    WidthHeightDepth,
    HeightWidthDepth,
    HeightDepthWidth,
    #[default]
    DepthHeightWidth,
    DepthWidthHeight,
    WidthDepthHeight,
}

/// For every [`RotationType`] (by index), the item dimension laid along the width, height and depth axis of the bin.
const AXIS_PERMUTATIONS: [[Axis; 3]; 6] = [
    [Axis::Width, Axis::Height, Axis::Depth],
    [Axis::Height, Axis::Width, Axis::Depth],
    [Axis::Height, Axis::Depth, Axis::Width],
    [Axis::Depth, Axis::Height, Axis::Width],
    [Axis::Depth, Axis::Width, Axis::Height],
    [Axis::Width, Axis::Depth, Axis::Height],
];

impl RotationType {
    /// All orientations, in the order in which they are tried during placement.
    pub const ALL: [RotationType; 6] = [
        RotationType::WidthHeightDepth,
        RotationType::HeightWidthDepth,
        RotationType::HeightDepthWidth,
        RotationType::DepthHeightWidth,
        RotationType::DepthWidthHeight,
        RotationType::WidthDepthHeight,
    ];

    /// Position of `self` in [`RotationType::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The item dimensions laid along the width, height and depth axis of the bin (in that order).
    pub fn permutation(self) -> [Axis; 3] {
        AXIS_PERMUTATIONS[self.index()]
    }
}

impl Display for RotationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn rotation_order_matches_index() {
        for (i, rotation) in RotationType::ALL.iter().enumerate() {
            assert_eq!(rotation.index(), i);
        }
    }

    #[test]
    fn every_rotation_is_a_permutation() {
        for rotation in RotationType::ALL {
            let axes = rotation.permutation();
            assert_eq!(axes.iter().unique().count(), 3, "{rotation} repeats an axis");
        }
        let distinct = RotationType::ALL
            .iter()
            .map(|r| r.permutation())
            .unique()
            .count();
        assert_eq!(distinct, 6);
    }

    #[test]
    fn default_rotation() {
        assert_eq!(RotationType::default(), RotationType::DepthHeightWidth);
    }
}
