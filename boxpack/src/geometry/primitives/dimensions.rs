use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::{Axis, RotationType};

/// Extents of a box along the width, height and depth axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Decimal,
    pub height: Decimal,
    pub depth: Decimal,
}

impl Dimensions {
    pub fn new(width: Decimal, height: Decimal, depth: Decimal) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Extent along `axis`
    pub fn along(&self, axis: Axis) -> Decimal {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// The dimensions of the same box after laying it down in `rotation`.
    pub fn rotated(&self, rotation: RotationType) -> Dimensions {
        let [w, h, d] = rotation.permutation();
        Dimensions {
            width: self.along(w),
            height: self.along(h),
            depth: self.along(d),
        }
    }

    pub fn volume(&self) -> Decimal {
        self.width * self.height * self.depth
    }
}
