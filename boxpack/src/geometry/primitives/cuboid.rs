use rust_decimal::Decimal;

use crate::geometry::geo_enums::Axis;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Dimensions, Position};

/// Axis-aligned box, positioned by its corner closest to the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cuboid {
    pub position: Position,
    pub dims: Dimensions,
}

impl Cuboid {
    pub fn new(position: Position, dims: Dimensions) -> Self {
        Self { position, dims }
    }

    /// Coordinate of the center of `self` along `axis`
    pub fn center_at(&self, axis: Axis) -> Decimal {
        self.position.at(axis) + self.dims.along(axis) / Decimal::TWO
    }

    /// Coordinate of the far side of `self` along `axis`
    pub fn max_at(&self, axis: Axis) -> Decimal {
        self.position.at(axis) + self.dims.along(axis)
    }

    /// Whether the projections of `self` and `other` onto `axis` overlap.
    /// Touching projections do not overlap.
    #[inline(always)]
    pub fn overlaps_along(&self, other: &Cuboid, axis: Axis) -> bool {
        let center_distance = (self.center_at(axis) - other.center_at(axis)).abs();
        let mean_extent = (self.dims.along(axis) + other.dims.along(axis)) / Decimal::TWO;
        center_distance < mean_extent
    }

    /// Whether the rectangles obtained by projecting `self` and `other` onto the plane spanned by `a1` and `a2` intersect.
    pub fn projection_overlaps(&self, other: &Cuboid, a1: Axis, a2: Axis) -> bool {
        self.overlaps_along(other, a1) && self.overlaps_along(other, a2)
    }

    /// Whether `self` lies entirely within a box of size `bounds` anchored at the origin.
    pub fn fits_within(&self, bounds: &Dimensions) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.position.at(axis) >= Decimal::ZERO && self.max_at(axis) <= bounds.along(axis))
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    /// Two cuboids collide when their projections overlap on every axis.
    /// Equivalent to requiring the (width, height), (height, depth) and (width, depth) projections to all intersect.
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.overlaps_along(other, axis))
    }
}
