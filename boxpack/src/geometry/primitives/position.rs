use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::Axis;

/// Location of the corner of an item closest to the origin of a bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: Decimal,
    pub y: Decimal,
    pub z: Decimal,
}

impl Position {
    /// Origin of every bin, where the first item is placed.
    pub const ORIGIN: Position = Position {
        x: Decimal::ZERO,
        y: Decimal::ZERO,
        z: Decimal::ZERO,
    };

    pub fn new(x: Decimal, y: Decimal, z: Decimal) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along `axis`
    pub fn at(&self, axis: Axis) -> Decimal {
        match axis {
            Axis::Width => self.x,
            Axis::Height => self.y,
            Axis::Depth => self.z,
        }
    }

    /// Returns a copy of `self` moved by `amount` along `axis`.
    pub fn offset(mut self, axis: Axis, amount: Decimal) -> Self {
        match axis {
            Axis::Width => self.x += amount,
            Axis::Height => self.y += amount,
            Axis::Depth => self.z += amount,
        }
        self
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x:{},y:{},z:{}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn offset_moves_a_single_coordinate() {
        let p = Position::new(dec!(1), dec!(2), dec!(3));
        assert_eq!(p.offset(Axis::Width, dec!(0.5)), Position::new(dec!(1.5), dec!(2), dec!(3)));
        assert_eq!(p.offset(Axis::Height, dec!(4)), Position::new(dec!(1), dec!(6), dec!(3)));
        assert_eq!(p.offset(Axis::Depth, dec!(7.874)), Position::new(dec!(1), dec!(2), dec!(10.874)));
    }

    #[test]
    fn display() {
        let p = Position::new(dec!(7.874), dec!(0), dec!(1.25));
        assert_eq!(p.to_string(), "x:7.874,y:0,z:1.25");
        assert_eq!(Position::ORIGIN, Position::default());
    }
}
