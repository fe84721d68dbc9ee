pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use geo_enums::{Axis, RotationType};
#[doc(inline)]
pub use primitives::{Cuboid, Dimensions, Position};
