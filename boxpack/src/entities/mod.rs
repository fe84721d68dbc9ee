mod bin;
mod item;
mod packing_result;
mod placement;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use packing_result::AlgorithmPackingResult;

#[doc(inline)]
pub use packing_result::ContainerPackingResult;
