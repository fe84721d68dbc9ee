mod algorithm_type;
mod pivot;
mod registry;

#[doc(inline)]
pub use algorithm_type::AlgorithmType;
#[doc(inline)]
pub use pivot::{PivotPacker, SortOrder, expand_items};
#[doc(inline)]
pub use registry::AlgorithmRegistry;

use crate::entities::{AlgorithmPackingResult, Bin, Item};

/// Common contract of all packing algorithms.
///
/// An algorithm receives its own copy of the items to pack and packs as many of them as it can into `bin`.
/// Afterwards, the packed and unfitted items of the bin are the authoritative outcome of the run.
/// Every item (after expanding quantities) must end up either packed or unfitted,
/// and running the same algorithm on the same input must yield the same result.
pub trait PackingAlgorithm: Send + Sync {
    /// The identity reported in every result of this algorithm
    fn algorithm_type(&self) -> AlgorithmType;

    fn run(&self, bin: &mut Bin, items: Vec<Item>) -> AlgorithmPackingResult;
}
