use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

use crate::algorithms::{AlgorithmType, PackingAlgorithm};
use crate::entities::{AlgorithmPackingResult, Bin, Item};
use crate::geometry::{Axis, Position};
use crate::util::PivotConfig;
use crate::util::assertions;

/// Order in which items are offered to the bin during a single pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending volume
    SmallerFirst,
    /// Descending volume
    BiggerFirst,
}

/// Greedy pivot-rotation packer.
///
/// Items are offered to the bin one by one. The first item is placed at the origin.
/// Every next item is tried at the pivots of the items already packed:
/// for each axis, the position right behind a packed item along that axis.
/// At each pivot the bin tries all six orientations, and the first valid combination is kept.
/// Items for which no pivot works are unfitted; nothing is ever moved once packed.
#[derive(Clone, Debug, Default)]
pub struct PivotPacker {
    pub config: PivotConfig,
}

impl PivotPacker {
    pub const ALGORITHM: AlgorithmType = AlgorithmType::Sharp3dPacking;

    pub fn new(config: PivotConfig) -> Self {
        Self { config }
    }

    /// Packs the (already expanded) `units` into `bin` in a single pass, offering them in `order`.
    /// Returns the number of placement attempts made.
    pub fn run_pass(&self, bin: &mut Bin, units: &[Item], order: SortOrder) -> usize {
        let sorted = match order {
            SortOrder::SmallerFirst => units.iter().sorted_by_key(|i| i.volume()).collect_vec(),
            SortOrder::BiggerFirst => units
                .iter()
                .sorted_by_key(|i| Reverse(i.volume()))
                .collect_vec(),
        };

        let mut n_attempts = 0;
        for item in sorted {
            let packed = pack_to_bin(bin, item, &mut n_attempts);
            debug!(
                "[PIVOT] item {} {} in {}",
                item.id,
                if packed { "packed" } else { "unfitted" },
                bin.name
            );
        }
        n_attempts
    }
}

impl PackingAlgorithm for PivotPacker {
    fn algorithm_type(&self) -> AlgorithmType {
        Self::ALGORITHM
    }

    fn run(&self, bin: &mut Bin, mut items: Vec<Item>) -> AlgorithmPackingResult {
        let units = expand_items(&mut items);
        let n_expected = units.len() + bin.packed_items().len() + bin.unfitted_items().len();
        let initial_bin = bin.clone();

        let mut n_attempts = self.run_pass(bin, &units, SortOrder::SmallerFirst);

        if self.config.two_pass && !bin.unfitted_items().is_empty() {
            let mut bigger_first = initial_bin;
            n_attempts += self.run_pass(&mut bigger_first, &units, SortOrder::BiggerFirst);
            debug!(
                "[PIVOT] smaller first packed {}, bigger first packed {}",
                bin.packed_items().len(),
                bigger_first.packed_items().len()
            );
            //ties go to the smaller first pass
            if bigger_first.packed_items().len() > bin.packed_items().len() {
                *bin = bigger_first;
            }
        }

        debug_assert!(assertions::bin_is_valid(bin));
        debug_assert!(assertions::items_conserved(bin, n_expected));

        info!(
            "[PIVOT] packed {}/{} items in {} ({} placement attempts)",
            bin.packed_items().len(),
            units.len(),
            bin.name,
            n_attempts.separate_with_commas()
        );

        AlgorithmPackingResult::new(
            Self::ALGORITHM,
            bin.packed_items().to_vec(),
            bin.unfitted_items().to_vec(),
        )
    }
}

/// Splits every item into units of quantity 1.
///
/// The units receive sequential IDs, starting from the lowest ID among `items` and counting on across items in input order.
/// The quantity of every item in `items` is set to 1 afterwards.
pub fn expand_items(items: &mut [Item]) -> Vec<Item> {
    let mut id = items.iter().map(|i| i.id).min().unwrap_or(0);
    let mut units = Vec::with_capacity(items.iter().fold(0usize, |n, i| n.saturating_add(i.quantity)));

    for item in items.iter_mut() {
        for _ in 0..item.quantity {
            units.push(item.unit_with_id(id));
            id += 1;
        }
        item.quantity = 1;
    }
    units
}

/// Tries to pack `item` in `bin`, registering it as unfitted if no valid placement exists.
fn pack_to_bin(bin: &mut Bin, item: &Item, n_attempts: &mut usize) -> bool {
    let placement = match bin.is_empty() {
        true => {
            *n_attempts += 1;
            bin.find_placement(item, Position::ORIGIN)
        }
        false => Axis::ALL
            .into_iter()
            .flat_map(|axis| bin.packed_items().iter().map(move |pi| pi.rotate_position(axis)))
            .find_map(|pivot| {
                *n_attempts += 1;
                bin.find_placement(item, pivot)
            }),
    };

    match placement {
        Some(placement) => {
            bin.place(item, placement);
            true
        }
        None => {
            bin.reject(item.clone());
            false
        }
    }
}
