use std::cmp::Reverse;
use std::time::Duration;

use itertools::Itertools;
use log::warn;
use rust_decimal::Decimal;

use crate::algorithms::AlgorithmType;
use crate::entities::Item;

/// Outcome of running a single packing algorithm on a single container.
#[derive(Clone, Debug)]
pub struct AlgorithmPackingResult {
    algorithm: AlgorithmType,
    packed_items: Vec<Item>,
    unpacked_items: Vec<Item>,
    pack_time: Duration,
    percent_container_volume_packed: Decimal,
    percent_item_volume_packed: Decimal,
}

impl AlgorithmPackingResult {
    /// Creates a result for the given outcome. Timing and utilization are filled in by [`AlgorithmPackingResult::measured`].
    pub fn new(algorithm: AlgorithmType, packed_items: Vec<Item>, unpacked_items: Vec<Item>) -> Self {
        Self {
            algorithm,
            packed_items,
            unpacked_items,
            pack_time: Duration::ZERO,
            percent_container_volume_packed: Decimal::ZERO,
            percent_item_volume_packed: Decimal::ZERO,
        }
    }

    /// Completes the result with the time the run took and the utilization of a container with volume `container_volume`.
    pub fn measured(self, pack_time: Duration, container_volume: Decimal) -> Self {
        let packed_volume = volume_of(&self.packed_items);
        let unpacked_volume = volume_of(&self.unpacked_items);
        Self {
            pack_time,
            percent_container_volume_packed: percentage(packed_volume, container_volume),
            percent_item_volume_packed: percentage(packed_volume, packed_volume + unpacked_volume),
            ..self
        }
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.algorithm
    }

    pub fn algorithm_id(&self) -> u32 {
        self.algorithm.id()
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn packed_items(&self) -> &[Item] {
        &self.packed_items
    }

    pub fn unpacked_items(&self) -> &[Item] {
        &self.unpacked_items
    }

    /// True if every item was packed
    pub fn is_complete_pack(&self) -> bool {
        self.unpacked_items.is_empty()
    }

    pub fn pack_time(&self) -> Duration {
        self.pack_time
    }

    pub fn pack_time_ms(&self) -> f64 {
        self.pack_time.as_secs_f64() * 1000.0
    }

    /// Percentage of the container volume occupied by packed items, rounded to two decimals
    pub fn percent_container_volume_packed(&self) -> Decimal {
        self.percent_container_volume_packed
    }

    /// Percentage of the total item volume that was packed, rounded to two decimals
    pub fn percent_item_volume_packed(&self) -> Decimal {
        self.percent_item_volume_packed
    }
}

/// The results of all requested algorithms for a single container.
#[derive(Clone, Debug)]
pub struct ContainerPackingResult {
    container_id: String,
    algorithm_packing_results: Vec<AlgorithmPackingResult>,
}

impl ContainerPackingResult {
    /// Bundles the results for a container. They are stored sorted by algorithm name.
    pub fn new(container_id: String, mut algorithm_packing_results: Vec<AlgorithmPackingResult>) -> Self {
        algorithm_packing_results.sort_by_key(|r| r.algorithm_name());
        Self {
            container_id,
            algorithm_packing_results,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn algorithm_packing_results(&self) -> &[AlgorithmPackingResult] {
        &self.algorithm_packing_results
    }

    /// The result that packed the most items.
    /// Ties are broken by the highest container utilization, then by algorithm name.
    pub fn best(&self) -> Option<&AlgorithmPackingResult> {
        self.algorithm_packing_results
            .iter()
            .sorted_by_key(|r| {
                (
                    Reverse(r.packed_items.len()),
                    Reverse(r.percent_container_volume_packed),
                )
            })
            .next()
    }
}

fn volume_of(items: &[Item]) -> Decimal {
    items.iter().map(Item::volume).sum()
}

/// `part / whole` as a percentage rounded to two decimals. Zero when `whole` is zero.
fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    match part.checked_div(whole) {
        Some(fraction) => (fraction * Decimal::ONE_HUNDRED).round_dp(2),
        None => {
            warn!("[RESULT] cannot express {part} as a percentage of {whole}, reporting 0");
            Decimal::ZERO
        }
    }
}
