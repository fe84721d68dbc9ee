use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::algorithms::{AlgorithmRegistry, PackingAlgorithm};
use crate::entities::{AlgorithmPackingResult, Bin, ContainerPackingResult, Item};

/// Packs `items` into each of the `containers` with every algorithm in `algorithm_ids`, using the default [`AlgorithmRegistry`].
///
/// See [`pack_with`].
pub fn pack(containers: &[Bin], items: &[Item], algorithm_ids: &[u32]) -> Result<Vec<ContainerPackingResult>> {
    pack_with(&AlgorithmRegistry::default(), containers, items, algorithm_ids)
}

/// Packs `items` into each of the `containers` with every algorithm in `algorithm_ids`.
///
/// Containers are handled independently of each other, smallest volume first, and so are the algorithms within a container.
/// Every run works on an empty copy of the container and its own copy of the items, the inputs are never modified.
/// Returns one [`ContainerPackingResult`] per container, in the order in which they were scheduled.
///
/// All identifiers are resolved before any packing starts.
/// If one of them cannot be resolved, the error is returned (downcastable to [`PackingError`](crate::error::PackingError)) and nothing is packed.
pub fn pack_with(
    registry: &AlgorithmRegistry,
    containers: &[Bin],
    items: &[Item],
    algorithm_ids: &[u32],
) -> Result<Vec<ContainerPackingResult>> {
    let algorithms = registry.resolve_all(algorithm_ids)?;

    info!(
        "[PACK] packing {} items into {} containers with {} algorithms",
        items.iter().fold(0usize, |n, i| n.saturating_add(i.quantity)),
        containers.len(),
        algorithms.len()
    );

    let results = containers
        .iter()
        .sorted_by_key(|c| c.volume())
        .collect_vec()
        .into_par_iter()
        .map(|container| pack_container(container, items, &algorithms))
        .collect::<Vec<ContainerPackingResult>>();

    Ok(results)
}

fn pack_container(
    container: &Bin,
    items: &[Item],
    algorithms: &[Arc<dyn PackingAlgorithm>],
) -> ContainerPackingResult {
    let results = algorithms
        .par_iter()
        .map(|algorithm| run_algorithm(algorithm.as_ref(), container, items))
        .collect::<Vec<AlgorithmPackingResult>>();

    ContainerPackingResult::new(container.name.clone(), results)
}

/// Runs a single algorithm on a private copy of the container and the items, and measures it.
fn run_algorithm(algorithm: &dyn PackingAlgorithm, container: &Bin, items: &[Item]) -> AlgorithmPackingResult {
    let mut bin = container.empty_copy();
    let items = items.iter().map(Item::pristine_copy).collect_vec();

    let start = Instant::now();
    let result = algorithm.run(&mut bin, items);
    let elapsed = start.elapsed();

    let result = result.measured(elapsed, bin.volume());
    debug!(
        "[PACK] {} in {}: {} packed, {} unpacked, {}% of the container in {:.3}ms",
        result.algorithm(),
        bin.name,
        result.packed_items().len(),
        result.unpacked_items().len(),
        result.percent_container_volume_packed(),
        result.pack_time_ms()
    );
    result
}
