use itertools::Itertools;

use crate::entities::{AlgorithmPackingResult, ContainerPackingResult, Item};
use crate::geometry::Axis;
use crate::io::ext_repr::{ExtAlgorithmPackingResult, ExtContainerPackingResult, ExtItem, ExtPackedItem};

/// Exports the results of [`service::pack`](crate::service::pack)
pub fn export(results: &[ContainerPackingResult]) -> Vec<ExtContainerPackingResult> {
    results.iter().map(export_container_result).collect_vec()
}

pub fn export_container_result(result: &ContainerPackingResult) -> ExtContainerPackingResult {
    ExtContainerPackingResult {
        container_id: result.container_id().to_string(),
        algorithm_packing_results: result
            .algorithm_packing_results()
            .iter()
            .map(export_algorithm_result)
            .collect_vec(),
    }
}

pub fn export_algorithm_result(result: &AlgorithmPackingResult) -> ExtAlgorithmPackingResult {
    ExtAlgorithmPackingResult {
        algorithm_id: result.algorithm_id(),
        algorithm_name: result.algorithm_name().to_string(),
        is_complete_pack: result.is_complete_pack(),
        packed_items: result.packed_items().iter().map(export_packed_item).collect_vec(),
        unpacked_items: result.unpacked_items().iter().map(export_item).collect_vec(),
        pack_time_ms: result.pack_time_ms(),
        percent_container_volume_packed: result.percent_container_volume_packed(),
        percent_item_volume_packed: result.percent_item_volume_packed(),
    }
}

pub fn export_item(item: &Item) -> ExtItem {
    ExtItem {
        id: item.id,
        length: item.length,
        width: item.width,
        height: item.height,
        quantity: item.quantity,
    }
}

pub fn export_packed_item(item: &Item) -> ExtPackedItem {
    ExtPackedItem {
        id: item.id,
        length: item.length,
        width: item.width,
        height: item.height,
        position: item.position,
        rotation: item.rotation,
        packed_width: item.rotated_extent(Axis::Width),
        packed_height: item.rotated_extent(Axis::Height),
        packed_length: item.rotated_extent(Axis::Depth),
    }
}
