use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::geometry::{Position, RotationType};

/// External representation of a packing request: containers, items and the algorithms to pack them with.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackingRequest {
    pub containers: Vec<ExtContainer>,
    pub items_to_pack: Vec<ExtItem>,
    /// Identifiers of the algorithms, see [`AlgorithmType`](crate::algorithms::AlgorithmType)
    pub algorithm_type_ids: Vec<u32>,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    /// Unique identifier of the container
    pub id: String,
    pub width: Decimal,
    pub height: Decimal,
    pub length: Decimal,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    pub id: u64,
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    /// Number of identical units to pack
    pub quantity: usize,
}

/// External representation of a [`ContainerPackingResult`](crate::entities::ContainerPackingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainerPackingResult {
    pub container_id: String,
    pub algorithm_packing_results: Vec<ExtAlgorithmPackingResult>,
}

/// External representation of an [`AlgorithmPackingResult`](crate::entities::AlgorithmPackingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAlgorithmPackingResult {
    pub algorithm_id: u32,
    pub algorithm_name: String,
    pub is_complete_pack: bool,
    pub packed_items: Vec<ExtPackedItem>,
    pub unpacked_items: Vec<ExtItem>,
    pub pack_time_ms: f64,
    pub percent_container_volume_packed: Decimal,
    pub percent_item_volume_packed: Decimal,
}

/// An item as it was packed in a container
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackedItem {
    pub id: u64,
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    /// Corner of the item closest to the origin of the container
    pub position: Position,
    pub rotation: RotationType,
    /// Extent of the item along the width axis of the container
    pub packed_width: Decimal,
    /// Extent of the item along the height axis of the container
    pub packed_height: Decimal,
    /// Extent of the item along the depth (length) axis of the container
    pub packed_length: Decimal,
}
