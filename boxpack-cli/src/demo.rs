use boxpack::algorithms::AlgorithmType;
use boxpack::io::ext_repr::{ExtContainer, ExtItem, ExtPackingRequest};
use itertools::Itertools;
use rust_decimal::Decimal;

/// Stem of the solution file written for the demonstration request
pub const DEMO_STEM: &str = "demo";

/// Envelopes and boxes as (id, width, height, length), dimensions in ten-thousandths of an inch
const CONTAINERS: [(&str, i64, i64, i64); 7] = [
    ("small-envelope", 115_000, 61_250, 2_500),
    ("large-envelope", 150_000, 120_000, 7_500),
    ("small-box", 86_250, 53_750, 16_250),
    ("medium-box", 110_000, 85_000, 55_000),
    ("medium-2-box", 136_250, 118_750, 33_750),
    ("large-box", 120_000, 120_000, 55_000),
    ("large-2-box", 236_875, 117_500, 30_000),
];

/// Request packing two kinds of parcels in every envelope and box of the catalogue
pub fn demo_request() -> ExtPackingRequest {
    let containers = CONTAINERS
        .iter()
        .map(|&(id, width, height, length)| ExtContainer {
            id: id.to_string(),
            width: Decimal::new(width, 4),
            height: Decimal::new(height, 4),
            length: Decimal::new(length, 4),
        })
        .collect_vec();

    let items_to_pack = vec![
        ExtItem {
            id: 1,
            length: Decimal::new(39_370, 4),
            width: Decimal::new(19_685, 4),
            height: Decimal::new(19_685, 4),
            quantity: 3,
        },
        ExtItem {
            id: 2,
            length: Decimal::new(78_740, 4),
            width: Decimal::new(39_370, 4),
            height: Decimal::new(19_685, 4),
            quantity: 6,
        },
    ];

    ExtPackingRequest {
        containers,
        items_to_pack,
        algorithm_type_ids: vec![AlgorithmType::Sharp3dPacking.id()],
    }
}
