use itertools::Itertools;
use log::error;

use crate::entities::Bin;
use crate::geometry::geo_traits::CollidesWith;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every packed item lies within the bin, no two packed items collide and together they take up no more than the bin's volume.
pub fn bin_is_valid(bin: &Bin) -> bool {
    packed_items_contained(bin) && packed_items_collision_free(bin) && packed_volume_within_capacity(bin)
}

pub fn packed_items_contained(bin: &Bin) -> bool {
    let capacity = bin.capacity();
    match bin.packed_items().iter().find(|i| !i.cuboid().fits_within(&capacity)) {
        Some(item) => {
            error!("[ASSERT] item {item} exceeds {bin}");
            false
        }
        None => true,
    }
}

pub fn packed_items_collision_free(bin: &Bin) -> bool {
    let cuboids = bin.packed_items().iter().map(|i| (i.id, i.cuboid())).collect_vec();
    let collision = cuboids
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.1.collides_with(&b.1));

    match collision {
        Some(((id1, _), (id2, _))) => {
            error!("[ASSERT] items {id1} and {id2} collide in {}", bin.name);
            false
        }
        None => true,
    }
}

pub fn packed_volume_within_capacity(bin: &Bin) -> bool {
    let (packed, available) = (bin.packed_volume(), bin.volume());
    if packed > available {
        error!("[ASSERT] {} holds {packed} of packed volume, exceeding its {available}", bin.name);
    }
    packed <= available
}

/// No item was lost or duplicated: the bin holds `n_expected` items, packed or unfitted.
pub fn items_conserved(bin: &Bin, n_expected: usize) -> bool {
    let n_present = bin.packed_items().len() + bin.unfitted_items().len();
    if n_present != n_expected {
        error!(
            "[ASSERT] {} holds {n_present} items, expected {n_expected}",
            bin.name
        );
    }
    n_present == n_expected
}
