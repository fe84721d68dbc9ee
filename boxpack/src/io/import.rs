use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use rust_decimal::Decimal;

use crate::entities::{Bin, Item};
use crate::io::ext_repr::{ExtContainer, ExtItem, ExtPackingRequest};

/// Maximum number of units (items after expanding their quantities) a single request may hold
pub const MAX_UNITS: usize = 100_000;

/// Converts a request into the containers, items and algorithm identifiers to pass to [`service::pack`](crate::service::pack).
///
/// The request is validated along the way: it should contain at least one container, item and algorithm,
/// container identifiers should be unique, all dimensions positive and all quantities at least 1.
/// The request is also bounded so that packing it cannot overflow:
/// at most [`MAX_UNITS`] units, a total item volume that fits in a [`Decimal`],
/// and no dimension so large that twice of it does not.
/// Algorithm identifiers are resolved later on, by the [`AlgorithmRegistry`](crate::algorithms::AlgorithmRegistry).
pub fn import(ext_request: &ExtPackingRequest) -> Result<(Vec<Bin>, Vec<Item>, Vec<u32>)> {
    ensure!(!ext_request.containers.is_empty(), "request contains no containers");
    ensure!(!ext_request.items_to_pack.is_empty(), "request contains no items to pack");
    ensure!(!ext_request.algorithm_type_ids.is_empty(), "request contains no algorithm type ids");

    let duplicate_ids = ext_request.containers.iter().map(|c| &c.id).duplicates().collect_vec();
    ensure!(
        duplicate_ids.is_empty(),
        "container ids should be unique, duplicates: {:?}",
        duplicate_ids
    );

    let bins = ext_request
        .containers
        .iter()
        .map(import_container)
        .collect::<Result<Vec<Bin>>>()?;

    let items = ext_request
        .items_to_pack
        .iter()
        .map(import_item)
        .collect::<Result<Vec<Item>>>()?;

    let n_units = items
        .iter()
        .try_fold(0usize, |n, i| n.checked_add(i.quantity))
        .filter(|n| *n <= MAX_UNITS);
    ensure!(n_units.is_some(), "request holds more than {MAX_UNITS} units to pack");

    let total_volume = items.iter().try_fold(Decimal::ZERO, |total, i| {
        let volume = checked_volume(i.length, i.width, i.height)?;
        total.checked_add(volume.checked_mul(Decimal::from(i.quantity))?)
    });
    ensure!(total_volume.is_some(), "total volume of the items to pack is too large");

    //pivots lie at most one item extent beyond the far side of a bin
    let max_dim = bins
        .iter()
        .flat_map(|b| [b.width, b.height, b.length])
        .chain(items.iter().flat_map(|i| [i.length, i.width, i.height]))
        .max()
        .unwrap_or(Decimal::ZERO);
    ensure!(
        max_dim.checked_add(max_dim).is_some(),
        "dimension {max_dim} is too large"
    );

    Ok((bins, items, ext_request.algorithm_type_ids.clone()))
}

pub fn import_container(ext_cont: &ExtContainer) -> Result<Bin> {
    ensure_positive(&[ext_cont.width, ext_cont.height, ext_cont.length])
        .with_context(|| format!("invalid container {}", ext_cont.id))?;
    ensure!(
        checked_volume(ext_cont.width, ext_cont.height, ext_cont.length).is_some(),
        "volume of container {} is too large",
        ext_cont.id
    );
    Ok(Bin::new(
        ext_cont.id.clone(),
        ext_cont.width,
        ext_cont.height,
        ext_cont.length,
    ))
}

pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    ensure_positive(&[ext_item.length, ext_item.width, ext_item.height])
        .with_context(|| format!("invalid item {}", ext_item.id))?;
    ensure!(ext_item.quantity >= 1, "item {} has quantity 0", ext_item.id);
    ensure!(
        checked_volume(ext_item.length, ext_item.width, ext_item.height).is_some(),
        "volume of item {} is too large",
        ext_item.id
    );
    Ok(Item::new(
        ext_item.id,
        ext_item.length,
        ext_item.width,
        ext_item.height,
        ext_item.quantity,
    ))
}

fn checked_volume(a: Decimal, b: Decimal, c: Decimal) -> Option<Decimal> {
    a.checked_mul(b)?.checked_mul(c)
}

fn ensure_positive(dims: &[Decimal]) -> Result<()> {
    ensure!(
        dims.iter().all(|d| *d > Decimal::ZERO),
        "all dimensions should be positive: {:?}",
        dims
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn request() -> ExtPackingRequest {
        ExtPackingRequest {
            containers: vec![
                ExtContainer { id: "a".into(), width: dec!(10), height: dec!(5), length: dec!(8) },
                ExtContainer { id: "b".into(), width: dec!(4), height: dec!(4), length: dec!(4) },
            ],
            items_to_pack: vec![ExtItem { id: 1, length: dec!(1), width: dec!(2), height: dec!(3), quantity: 2 }],
            algorithm_type_ids: vec![2],
        }
    }

    #[test]
    fn valid_request() {
        let (bins, items, ids) = import(&request()).unwrap();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].name, "a");
        assert_eq!(bins[0].length, dec!(8));
        assert_eq!(items, vec![Item::new(1, dec!(1), dec!(2), dec!(3), 2)]);
        assert_eq!(ids, vec![2]);
    }

    #[test_case(|r: &mut ExtPackingRequest| r.containers.clear(); "no containers")]
    #[test_case(|r: &mut ExtPackingRequest| r.items_to_pack.clear(); "no items")]
    #[test_case(|r: &mut ExtPackingRequest| r.algorithm_type_ids.clear(); "no algorithms")]
    #[test_case(|r: &mut ExtPackingRequest| r.containers[1].id = "a".into(); "duplicate container ids")]
    #[test_case(|r: &mut ExtPackingRequest| r.containers[0].height = dec!(0); "flat container")]
    #[test_case(|r: &mut ExtPackingRequest| r.items_to_pack[0].width = dec!(-1); "negative item width")]
    #[test_case(|r: &mut ExtPackingRequest| r.items_to_pack[0].quantity = 0; "zero quantity")]
    #[test_case(|r: &mut ExtPackingRequest| r.items_to_pack[0].quantity = usize::MAX; "quantity beyond the unit limit")]
    #[test_case(|r: &mut ExtPackingRequest| {
        r.items_to_pack.push(r.items_to_pack[0].clone());
        r.items_to_pack[0].quantity = MAX_UNITS;
    }; "unit limit exceeded across items")]
    #[test_case(|r: &mut ExtPackingRequest| {
        r.containers[0].width = dec!(10000000000);
        r.containers[0].height = dec!(10000000000);
        r.containers[0].length = dec!(10000000000);
    }; "container volume overflows")]
    #[test_case(|r: &mut ExtPackingRequest| {
        r.items_to_pack[0].length = dec!(10000000000);
        r.items_to_pack[0].width = dec!(10000000000);
        r.items_to_pack[0].height = dec!(10000000000);
    }; "item volume overflows")]
    #[test_case(|r: &mut ExtPackingRequest| {
        r.items_to_pack[0].length = dec!(4000000000);
        r.items_to_pack[0].width = dec!(4000000000);
        r.items_to_pack[0].height = dec!(4000000000);
    }; "total item volume overflows")]
    #[test_case(|r: &mut ExtPackingRequest| {
        r.items_to_pack[0].length = dec!(70000000000000000000000000000);
        r.items_to_pack[0].width = dec!(0.0000000001);
        r.items_to_pack[0].height = dec!(0.0000000001);
    }; "dimension too large to offset")]
    fn invalid_request(corrupt: fn(&mut ExtPackingRequest)) {
        let mut request = request();
        corrupt(&mut request);
        assert!(import(&request).is_err());
    }

    #[test]
    fn oversized_json_requests_are_rejected() {
        let huge_dims = r#"{
            "containers": [{ "id": "a", "width": 10000000000, "height": 10000000000, "length": 10000000000 }],
            "items_to_pack": [{ "id": 1, "length": 10000000000, "width": 10000000000, "height": 10000000000, "quantity": 1 }],
            "algorithm_type_ids": [2]
        }"#;
        let huge_quantity = r#"{
            "containers": [{ "id": "a", "width": 10, "height": 10, "length": 10 }],
            "items_to_pack": [{ "id": 1, "length": 1, "width": 1, "height": 1, "quantity": 18446744073709551615 }],
            "algorithm_type_ids": [2]
        }"#;
        for json in [huge_dims, huge_quantity] {
            let request: ExtPackingRequest = serde_json::from_str(json).unwrap();
            assert!(import(&request).is_err());
        }
    }

    #[test]
    fn largest_accepted_request_packs() {
        let mut request = request();
        request.items_to_pack[0].quantity = MAX_UNITS - 1;
        request.items_to_pack[0].length = dec!(1000);
        let (bins, items, ids) = import(&request).unwrap();
        assert_eq!(items[0].quantity, MAX_UNITS - 1);

        // nothing fits, so every unit is rejected at the origin of the empty bins
        let results = crate::service::pack(&bins, &items, &ids).unwrap();
        assert!(results.iter().all(|r| r.algorithm_packing_results()[0].unpacked_items().len() == MAX_UNITS - 1));
    }

    #[test]
    fn unknown_algorithm_ids_pass_through() {
        let mut request = request();
        request.algorithm_type_ids = vec![999];
        assert_eq!(import(&request).unwrap().2, vec![999]);
    }
}
