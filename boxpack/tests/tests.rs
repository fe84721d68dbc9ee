#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use itertools::Itertools;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use boxpack::algorithms::AlgorithmType;
    use boxpack::entities::{AlgorithmPackingResult, Bin, ContainerPackingResult, Item};
    use boxpack::error::PackingError;
    use boxpack::geometry::RotationType;
    use boxpack::geometry::geo_traits::CollidesWith;
    use boxpack::io::ext_repr::ExtPackingRequest;
    use boxpack::io::import;
    use boxpack::service;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn cube_bin(name: &str, size: Decimal) -> Bin {
        Bin::new(name, size, size, size)
    }

    fn cube(id: u64, size: Decimal, quantity: usize) -> Item {
        Item::new(id, size, size, size, quantity)
    }

    /// Packs with the pivot packer only and returns the single result of the single container.
    fn pack_single(bin: Bin, items: Vec<Item>) -> AlgorithmPackingResult {
        let results = service::pack(&[bin], &items, &[AlgorithmType::Sharp3dPacking.id()]).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm_packing_results().len(), 1);
        results[0].algorithm_packing_results()[0].clone()
    }

    fn read_request(path: &str) -> ExtPackingRequest {
        let file = File::open(Path::new(path)).unwrap();
        serde_json::from_reader(BufReader::new(file)).unwrap()
    }

    fn check_result(container: &Bin, items: &[Item], result: &AlgorithmPackingResult) {
        // conservation
        let n_units = items.iter().map(|i| i.quantity).sum::<usize>();
        assert_eq!(result.packed_items().len() + result.unpacked_items().len(), n_units);
        let ids = result
            .packed_items()
            .iter()
            .chain(result.unpacked_items())
            .map(|i| i.id)
            .sorted()
            .collect_vec();
        assert!(ids.iter().tuple_windows().all(|(a, b)| a < b), "duplicate ids: {ids:?}");

        // containment
        let capacity = container.capacity();
        assert!(result.packed_items().iter().all(|i| i.cuboid().fits_within(&capacity)));

        // no overlap
        for (a, b) in result.packed_items().iter().tuple_combinations() {
            assert!(!a.collides_with(b), "{a} collides with {b}");
        }

        // metric bounds
        for percent in [
            result.percent_container_volume_packed(),
            result.percent_item_volume_packed(),
        ] {
            assert!(percent >= Decimal::ZERO && percent <= Decimal::ONE_HUNDRED);
        }
        assert_eq!(result.is_complete_pack(), result.unpacked_items().is_empty());
    }

    #[test]
    fn scenario_single_item_fits() {
        init_logger();
        let result = pack_single(cube_bin("A", dec!(10)), vec![cube(1, dec!(5), 1)]);
        assert_eq!(result.packed_items().len(), 1);
        assert_eq!(result.unpacked_items().len(), 0);
        assert_eq!(result.percent_container_volume_packed(), dec!(12.5));
        assert_eq!(result.percent_item_volume_packed(), dec!(100));
        assert!(result.is_complete_pack());
    }

    #[test]
    fn scenario_only_one_of_two_fits() {
        let result = pack_single(cube_bin("B", dec!(10)), vec![cube(1, dec!(6), 1), cube(2, dec!(6), 1)]);
        assert_eq!(result.packed_items().len(), 1);
        assert_eq!(result.unpacked_items().len(), 1);
        assert_eq!(result.percent_item_volume_packed(), dec!(50));
    }

    #[test]
    fn scenario_item_too_large() {
        let result = pack_single(cube_bin("C", dec!(4)), vec![cube(1, dec!(5), 1)]);
        assert_eq!(result.packed_items().len(), 0);
        assert_eq!(result.unpacked_items().len(), 1);
        assert_eq!(result.percent_container_volume_packed(), dec!(0));
        assert!(!result.is_complete_pack());
    }

    #[test]
    fn scenario_quantity_is_expanded() {
        let result = pack_single(cube_bin("D", dec!(100)), vec![Item::new(7, dec!(3), dec!(2), dec!(1), 3)]);
        assert_eq!(result.packed_items().len(), 3);
        let ids = result.packed_items().iter().map(|i| i.id).sorted().collect_vec();
        assert_eq!(ids, vec![7, 8, 9]);
        assert!(result.packed_items().iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn scenario_invalid_algorithm() {
        let err = service::pack(&[cube_bin("E", dec!(10))], &[cube(1, dec!(1), 1)], &[999]).unwrap_err();
        assert_eq!(err.downcast_ref::<PackingError>(), Some(&PackingError::InvalidAlgorithm(999)));
        assert_eq!(err.to_string(), "invalid algorithm type: 999");
    }

    #[test]
    fn volume_is_invariant_under_rotation() {
        let item = Item::new(1, dec!(1.5), dec!(2.25), dec!(4), 1);
        for rotation in RotationType::ALL {
            let dims = item.dimensions().rotated(rotation);
            assert_eq!(dims.volume(), item.volume());
        }
    }

    #[test_case(1; "one")]
    #[test_case(10; "ten")]
    #[test_case(27; "full")]
    #[test_case(28; "one too many")]
    #[test_case(30; "three too many")]
    fn identical_cubes_fill_the_grid(n_cubes: usize) {
        let result = pack_single(cube_bin("grid", dec!(6)), vec![cube(1, dec!(2), n_cubes)]);
        assert_eq!(result.packed_items().len(), n_cubes.min(27));
        assert_eq!(result.unpacked_items().len(), n_cubes.saturating_sub(27));
    }

    #[test]
    fn fewer_items_never_increase_the_unfitted_count() {
        let container = cube_bin("box", dec!(10));
        let items = vec![cube(1, dec!(6), 1), cube(2, dec!(5), 1), cube(3, dec!(4), 2)];

        let n_unfitted = (1..=items.len())
            .map(|n| pack_single(container.clone(), items[..n].to_vec()).unpacked_items().len())
            .collect_vec();
        assert!(n_unfitted.iter().tuple_windows().all(|(a, b)| a <= b), "{n_unfitted:?}");
    }

    #[test]
    fn deterministic() {
        let request = read_request("../assets/mixed.json");
        let (bins, items, ids) = import::import(&request).unwrap();
        let first = service::pack(&bins, &items, &ids).unwrap();
        let second = service::pack(&bins, &items, &ids).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.container_id(), b.container_id());
            let a = &a.algorithm_packing_results()[0];
            let b = &b.algorithm_packing_results()[0];
            assert_eq!(a.packed_items(), b.packed_items());
            assert_eq!(a.unpacked_items(), b.unpacked_items());
        }
    }

    #[test_case("../assets/demo_request.json"; "demo request")]
    #[test_case("../assets/cubes.json"; "cubes")]
    #[test_case("../assets/mixed.json"; "mixed")]
    fn test_request(request_path: &str) {
        init_logger();
        let request = read_request(request_path);
        let (bins, items, ids) = import::import(&request).unwrap();
        let results: Vec<ContainerPackingResult> = service::pack(&bins, &items, &ids).unwrap();

        assert_eq!(results.len(), bins.len());
        for container_result in &results {
            let container = bins
                .iter()
                .find(|b| b.name == container_result.container_id())
                .unwrap();
            assert_eq!(container_result.algorithm_packing_results().len(), ids.len());
            for result in container_result.algorithm_packing_results() {
                check_result(container, &items, result);
            }
            assert!(container_result.best().is_some());
        }
        // scheduled smallest container first
        let volumes = results
            .iter()
            .map(|r| bins.iter().find(|b| b.name == r.container_id()).unwrap().volume())
            .collect_vec();
        assert!(volumes.iter().tuple_windows().all(|(a, b)| a <= b));
    }
}
