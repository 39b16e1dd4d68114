//! Comprehensive test suite for vox_core
//!
//! Each section pins down the observable behaviour of one public type or
//! function, so that the suite reads as a description of the crate.
//!
//! # Test Categories
//!
//! 1. **Vector Algebra** - Construction, accessors, arithmetic laws, equality
//! 2. **Regions** - Validation, containment, derived regions
//! 3. **Voxels and Controllers** - Density conventions and thresholds
//! 4. **Cell Math** - Cube indexing, edge crossings, per-cell triangulation
//! 5. **Table Invariants** - Marching cubes table correctness
//! 6. **Property Tests** - Algebraic laws over random inputs

use vox_core::marching_cubes::*;
use vox_core::prelude::*;

// =============================================================================
// SECTION 1: Vector Algebra Tests
// =============================================================================

mod vector_tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Construction and Accessors
    // -------------------------------------------------------------------------

    #[test]
    fn should_expose_components() {
        let v = Vector3i::new(7, 8, 9);
        assert_eq!(v.x(), 7);
        assert_eq!(v.y(), 8);
        assert_eq!(v.z(), 9);
        assert_eq!(v.as_array(), [7, 8, 9]);
    }

    #[test]
    fn should_convert_from_arrays_and_tuples() {
        assert_eq!(Vector3i::from([1, 2, 3]), Vector3i::new(1, 2, 3));
        assert_eq!(Vector3i::from((1, 2, 3)), Vector3i::new(1, 2, 3));
        let a: [i32; 3] = Vector3i::new(4, 5, 6).into();
        assert_eq!(a, [4, 5, 6]);
    }

    #[test]
    fn should_default_to_origin() {
        assert_eq!(Vector3i::default(), Vector3i::new(0, 0, 0));
        assert_eq!(Vector3u16::default(), Vector3u16::splat(0));
    }

    // -------------------------------------------------------------------------
    // Arithmetic
    // -------------------------------------------------------------------------

    #[test]
    fn should_add_componentwise() {
        let a = Vector3i::new(1, 2, 3);
        let b = Vector3i::new(6, 5, 4);
        assert_eq!(a.add(b), Vector3i::new(7, 7, 7));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a.add(b).x(), 7);
    }

    #[test]
    fn should_scale_componentwise() {
        let v = Vector3i::new(7, -2, 0);
        assert_eq!(v.scale(5), Vector3i::new(35, -10, 0));
        assert_eq!(v.scale(5).x(), 35);
        assert_eq!(v * 5, v.scale(5));
    }

    #[test]
    fn should_not_mutate_operands() {
        let a = Vector3i::new(1, 1, 1);
        let b = Vector3i::new(2, 2, 2);
        let _ = a.add(b);
        let _ = a.scale(10);
        assert_eq!(a, Vector3i::new(1, 1, 1));
        assert_eq!(b, Vector3i::new(2, 2, 2));
    }

    #[test]
    fn should_work_for_unsigned_components() {
        let v = Vector3u16::new(1, 2, 3);
        assert_eq!(v.add(v).scale(2), Vector3u16::new(4, 8, 12));
    }

    #[test]
    fn should_compute_float_helpers() {
        let x = Vector3f::new(1.0, 0.0, 0.0);
        let y = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3f::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3f::new(0.0, 0.0, 2.0).normalize(), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(x.lerp(y, 0.5), Vector3f::new(0.5, 0.5, 0.0));
    }

    // -------------------------------------------------------------------------
    // Equality
    // -------------------------------------------------------------------------

    #[test]
    fn should_compare_equal_vectors() {
        let a = Vector3i::new(1, 2, 3);
        assert!(a.equals(Some(&a)));
        assert!(a.equals(Some(&Vector3i::new(1, 2, 3))));
    }

    #[test]
    fn should_be_unequal_to_absent_operand() {
        let a = Vector3i::new(1, 2, 3);
        assert!(!a.equals(None));
    }

    #[test]
    fn should_differ_when_any_single_component_differs() {
        let a = Vector3i::new(1, 2, 3);
        for b in [
            Vector3i::new(9, 2, 3),
            Vector3i::new(1, 9, 3),
            Vector3i::new(1, 2, 9),
        ] {
            assert!(!a.equals(Some(&b)));
            assert!(a != b);
        }
    }

    #[test]
    fn should_display_as_tuple() {
        assert_eq!(Vector3i::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }
}

// =============================================================================
// SECTION 2: Region Tests
// =============================================================================

mod region_tests {
    use super::*;

    fn region_32() -> Region {
        Region::from_coords(0, 0, 0, 31, 31, 31).unwrap()
    }

    #[test]
    fn should_reject_inverted_corners_on_each_axis() {
        for upper in [
            Vector3i::new(-1, 5, 5),
            Vector3i::new(5, -1, 5),
            Vector3i::new(5, 5, -1),
        ] {
            let result = Region::new(Vector3i::splat(0), upper);
            assert!(matches!(result, Err(VoxError::InvalidRegion { .. })));
        }
    }

    #[test]
    fn should_accept_single_voxel_region() {
        let r = Region::single(Vector3i::new(4, 5, 6));
        assert_eq!(r.voxel_count(), 1);
        assert_eq!(r.cell_count(), 0);
        assert_eq!(r.dimensions_in_cells(), Vector3i::splat(0));
    }

    #[test]
    fn should_report_dimensions() {
        let r = Region::from_coords(-2, 0, 10, 5, 3, 10).unwrap();
        assert_eq!(r.dimensions_in_voxels(), Vector3i::new(8, 4, 1));
        assert_eq!(r.dimensions_in_cells(), Vector3i::new(7, 3, 0));
        assert_eq!(r.voxel_count(), 32);
    }

    #[test]
    fn should_contain_its_corners() {
        let r = region_32();
        assert!(r.contains(r.lower()));
        assert!(r.contains(r.upper()));
        assert!(r.contains(Vector3i::new(0, 31, 0)));
    }

    #[test]
    fn should_not_contain_points_one_beyond_upper_on_any_axis() {
        let r = region_32();
        for p in [
            Vector3i::new(32, 31, 31),
            Vector3i::new(31, 32, 31),
            Vector3i::new(31, 31, 32),
        ] {
            assert!(!r.contains(p), "{} should be outside", p);
        }
    }

    #[test]
    fn should_not_contain_points_one_below_lower_on_any_axis() {
        let r = region_32();
        for p in [
            Vector3i::new(-1, 0, 0),
            Vector3i::new(0, -1, 0),
            Vector3i::new(0, 0, -1),
        ] {
            assert!(!r.contains(p));
        }
    }

    #[test]
    fn should_shrink_containment_with_boundary() {
        let r = region_32();
        assert!(r.contains_with_boundary(Vector3i::splat(1), 1));
        assert!(!r.contains_with_boundary(Vector3i::new(0, 5, 5), 1));
        assert!(r.contains_in_x(30, 1));
        assert!(!r.contains_in_y(31, 1));
        assert!(r.contains_in_z(0, 0));
        assert!(r.contains_f32(Vector3f::splat(15.5), 0.5));
    }

    #[test]
    fn should_contain_subregions() {
        let r = region_32();
        let inner = Region::from_coords(4, 4, 4, 8, 8, 8).unwrap();
        let straddling = Region::from_coords(16, 16, 16, 40, 20, 20).unwrap();
        assert!(r.contains_region(&inner));
        assert!(r.contains_region(&r));
        assert!(!r.contains_region(&straddling));
        assert!(!inner.contains_region(&r));
    }

    #[test]
    fn should_intersect_overlapping_regions() {
        let a = Region::from_coords(0, 0, 0, 10, 10, 10).unwrap();
        let b = Region::from_coords(5, 5, 5, 20, 20, 20).unwrap();
        let c = Region::from_coords(11, 0, 0, 12, 1, 1).unwrap();
        assert_eq!(
            a.intersection(&b),
            Some(Region::from_coords(5, 5, 5, 10, 10, 10).unwrap())
        );
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn should_derive_grown_shrunk_and_shifted_regions() {
        let r = Region::from_coords(2, 2, 2, 6, 6, 6).unwrap();
        assert_eq!(
            r.dilate(Vector3i::splat(1)).unwrap(),
            Region::from_coords(1, 1, 1, 7, 7, 7).unwrap()
        );
        assert_eq!(
            r.erode(Vector3i::splat(2)).unwrap(),
            Region::single(Vector3i::splat(4))
        );
        assert!(r.erode(Vector3i::splat(3)).is_err());
        assert_eq!(
            r.shift(Vector3i::new(10, 0, 0)).unwrap().lower(),
            Vector3i::new(12, 2, 2)
        );
        assert!(r.shift_lower(Vector3i::splat(5)).is_err());
        assert_eq!(
            r.shift_upper(Vector3i::splat(1)).unwrap().upper(),
            Vector3i::splat(7)
        );
    }

    #[test]
    fn should_clamp_points_into_region() {
        let r = region_32();
        assert_eq!(r.clamp(Vector3i::new(-5, 40, 7)), Vector3i::new(0, 31, 7));
    }

    #[test]
    fn should_iterate_points_x_fastest() {
        let r = Region::from_coords(0, 0, 0, 1, 1, 1).unwrap();
        let points: Vec<_> = r.points().collect();
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], Vector3i::new(0, 0, 0));
        assert_eq!(points[1], Vector3i::new(1, 0, 0));
        assert_eq!(points[2], Vector3i::new(0, 1, 0));
        assert_eq!(points[4], Vector3i::new(0, 0, 1));
    }
}

// =============================================================================
// SECTION 3: Voxel and Controller Tests
// =============================================================================

mod controller_tests {
    use super::*;

    #[test]
    fn should_use_type_midpoint_as_default_threshold() {
        assert_eq!(DefaultController::<u8>::new().threshold(), 127);
        assert_eq!(DefaultController::<i8>::new().threshold(), 0);
        assert_eq!(DefaultController::<u16>::new().threshold(), 32767);
        assert_eq!(DefaultController::<f32>::new().threshold(), 0.0);
    }

    #[test]
    fn should_treat_threshold_as_inside() {
        let c = DefaultController::<u8>::new();
        assert!(c.is_inside(127));
        assert!(c.is_inside(200));
        assert!(!c.is_inside(126));
    }

    #[test]
    fn should_split_material_density_pairs() {
        let c = DefaultController::<MaterialDensityPair88>::with_threshold(100);
        let v = MaterialDensityPair88::new(3, 150);
        assert_eq!(c.convert_to_density(v), 150);
        assert_eq!(c.convert_to_material(v), 3);
        assert!(c.is_inside(c.convert_to_density(v)));
    }

    #[test]
    fn should_use_primitive_value_as_its_own_material() {
        let c = DefaultController::<u8>::new();
        assert_eq!(c.convert_to_material(200), 200);
        assert_eq!(c.convert_to_density(200), 200);
    }
}

// =============================================================================
// SECTION 4: Cell Math Tests
// =============================================================================

mod cell_math_tests {
    use super::*;

    #[test]
    fn should_index_outside_corners() {
        let mut d = [255u8; 8];
        assert_eq!(compute_cube_index(&d, 127), 0);
        d[5] = 0;
        assert_eq!(compute_cube_index(&d, 127), 1 << 5);
    }

    #[test]
    fn should_place_crossing_by_linear_interpolation() {
        let p = interpolate_vertex(
            Vector3f::new(5.0, 5.0, 5.0),
            Vector3f::new(6.0, 5.0, 5.0),
            200.0,
            0.0,
            127.0,
        );
        assert!((p.x - 5.365).abs() < 1e-5);
        assert_eq!(p.y, 5.0);
    }

    #[test]
    fn should_triangulate_every_configuration_within_capacity() {
        for config in 0..256usize {
            let values: [f32; 8] =
                core::array::from_fn(|i| if config & (1 << i) != 0 { 0.0 } else { 1.0 });
            let (triangles, count) = process_cell(Vector3f::splat(0.0), &values, 0.5);
            assert_eq!(count, cell_triangles(config).count(), "config {}", config);
            assert!(count <= MAX_CELL_TRIANGLES);
            for tri in triangles.iter().take(count) {
                for v in tri {
                    // Crossings sit halfway along unit edges.
                    let sum = v.x + v.y + v.z;
                    assert!((sum * 2.0 - (sum * 2.0).round()).abs() < 1e-6);
                }
            }
        }
    }
}

// =============================================================================
// SECTION 5: Marching Cubes Table Tests
// =============================================================================

mod marching_cubes_table_tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Table Size Invariants
    // -------------------------------------------------------------------------

    #[test]
    fn should_have_256_entries() {
        assert_eq!(EDGE_TABLE.len(), 256);
        assert_eq!(TRI_TABLE.len(), 256);
        assert_eq!(EDGE_VERTICES.len(), 12);
        assert_eq!(CORNER_OFFSETS.len(), 8);
    }

    // -------------------------------------------------------------------------
    // Edge Table Symmetry
    // -------------------------------------------------------------------------

    #[test]
    fn should_have_no_edges_for_uniform_configs() {
        assert_eq!(EDGE_TABLE[0], 0);
        assert_eq!(EDGE_TABLE[255], 0);
        assert_eq!(TRI_TABLE[0][0], -1);
        assert_eq!(TRI_TABLE[255][0], -1);
    }

    #[test]
    fn should_have_symmetric_edge_masks_for_complement_configs() {
        for i in 0..128 {
            assert_eq!(
                EDGE_TABLE[i],
                EDGE_TABLE[255 - i],
                "Asymmetry at configs {} and {}",
                i,
                255 - i
            );
        }
    }

    #[test]
    fn should_flag_exactly_the_edges_with_a_sign_change() {
        for (config, &mask) in EDGE_TABLE.iter().enumerate() {
            for (edge, &(a, b)) in EDGE_VERTICES.iter().enumerate() {
                let crossed = ((config >> a) & 1) != ((config >> b) & 1);
                assert_eq!(
                    mask & (1 << edge) != 0,
                    crossed,
                    "config {} edge {}",
                    config,
                    edge
                );
            }
        }
    }

    // -------------------------------------------------------------------------
    // Triangle Table Termination
    // -------------------------------------------------------------------------

    #[test]
    fn should_have_properly_terminated_triangle_entries() {
        for (i, entry) in TRI_TABLE.iter().enumerate() {
            let used = entry.iter().take_while(|&&e| e != -1).count();
            assert_eq!(used % 3, 0, "entry {} is not a list of triangles", i);
            assert!(
                entry[used..].iter().all(|&e| e == -1),
                "entry {} has values after the terminator",
                i
            );
        }
    }

    #[test]
    fn should_only_reference_flagged_edges() {
        for (config, entry) in TRI_TABLE.iter().enumerate() {
            for &e in entry.iter().take_while(|&&e| e != -1) {
                assert!(
                    EDGE_TABLE[config] & (1 << e) != 0,
                    "config {} uses unflagged edge {}",
                    config,
                    e
                );
            }
        }
    }

    #[test]
    fn should_produce_one_triangle_for_single_corner_configs() {
        for corner in 0..8 {
            assert_eq!(cell_triangles(1 << corner).count(), 1);
            assert_eq!(cell_triangles(255 ^ (1 << corner)).count(), 1);
        }
    }

    // -------------------------------------------------------------------------
    // Edge Vertex Validity
    // -------------------------------------------------------------------------

    #[test]
    fn should_have_adjacent_corner_endpoints() {
        for (edge_idx, (v0, v1)) in EDGE_VERTICES.iter().enumerate() {
            let c0 = CORNER_OFFSETS[*v0];
            let c1 = CORNER_OFFSETS[*v1];

            let dx = (c0.0 as i32 - c1.0 as i32).abs();
            let dy = (c0.1 as i32 - c1.1 as i32).abs();
            let dz = (c0.2 as i32 - c1.2 as i32).abs();

            assert_eq!(
                dx + dy + dz,
                1,
                "Edge {} connects non-adjacent corners: {:?} and {:?}",
                edge_idx,
                c0,
                c1
            );
        }
    }
}

// =============================================================================
// SECTION 6: Property Tests
// =============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn vector() -> impl Strategy<Value = Vector3i> {
        (-1000i32..1000, -1000i32..1000, -1000i32..1000).prop_map(Vector3i::from)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn add_is_commutative(a in vector(), b in vector()) {
            prop_assert_eq!(a.add(b), b.add(a));
        }

        #[test]
        fn add_is_associative(a in vector(), b in vector(), c in vector()) {
            prop_assert_eq!(a.add(b).add(c), a.add(b.add(c)));
        }

        #[test]
        fn scale_by_one_is_identity(v in vector()) {
            prop_assert_eq!(v.scale(1), v);
            prop_assert!(v.scale(1).equals(Some(&v)));
        }

        #[test]
        fn equals_is_reflexive_and_symmetric(a in vector(), b in vector()) {
            prop_assert!(a.equals(Some(&a)));
            prop_assert_eq!(a.equals(Some(&b)), b.equals(Some(&a)));
            prop_assert_eq!(a.equals(Some(&b)), a == b);
            prop_assert!(!a.equals(None));
        }

        #[test]
        fn region_contains_exactly_its_box(lower in vector(), size in (0i32..20, 0i32..20, 0i32..20), p in vector()) {
            let upper = lower + Vector3i::from(size);
            let region = Region::new(lower, upper).unwrap();
            let expected = lower.all_le(p) && p.all_le(upper);
            prop_assert_eq!(region.contains(p), expected);
            prop_assert!(region.contains(region.clamp(p)));
        }

        #[test]
        fn accepted_regions_have_representable_extents(
            lower in any::<(i32, i32, i32)>(),
            upper in any::<(i32, i32, i32)>(),
            amount in any::<(i32, i32, i32)>(),
        ) {
            let (lower, upper) = (Vector3i::from(lower), Vector3i::from(upper));
            let amount = Vector3i::from(amount);
            if let Ok(region) = Region::new(lower, upper) {
                let dims = region.dimensions_in_voxels();
                prop_assert!(dims.x >= 1 && dims.y >= 1 && dims.z >= 1);
                prop_assert_eq!(dims.x as i64, upper.x as i64 - lower.x as i64 + 1);
                prop_assert!(region.voxel_count() >= 1);

                for derived in [
                    region.dilate(amount),
                    region.erode(amount),
                    region.shift(amount),
                    region.shift_lower(amount),
                    region.shift_upper(amount),
                ] {
                    match derived {
                        Ok(r) => prop_assert!(r.lower().all_le(r.upper())),
                        Err(e) => prop_assert!(matches!(e, VoxError::InvalidRegion { .. }), "expected InvalidRegion, got {:?}", e),
                    }
                }
            }
        }
    }
}
