//! Tests for window indexing, toroidal reads and the eight-element symmetry group

#[cfg(test)]
mod tests {
    use convchain::analysis::patterns::{
        Symmetry, cell_bit, decode_index, encode_pattern, orbit_indices, pattern_count,
        pattern_index, symmetric_pattern_index, transform_index,
    };
    use convchain::spatial::BinaryGrid;
    use std::collections::BTreeSet;

    fn single_cell(width: usize, height: usize, x: usize, y: usize) -> BinaryGrid {
        BinaryGrid::from_fn(width, height, |cx, cy| cx == x && cy == y).expect("valid grid")
    }

    // Tests pattern counts and bit positions follow row-major packing
    // Verified by packing column-major
    #[test]
    fn test_counts_and_bits() {
        assert_eq!(pattern_count(1), 2);
        assert_eq!(pattern_count(2), 16);
        assert_eq!(pattern_count(3), 512);
        assert_eq!(cell_bit(0, 0, 3), 1);
        assert_eq!(cell_bit(2, 0, 3), 4);
        assert_eq!(cell_bit(0, 1, 3), 8);
        assert_eq!(cell_bit(2, 2, 3), 256);
    }

    // Tests window index reads relative to the anchor
    // Verified by ignoring the anchor offset
    #[test]
    fn test_pattern_index_layout() {
        let grid = single_cell(3, 3, 1, 0);
        assert_eq!(pattern_index(&grid, 0, 0, 2), 2);
        assert_eq!(pattern_index(&grid, 1, 0, 2), 1);
        assert_eq!(pattern_index(&grid, 1, 1, 2), 0);
        assert_eq!(pattern_index(&grid, 0, 0, 3), 2);
    }

    // Tests windows past the right and bottom edges wrap to the opposite side
    // Verified by clamping coordinates instead of wrapping
    #[test]
    fn test_pattern_index_wraps() {
        let grid = single_cell(3, 3, 0, 0);
        assert_eq!(pattern_index(&grid, 2, 2, 2), 8);
        assert_eq!(pattern_index(&grid, -1, -1, 2), 8);
        assert_eq!(pattern_index(&grid, 2, 0, 2), 2);
    }

    // Tests a one-cell grid fills every window of every size with that cell
    // Verified by treating out-of-range reads as unset
    #[test]
    fn test_single_cell_grid_fills_window() {
        let set = BinaryGrid::from_cells(1, 1, [true]).expect("valid grid");
        let unset = BinaryGrid::new(1, 1).expect("valid grid");
        for n in 1..=4 {
            assert_eq!(pattern_index(&set, 0, 0, n), pattern_count(n) - 1);
            assert_eq!(pattern_index(&unset, 0, 0, n), 0);
        }
    }

    // Tests an asymmetric pattern has eight distinct images
    // Verified by mapping Rotate270 onto Rotate90
    #[test]
    fn test_asymmetric_orbit() {
        // ##.
        // ..#
        // ...
        let index = encode_pattern(
            &[true, true, false, false, false, true, false, false, false],
            3,
        );
        assert_eq!(index, 35);

        let orbit = Symmetry::ALL.map(|symmetry| transform_index(index, 3, symmetry));
        assert_eq!(orbit, [35, 74, 392, 164, 14, 290, 224, 137]);
        assert_eq!(orbit.iter().collect::<BTreeSet<_>>().len(), 8);
    }

    // Tests a corner cell visits every corner exactly twice
    // Verified by dropping the reflected variants
    #[test]
    fn test_corner_orbit() {
        let orbit = Symmetry::ALL.map(|symmetry| transform_index(1, 2, symmetry));
        for corner in [1, 2, 4, 8] {
            assert_eq!(orbit.iter().filter(|&&index| index == corner).count(), 2);
        }
    }

    // Tests rotations compose to the identity and reflection is an involution
    // Verified by reflecting top to bottom in Rotate90
    #[test]
    fn test_group_structure() {
        for index in 0..pattern_count(3) {
            let mut rotated = index;
            for _ in 0..4 {
                rotated = transform_index(rotated, 3, Symmetry::Rotate90);
            }
            assert_eq!(rotated, index);

            let reflected = transform_index(index, 3, Symmetry::Reflect);
            assert_eq!(transform_index(reflected, 3, Symmetry::Reflect), index);

            let half_turn = transform_index(
                transform_index(index, 3, Symmetry::Rotate90),
                3,
                Symmetry::Rotate90,
            );
            assert_eq!(half_turn, transform_index(index, 3, Symmetry::Rotate180));
        }
    }

    // Tests every orbit is closed under the group
    // Verified by swapping the coordinates of Rotate270Reflect
    #[test]
    fn test_orbits_are_closed() {
        let orbit_of = |index: usize| -> BTreeSet<usize> {
            Symmetry::ALL
                .iter()
                .map(|&symmetry| transform_index(index, 2, symmetry))
                .collect()
        };

        for index in 0..pattern_count(2) {
            let orbit = orbit_of(index);
            for &member in &orbit {
                assert_eq!(orbit_of(member), orbit);
            }
        }
    }

    // Tests reading a transformed window equals transforming the read index
    // Verified by applying source_cell to the anchor instead of the offset
    #[test]
    fn test_orbit_indices_match_transform() {
        let grid = BinaryGrid::from_fn(4, 5, |x, y| (x * 3 + y * y) % 4 == 1).expect("valid grid");
        for anchor_y in 0..5 {
            for anchor_x in 0..4 {
                let base = pattern_index(&grid, anchor_x, anchor_y, 3);
                let orbit = orbit_indices(&grid, anchor_x, anchor_y, 3);
                for (symmetry, read) in Symmetry::ALL.iter().zip(orbit) {
                    assert_eq!(read, transform_index(base, 3, *symmetry));
                    assert_eq!(
                        read,
                        symmetric_pattern_index(&grid, anchor_x, anchor_y, 3, *symmetry)
                    );
                }
            }
        }
    }

    // Tests decoding then encoding returns the original index for every pattern
    // Verified by reversing the bit order in decode_index
    #[test]
    fn test_index_round_trip() {
        for n in 1..=3 {
            for index in 0..pattern_count(n) {
                let cells = decode_index(index, n);
                assert_eq!(cells.len(), n * n);
                assert_eq!(encode_pattern(&cells, n), index);
            }
        }
    }

    // Tests encoding reads only the first n*n cells
    // Verified by encoding the whole slice
    #[test]
    fn test_encode_ignores_extra_cells() {
        assert_eq!(encode_pattern(&[true, false, true, true, true], 2), 13);
        assert_eq!(encode_pattern(&[true], 2), 1);
    }

    // Tests a one-cell pattern is fixed by every symmetry
    // Verified by removing the saturating subtraction for n = 1
    #[test]
    fn test_source_cell_size_one() {
        for symmetry in Symmetry::ALL {
            assert_eq!(symmetry.source_cell(0, 0, 1), (0, 0));
            assert_eq!(transform_index(1, 1, symmetry), 1);
        }
    }
}
