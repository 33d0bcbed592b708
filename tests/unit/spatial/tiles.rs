//! Tests for tile construction, oriented edges and border removal

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use ndarray::{Array2, array};
    use tileseam::TileError;
    use tileseam::spatial::tiles::{Side, Tile, count_active, without_border};
    use tileseam::spatial::transform::Transformation;

    fn sample_tile() -> Tile {
        Tile::new(
            7,
            array![
                [true, true, false],
                [false, false, false],
                [true, false, false],
            ],
        )
        .unwrap()
    }

    // Tests edges read rows left-to-right and columns top-to-bottom
    #[test]
    fn test_identity_edges() {
        let edges = sample_tile().edges(Transformation::Identity);

        assert_eq!(edges.top, bitvec![1, 1, 0]);
        assert_eq!(edges.bottom, bitvec![1, 0, 0]);
        assert_eq!(edges.left, bitvec![1, 0, 1]);
        assert_eq!(edges.right, bitvec![0, 0, 0]);
    }

    // Tests edges follow the orientation of the tile
    #[test]
    fn test_rotated_edges() {
        let tile = sample_tile();
        let edges = tile.edges(Transformation::Rotate90);

        // Quarter turn counter-clockwise moves the right column to the top row
        assert_eq!(edges.top, bitvec![0, 0, 0]);
        assert_eq!(edges.left, bitvec![0, 1, 1]);
        assert_eq!(edges.bottom, bitvec![1, 0, 1]);

        let flipped = tile.edges(Transformation::FlipHorizontal);
        assert_eq!(flipped.top, bitvec![0, 1, 1]);
        assert_eq!(flipped.left, bitvec![0, 0, 0]);
    }

    // Tests single-edge views agree with the collected edge set
    #[test]
    fn test_edge_view_matches_edges() {
        let tile = sample_tile();
        for transformation in Transformation::ALL {
            let edges = tile.edges(transformation);
            let right: BitVec = tile
                .edge(transformation, Side::Right)
                .iter()
                .copied()
                .collect();
            let top: BitVec = tile
                .edge(transformation, Side::Top)
                .iter()
                .copied()
                .collect();
            assert_eq!(right, edges.right);
            assert_eq!(top, edges.top);
        }
    }

    // Tests construction rejects non-square and empty grids
    #[test]
    fn test_invalid_tiles_rejected() {
        let wide = Array2::from_elem((2, 3), false);
        assert!(matches!(
            Tile::new(1, wide),
            Err(TileError::NonSquareTile {
                id: 1,
                rows: 2,
                cols: 3
            })
        ));

        let empty = Array2::from_elem((0, 0), false);
        assert!(matches!(
            Tile::new(2, empty),
            Err(TileError::EmptyTile { id: 2 })
        ));

        let ragged = vec![vec![true, false], vec![true]];
        assert!(Tile::from_rows(3, &ragged).is_err());
    }

    // Tests row-based construction matches array construction
    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![true, true, false],
            vec![false, false, false],
            vec![true, false, false],
        ];
        let tile = Tile::from_rows(7, &rows).unwrap();

        assert_eq!(tile, sample_tile());
        assert_eq!(tile.id(), 7);
        assert_eq!(tile.side(), 3);
        assert_eq!(tile.active_cells(), 3);
    }

    // Tests border removal keeps only the interior
    #[test]
    fn test_without_border() {
        let grid = array![
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ];
        assert_eq!(without_border(grid.view()), array![[6, 7], [10, 11]]);

        let small = array![[1, 2], [3, 4]];
        assert_eq!(without_border(small.view()).dim(), (0, 0));

        let single = array![[1]];
        assert_eq!(without_border(single.view()).dim(), (0, 0));
    }

    // Tests border removal commutes with orientation
    #[test]
    fn test_border_removal_commutes_with_orientation() {
        let grid = Array2::from_shape_fn((5, 5), |(r, c)| (r * 7 + c * 3) % 4 == 0);
        for transformation in Transformation::ALL {
            let strip_then_turn = transformation.apply(without_border(grid.view()).view());
            let turn_then_strip = without_border(transformation.view(grid.view()));
            assert_eq!(strip_then_turn, turn_then_strip);
        }
    }

    // Tests active cell counting
    #[test]
    fn test_count_active() {
        let grid = array![[true, false], [true, true]];
        assert_eq!(count_active(grid.view()), 3);
    }
}
