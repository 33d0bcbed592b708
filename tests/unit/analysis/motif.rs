//! Tests for motif parsing, counting and orientation scanning

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use tileseam::TileError;
    use tileseam::analysis::motif::{Motif, count_occurrences, occurrence_mask, scan_motif};
    use tileseam::io::configuration::SEA_MONSTER;
    use tileseam::spatial::tiles::count_active;
    use tileseam::spatial::transform::Transformation;

    fn l_shape() -> Motif {
        Motif::from_ascii("#.\n##").unwrap()
    }

    // Tests ASCII art becomes sorted offsets with a bounding box
    #[test]
    fn test_from_ascii() {
        let motif = Motif::from_ascii(" #\n# #\n").unwrap();
        assert_eq!(motif.offsets(), &[[0, 1], [1, 0], [1, 2]]);
        assert_eq!(motif.height(), 2);
        assert_eq!(motif.width(), 3);
        assert_eq!(motif.active_cells(), 3);

        let monster = Motif::from_ascii(SEA_MONSTER).unwrap();
        assert_eq!(monster.active_cells(), 15);
        assert_eq!((monster.height(), monster.width()), (3, 20));
    }

    // Tests blank motifs are rejected and duplicates collapse
    #[test]
    fn test_motif_validation() {
        assert!(matches!(
            Motif::from_ascii("...\n   "),
            Err(TileError::InvalidMotif { .. })
        ));
        assert!(Motif::new(Vec::new()).is_err());

        let motif = Motif::new(vec![[1, 1], [0, 0], [1, 1]]).unwrap();
        assert_eq!(motif.offsets(), &[[0, 0], [1, 1]]);
    }

    // Tests anchors reach the last row and column
    #[test]
    fn test_count_includes_far_edges() {
        let image = array![
            [false, false, false],
            [false, true, false],
            [false, true, true],
        ];
        assert_eq!(count_occurrences(image.view(), &l_shape()), 1);

        let full = Array2::from_elem((3, 3), true);
        assert_eq!(count_occurrences(full.view(), &l_shape()), 4);
    }

    // Tests a motif larger than the image never matches
    #[test]
    fn test_motif_larger_than_image() {
        let image = Array2::from_elem((2, 5), true);
        let monster = Motif::from_ascii(SEA_MONSTER).unwrap();
        assert_eq!(count_occurrences(image.view(), &monster), 0);

        let report = scan_motif(image.view(), &monster);
        assert_eq!(report.best_orientation_count, 0);
        assert_eq!(report.roughness(), 10);
    }

    // Tests no occurrences leaves roughness equal to the active cell count
    #[test]
    fn test_no_occurrences() {
        let image = array![[true, false, true], [false, false, false], [true, false, true]];
        let report = scan_motif(image.view(), &l_shape());

        assert_eq!(report.best_orientation, Transformation::Identity);
        assert_eq!(report.best_orientation_count, 0);
        assert_eq!(report.total_active_cells, 4);
        assert_eq!(report.roughness(), 4);
        assert_eq!(report.exact_roughness(), 4);
    }

    // Tests the best count is the same whichever orientation the image arrives in
    #[test]
    fn test_scan_is_orientation_invariant() {
        let mut image = Array2::from_elem((6, 7), false);
        for [row, col] in [[0, 0], [1, 0], [1, 1], [3, 4], [4, 4], [4, 5], [5, 2]] {
            image[[row, col]] = true;
        }
        let motif = l_shape();
        let baseline = scan_motif(image.view(), &motif);
        assert_eq!(baseline.best_orientation_count, 2);
        assert_eq!(baseline.roughness(), 1);

        for transformation in Transformation::ALL {
            let turned = transformation.apply(image.view());
            let report = scan_motif(turned.view(), &motif);
            assert_eq!(
                report.best_orientation_count, baseline.best_orientation_count,
                "{transformation}"
            );
            assert_eq!(report.roughness(), baseline.roughness());
            assert_eq!(
                count_occurrences(report.best_orientation.view(turned.view()), &motif),
                2
            );
        }
    }

    // Tests ties go to the earliest orientation in catalog order
    #[test]
    fn test_ties_prefer_earliest_orientation() {
        let full = Array2::from_elem((3, 3), true);
        let report = scan_motif(full.view(), &l_shape());
        assert_eq!(report.best_orientation, Transformation::Identity);
        assert_eq!(report.best_orientation_count, 4);
    }

    // Tests overlapping occurrences saturate roughness but not exact roughness
    #[test]
    fn test_overlapping_occurrences() {
        let full = Array2::from_elem((3, 3), true);
        let report = scan_motif(full.view(), &l_shape());

        // Four overlapping L shapes claim 12 cells of a 9-cell image
        assert_eq!(report.roughness(), 0);
        assert_eq!(report.covered_cells, 8);
        assert_eq!(report.exact_roughness(), 1);

        let mask = occurrence_mask(full.view(), &l_shape());
        assert_eq!(count_active(mask.view()), 8);
        assert!(!mask[[0, 2]]);
    }
}
