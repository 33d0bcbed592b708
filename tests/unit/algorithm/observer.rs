//! Tests for search observers

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tileseam::Transformation;
    use tileseam::algorithm::observer::{NoopObserver, SearchObserver, SearchStats, Tee};
    use tileseam::algorithm::solver::assemble_with;
    use tileseam::spatial::placement::Layout;
    use tileseam::spatial::tiles::Tile;

    /// Records the fill level of every dead end it sees
    #[derive(Default)]
    struct DeadEndRecorder {
        filled: Vec<usize>,
    }

    impl SearchObserver for DeadEndRecorder {
        fn on_dead_end(&mut self, layout: &Layout) {
            self.filled.push(layout.filled());
        }
    }

    // Tests counters follow the events they receive
    #[test]
    fn test_stats_count_events() {
        let mut stats = SearchStats::new();
        stats.on_place(1, 10, Transformation::Identity);
        stats.on_place(2, 11, Transformation::Rotate90);
        stats.on_backtrack(1, 11, Transformation::Rotate90);
        stats.on_place(2, 12, Transformation::FlipVertical);
        stats.on_dead_end(&Layout::new(2));

        assert_eq!(stats.placements, 3);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.dead_ends, 1);
        assert_eq!(stats.max_depth, 2);
    }

    // Tests both halves of a tee see every event
    #[test]
    fn test_tee_forwards_to_both() {
        let mut tee = Tee {
            first: SearchStats::new(),
            second: SearchStats::new(),
        };
        tee.on_place(1, 1, Transformation::Identity);
        tee.on_backtrack(0, 1, Transformation::Identity);
        tee.on_dead_end(&Layout::new(1));

        assert_eq!(tee.first, tee.second);
        assert_eq!(tee.first.placements, 1);
        assert_eq!(tee.first.dead_ends, 1);
    }

    // Tests forwarding through a mutable reference
    #[test]
    fn test_mutable_reference_forwards() {
        let mut stats = SearchStats::new();
        {
            let borrowed = &mut stats;
            borrowed.on_place(4, 9, Transformation::Rotate180);
        }
        assert_eq!(stats.placements, 1);
        assert_eq!(stats.max_depth, 4);

        let mut noop = NoopObserver;
        noop.on_place(1, 1, Transformation::Identity);
        noop.on_dead_end(&Layout::new(1));
    }

    // Tests a custom observer sees partial layouts during a real search
    #[test]
    fn test_dead_end_layouts_are_partial() {
        // Four tiles whose shared border was corrupted in one cell
        let patterns = [
            (17, ["####", "..##", "..#.", ".###"]),
            (11, ["..#.", "....", "..##", "#.##"]),
            (19, ["#.##", "##.#", "##.#", "..##"]),
            (13, ["..#.", "##..", "##.#", ".###"]),
        ];
        let tiles: Vec<Tile> = patterns
            .iter()
            .map(|(id, rows)| {
                let cells = Array2::from_shape_fn((4, 4), |(r, c)| rows[r].as_bytes()[c] == b'#');
                Tile::new(*id, cells).unwrap()
            })
            .collect();

        let mut recorder = DeadEndRecorder::default();
        let outcome = assemble_with(&tiles, &mut recorder).unwrap();

        assert!(!outcome.is_solved());
        assert!(!recorder.filled.is_empty());
        assert!(recorder.filled.iter().all(|&filled| filled < 4));
        assert_eq!(recorder.filled.len(), 147);
        assert_eq!(recorder.filled.last(), Some(&0));
    }
}
