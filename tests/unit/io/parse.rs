//! Tests for the tile text format

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tileseam::TileError;
    use tileseam::io::parse::{format_grid, parse_tiles, read_motif, read_tiles};

    const SAMPLE: &str = "Tile 7:\n#..\n.#.\n..#\n\nTile 9:\n###\n...\n#.#\n";

    fn line_of(error: TileError) -> usize {
        match error {
            TileError::Parse { line, .. } => line,
            other => panic!("expected a parse error, got {other}"),
        }
    }

    // Tests tiles are read in order with their ids and cells
    #[test]
    fn test_parse_sample() {
        let tiles = parse_tiles(SAMPLE).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].id(), 7);
        assert_eq!(tiles[1].id(), 9);
        assert_eq!(tiles[0].active_cells(), 3);
        assert_eq!(format_grid(tiles[1].cells()), "###\n...\n#.#");
    }

    // Tests extra blank lines and missing trailing newline are accepted
    #[test]
    fn test_parse_tolerates_spacing() {
        let text = "\n\nTile 1:\n#.\n.#\n\n\n\nTile 2:\n..\n##";
        let tiles = parse_tiles(text).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].active_cells(), 2);

        assert!(parse_tiles("").unwrap().is_empty());
    }

    // Tests errors point at the offending line
    // Verified by counting lines from zero
    #[test]
    fn test_parse_errors_carry_line_numbers() {
        assert_eq!(line_of(parse_tiles("#..\n").unwrap_err()), 1);
        assert_eq!(line_of(parse_tiles("Tile 1:\n#.\n#x\n").unwrap_err()), 3);
        assert_eq!(line_of(parse_tiles("Tile 1:\n#..\n#.\n").unwrap_err()), 3);
        assert_eq!(line_of(parse_tiles("Tile 1\n#.\n").unwrap_err()), 1);
        assert_eq!(line_of(parse_tiles("\nTile abc:\n#.\n").unwrap_err()), 2);
        assert_eq!(line_of(parse_tiles("Tile 4:\n\nTile 5:\n#\n").unwrap_err()), 1);
    }

    // Tests shape problems surface as tile errors
    #[test]
    fn test_parse_rejects_non_square_tile() {
        let error = parse_tiles("Tile 3:\n###\n...\n").unwrap_err();
        assert!(matches!(
            error,
            TileError::NonSquareTile {
                id: 3,
                rows: 2,
                cols: 3
            }
        ));
    }

    // Tests the bundled fixture parses completely
    #[test]
    fn test_parse_fixture() {
        let text = include_str!("../../fixtures/tiles.txt");
        let tiles = parse_tiles(text).unwrap();
        assert_eq!(tiles.len(), 144);
        assert!(tiles.iter().all(|tile| tile.side() == 10));
    }

    // Tests reading from disk and reporting missing files
    #[test]
    fn test_read_tiles_and_motif() {
        let dir = tempfile::tempdir().unwrap();
        let tile_path = dir.path().join("tiles.txt");
        std::fs::write(&tile_path, SAMPLE).unwrap();
        assert_eq!(read_tiles(&tile_path).unwrap().len(), 2);

        let motif_path = dir.path().join("motif.txt");
        let mut file = std::fs::File::create(&motif_path).unwrap();
        writeln!(file, "#.#").unwrap();
        writeln!(file, ".#.").unwrap();
        drop(file);
        assert_eq!(read_motif(&motif_path).unwrap().active_cells(), 3);

        let missing = read_tiles(&dir.path().join("absent.txt"));
        assert!(matches!(missing, Err(TileError::FileSystem { .. })));
    }
}
