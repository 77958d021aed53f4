//! Tests for domino construction, pair shapes and tile handles

#[cfg(test)]
mod tests {
    use domino_shuffle::TilingError;
    use domino_shuffle::spatial::coordinate::{Coordinate, Orientation};
    use domino_shuffle::spatial::tiles::{
        Domino, PairShape, Tile, TileId, TileIdAllocator, random_pair,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_well_formed_dominoes() {
        assert!(Domino::new(TileId(0), [c(0, 0), c(1, 0)], Orientation::Up).is_ok());
        assert!(Domino::new(TileId(1), [c(0, 0), c(1, 0)], Orientation::Down).is_ok());
        assert!(Domino::new(TileId(2), [c(0, 0), c(0, 1)], Orientation::Left).is_ok());
        assert!(Domino::new(TileId(3), [c(0, 0), c(0, 1)], Orientation::Right).is_ok());
    }

    // Tests facing must be perpendicular to the long axis
    #[test]
    fn test_facing_along_long_axis_is_malformed() {
        let error = Domino::new(TileId(0), [c(0, 0), c(1, 0)], Orientation::Left).unwrap_err();
        assert!(matches!(error, TilingError::MalformedTile { .. }));

        let error = Domino::new(TileId(0), [c(0, 0), c(0, 1)], Orientation::Up).unwrap_err();
        assert!(matches!(error, TilingError::MalformedTile { .. }));
    }

    #[test]
    fn test_non_adjacent_cells_are_malformed() {
        for cells in [
            [c(0, 0), c(1, 1)],
            [c(0, 0), c(2, 0)],
            [c(3, 3), c(3, 3)],
        ] {
            assert!(Domino::new(TileId(0), cells, Orientation::Up).is_err());
            assert!(Domino::new(TileId(0), cells, Orientation::Right).is_err());
        }
    }

    // Tests a horizontal pair stacks two dominoes facing apart
    #[test]
    fn test_horizontal_pair_shape() {
        let mut ids = TileIdAllocator::new();
        let [top, bottom] = PairShape::Horizontal
            .dominoes(c(2, 3), &mut ids)
            .expect("valid pair");

        assert_eq!(top.cells(), [c(2, 3), c(3, 3)]);
        assert_eq!(top.orientation(), Orientation::Up);
        assert_eq!(bottom.cells(), [c(2, 4), c(3, 4)]);
        assert_eq!(bottom.orientation(), Orientation::Down);
        assert_eq!(top.id(), TileId(0));
        assert_eq!(bottom.id(), TileId(1));
    }

    // Tests a vertical pair places two dominoes side by side facing apart
    #[test]
    fn test_vertical_pair_shape() {
        let mut ids = TileIdAllocator::new();
        let [left, right] = PairShape::Vertical
            .dominoes(c(2, 3), &mut ids)
            .expect("valid pair");

        assert_eq!(left.cells(), [c(2, 3), c(2, 4)]);
        assert_eq!(left.orientation(), Orientation::Left);
        assert_eq!(right.cells(), [c(3, 3), c(3, 4)]);
        assert_eq!(right.orientation(), Orientation::Right);
    }

    // Tests a pair always covers exactly the 2x2 block at its anchor
    #[test]
    fn test_random_pair_covers_block() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut ids = TileIdAllocator::new();

        for _ in 0..50 {
            let pair = random_pair(&mut rng, c(4, 6), &mut ids).expect("valid pair");
            let mut cells: Vec<Coordinate> = pair.iter().flat_map(Domino::cells).collect();
            cells.sort();
            assert_eq!(cells, vec![c(4, 6), c(4, 7), c(5, 6), c(5, 7)]);
            assert_eq!(pair[0].orientation().opposite(), pair[1].orientation());
        }
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = TileIdAllocator::new();
        let first = ids.allocate();
        let second = ids.allocate();
        let third = ids.allocate();

        assert!(first < second && second < third);
        assert_eq!(third.to_string(), "#2");
    }

    // Tests advancing slides along the facing and recenters
    #[test]
    fn test_advanced_slides_and_translates() {
        let up = Domino::new(TileId(0), [c(0, 0), c(1, 0)], Orientation::Up).expect("valid");
        assert_eq!(up.advanced().cells(), [c(1, 0), c(2, 0)]);

        let right = Domino::new(TileId(1), [c(1, 0), c(1, 1)], Orientation::Right).expect("valid");
        let moved = right.advanced();
        assert_eq!(moved.cells(), [c(3, 1), c(3, 2)]);
        assert_eq!(moved.orientation(), Orientation::Right);
        assert_eq!(moved.id(), TileId(1));
    }

    #[test]
    fn test_tile_handle_lifecycle() {
        let domino = Domino::new(TileId(7), [c(0, 0), c(0, 1)], Orientation::Left).expect("valid");
        let mut tile: Tile<&str> = Tile::new(domino);

        assert!(tile.handle().is_none());
        *tile.handle_mut() = Some("sprite");
        assert_eq!(tile.handle(), Some(&"sprite"));
        assert_eq!(tile.take_handle(), Some("sprite"));
        assert!(tile.handle().is_none());

        assert_eq!(tile.id(), TileId(7));
        assert!(tile.domino().covers(c(0, 1)));
        assert!(!tile.domino().covers(c(1, 1)));
    }
}
