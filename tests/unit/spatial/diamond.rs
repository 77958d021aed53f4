//! Tests for the Aztec diamond mask

#[cfg(test)]
mod tests {
    use domino_shuffle::TilingError;
    use domino_shuffle::spatial::coordinate::Coordinate;
    use domino_shuffle::spatial::diamond::DiamondMask;

    // Tests the mask is symmetric under all four quadrant reflections
    #[test]
    fn test_mask_is_quadrant_symmetric() {
        for half_size in 1..=12 {
            let mask = DiamondMask::new(half_size).expect("valid half size");
            let side = mask.side();
            for i in 0..side {
                for j in 0..side {
                    let blocked = mask.is_blocked(i, j);
                    assert_eq!(blocked, mask.is_blocked(side - 1 - i, j));
                    assert_eq!(blocked, mask.is_blocked(i, side - 1 - j));
                    assert_eq!(blocked, mask.is_blocked(side - 1 - i, side - 1 - j));
                }
            }
        }
    }

    // Tests a half size of one has no blocked cells
    #[test]
    fn test_smallest_diamond_is_fully_open() {
        let mask = DiamondMask::new(1).expect("valid half size");

        assert_eq!(mask.side(), 2);
        assert_eq!(mask.blocked_count(), 0);
        assert_eq!(mask.free_count(), 4);
    }

    // Tests the cell count of A(n) is 2n(n+1)
    #[test]
    fn test_free_cells_match_aztec_diamond_area() {
        for n in 1..=20 {
            let mask = DiamondMask::new(n).expect("valid half size");
            assert_eq!(mask.free_count(), 2 * n * (n + 1), "A({n})");
            assert_eq!(mask.blocked_count(), 2 * n * (n - 1), "A({n})");
        }
    }

    // Tests the staircase shape of the upper-left corner for A(3)
    #[test]
    fn test_corner_staircase() {
        let mask = DiamondMask::new(3).expect("valid half size");

        assert!(mask.is_blocked(0, 0));
        assert!(mask.is_blocked(1, 0));
        assert!(mask.is_blocked(0, 1));
        assert!(!mask.is_blocked(1, 1));
        assert!(!mask.is_blocked(2, 0));
        assert!(!mask.is_blocked(0, 2));
    }

    #[test]
    fn test_contains_rejects_outside_square() {
        let mask = DiamondMask::new(2).expect("valid half size");

        assert!(mask.contains(Coordinate::new(1, 1)));
        assert!(!mask.contains(Coordinate::new(0, 0)));
        assert!(!mask.contains(Coordinate::new(-1, 1)));
        assert!(!mask.contains(Coordinate::new(1, 4)));
        assert!(mask.is_blocked(4, 1));
    }

    #[test]
    fn test_zero_half_size_is_rejected() {
        let error = DiamondMask::new(0).unwrap_err();
        assert!(matches!(
            error,
            TilingError::InvalidParameter {
                parameter: "half_size",
                ..
            }
        ));
    }
}
