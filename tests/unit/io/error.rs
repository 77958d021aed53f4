//! Tests for error formatting and conversions

#[cfg(test)]
mod tests {
    use std::error::Error;

    use domino_shuffle::TilingError;
    use domino_shuffle::io::error::{ensure_parent_dir, invalid_parameter, output_error};
    use domino_shuffle::spatial::coordinate::{Coordinate, Orientation};
    use domino_shuffle::spatial::tiles::TileId;
    use futures::channel::oneshot;
    use tempfile::tempdir;

    #[test]
    fn test_display_messages() {
        let out_of_bounds = TilingError::OutOfBounds {
            coordinate: Coordinate::new(4, -1),
            side: 4,
        };
        assert_eq!(
            out_of_bounds.to_string(),
            "Coordinate (4, -1) is outside the 4x4 grid"
        );

        let malformed = TilingError::MalformedTile {
            cells: [Coordinate::new(0, 0), Coordinate::new(1, 0)],
            orientation: Orientation::Left,
        };
        assert_eq!(
            malformed.to_string(),
            "Cells (0, 0) and (1, 0) do not form a domino facing left"
        );

        let missing = TilingError::TileNotFound { id: TileId(12) };
        assert!(missing.to_string().contains("#12"));

        let invalid = invalid_parameter("order", &0, &"must be positive");
        assert_eq!(
            invalid.to_string(),
            "Invalid parameter 'order' = '0': must be positive"
        );
    }

    // Tests a dropped acknowledgment sender maps to a disconnected renderer
    #[test]
    fn test_canceled_acknowledgment_converts() {
        let (sender, receiver) = oneshot::channel::<()>();
        drop(sender);

        let canceled = futures::executor::block_on(receiver).unwrap_err();
        let error = TilingError::from(canceled);

        assert!(matches!(error, TilingError::RendererDisconnected));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        let error = output_error(
            "write frame",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        );

        assert!(error.to_string().starts_with("Output error during write frame"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempdir().expect("temporary directory");
        let nested = dir.path().join("a").join("b").join("out.png");

        ensure_parent_dir(&nested).expect("directories created");
        assert!(dir.path().join("a").join("b").is_dir());

        ensure_parent_dir(std::path::Path::new("relative.png")).expect("nothing to create");
    }
}
